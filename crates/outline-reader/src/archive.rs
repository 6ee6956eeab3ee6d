//! Shared helpers for Office Open XML packages.

use crate::error::{ReaderError, Result};
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

pub type Package<'a> = ZipArchive<Cursor<&'a [u8]>>;

pub fn open(bytes: &[u8]) -> Result<Package<'_>> {
    Ok(ZipArchive::new(Cursor::new(bytes))?)
}

/// Read one XML part, mapping a missing entry to [`ReaderError::MissingPart`].
pub fn read_part(package: &mut Package<'_>, name: &str) -> Result<String> {
    let mut file = package.by_name(name).map_err(|e| match e {
        ZipError::FileNotFound => ReaderError::MissingPart(name.to_string()),
        other => ReaderError::Zip(other),
    })?;
    let mut xml = String::new();
    file.read_to_string(&mut xml)?;
    Ok(xml)
}

/// Like [`read_part`] but `None` when the part does not exist.
pub fn read_optional_part(package: &mut Package<'_>, name: &str) -> Result<Option<String>> {
    match read_part(package, name) {
        Ok(xml) => Ok(Some(xml)),
        Err(ReaderError::MissingPart(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Split extracted text into trimmed, non-empty lines.
pub fn push_lines(out: &mut Vec<String>, text: &str) {
    out.extend(
        text.split('\n')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string),
    );
}

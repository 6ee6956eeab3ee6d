use criterion::{black_box, criterion_group, criterion_main, Criterion};
use outline_reader::{DocxReader, XlsxReader};

const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const S: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";

fn generate_document_xml(paragraphs: usize) -> String {
    let mut xml = format!(r#"<w:document xmlns:w="{W}"><w:body>"#);
    for i in 0..paragraphs {
        xml.push_str(&format!(
            "<w:p><w:r><w:t>{}.{} Section heading</w:t></w:r><w:r><w:tab/><w:t>{}</w:t></w:r></w:p>",
            i / 10 + 1,
            i % 10,
            i + 3
        ));
    }
    xml.push_str("</w:body></w:document>");
    xml
}

fn generate_sheet_xml(rows: usize) -> String {
    let mut xml = format!(r#"<worksheet xmlns="{S}"><sheetData>"#);
    for i in 0..rows {
        xml.push_str(&format!(
            r#"<row><c t="inlineStr"><is><t>{} Row title</t></is></c><c><v>{}</v></c></row>"#,
            i + 1,
            i
        ));
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn bench_docx(c: &mut Criterion) {
    let xml = generate_document_xml(2000);
    c.bench_function("docx_paragraphs_2000", |b| {
        b.iter(|| black_box(DocxReader::paragraphs(black_box(&xml)).unwrap()))
    });
}

fn bench_xlsx(c: &mut Criterion) {
    let xml = generate_sheet_xml(2000);
    c.bench_function("xlsx_sheet_cells_2000", |b| {
        b.iter(|| black_box(XlsxReader::sheet_cells(black_box(&xml), &[]).unwrap()))
    });
}

criterion_group!(benches, bench_docx, bench_xlsx);
criterion_main!(benches);

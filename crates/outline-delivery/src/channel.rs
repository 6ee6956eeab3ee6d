//! Reply transports.

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Channel closed")]
    Closed,
    #[error("Message of {len} chars exceeds transport limit {limit}")]
    TooLarge { len: usize, limit: usize },
    #[error("Send failed: {0}")]
    Send(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Something that carries text messages back to the requester, in order.
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), ChannelError>;
}

/// Collects messages in memory. Can be told to start failing after a number
/// of successful sends, or to reject messages above a size.
#[derive(Debug, Default)]
pub struct MemoryChannel {
    sent: Mutex<Vec<String>>,
    fail_after: Option<usize>,
    limit: Option<usize>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept `n` messages, then fail every send with [`ChannelError::Closed`].
    pub fn failing_after(n: usize) -> Self {
        Self { fail_after: Some(n), ..Self::default() }
    }

    /// Reject messages longer than `limit` characters.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }
}

#[async_trait]
impl ReplyChannel for MemoryChannel {
    async fn send(&self, text: &str) -> Result<(), ChannelError> {
        let mut sent = self.sent.lock();
        if self.fail_after.is_some_and(|n| sent.len() >= n) {
            return Err(ChannelError::Closed);
        }
        if let Some(limit) = self.limit {
            let len = text.chars().count();
            if len > limit {
                return Err(ChannelError::TooLarge { len, limit });
            }
        }
        sent.push(text.to_string());
        Ok(())
    }
}

/// Writes each message followed by a newline to an async writer, flushing
/// after every message.
pub struct WriterChannel<W> {
    writer: tokio::sync::Mutex<W>,
}

impl<W> WriterChannel<W>
where
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(writer: W) -> Self {
        Self { writer: tokio::sync::Mutex::new(writer) }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterChannel<tokio::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(tokio::io::stdout())
    }
}

#[async_trait]
impl<W> ReplyChannel for WriterChannel<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&self, text: &str) -> Result<(), ChannelError> {
        let mut writer = self.writer.lock().await;
        writer.write_all(text.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }
}

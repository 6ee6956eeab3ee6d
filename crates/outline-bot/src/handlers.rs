//! Start, document and text handlers.

use crate::error::{BotError, Result};
use crate::messages::{DocumentUpload, Incoming, MessageKind};
use async_trait::async_trait;
use outline_core::{
    serialize_extraction, serialize_text, AppConfig, BotConfig, DeliveryConfig, DocumentFormat,
    JsonStyle, OutputFormat,
};
use outline_delivery::{deliver, send_text, DeliveryOptions, ReplyChannel};
use outline_engine::OutlineExtractor;
use outline_reader::read_document;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Incoming, channel: &dyn ReplyChannel) -> Result<()>;
}

fn unexpected(expected: MessageKind, message: &Incoming) -> BotError {
    BotError::UnexpectedMessage { expected, got: message.kind() }
}

/// Greets the user by name.
pub struct StartHandler {
    bot: BotConfig,
    delivery: DeliveryConfig,
}

impl StartHandler {
    pub fn new(config: &AppConfig) -> Self {
        Self { bot: config.bot.clone(), delivery: config.delivery.clone() }
    }
}

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, message: &Incoming, channel: &dyn ReplyChannel) -> Result<()> {
        let Incoming::Start { user_name } = message else {
            return Err(unexpected(MessageKind::Start, message));
        };
        send_text(channel, &self.bot.greeting_for(user_name), self.delivery.frame_limit).await?;
        Ok(())
    }
}

/// Any plain text gets the usage hint.
pub struct TextHandler {
    bot: BotConfig,
    delivery: DeliveryConfig,
}

impl TextHandler {
    pub fn new(config: &AppConfig) -> Self {
        Self { bot: config.bot.clone(), delivery: config.delivery.clone() }
    }
}

#[async_trait]
impl Handler for TextHandler {
    async fn handle(&self, message: &Incoming, channel: &dyn ReplyChannel) -> Result<()> {
        if message.kind() != MessageKind::Text {
            return Err(unexpected(MessageKind::Text, message));
        }
        send_text(channel, &self.bot.usage_hint, self.delivery.frame_limit).await?;
        Ok(())
    }
}

/// Reads an uploaded document, reconstructs its outline and delivers the
/// JSON in frames followed by the acknowledgement.
///
/// Unsupported types and unreadable files are answered in the chat; only a
/// failing reply channel surfaces as an error.
pub struct DocumentHandler {
    extractor: Arc<OutlineExtractor>,
    bot: BotConfig,
    delivery: DeliveryConfig,
}

impl DocumentHandler {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            extractor: Arc::new(OutlineExtractor::new(config.outline.clone())?),
            bot: config.bot.clone(),
            delivery: config.delivery.clone(),
        })
    }

    /// Produce the payload for one document. Runs on the blocking pool since
    /// decoding and scanning are CPU-bound.
    pub async fn render(&self, format: DocumentFormat, upload: &DocumentUpload) -> Result<String> {
        let extractor = Arc::clone(&self.extractor);
        let bytes = Arc::clone(&upload.bytes);
        let output = self.bot.output;
        let style = JsonStyle::from_pretty(self.delivery.pretty);
        tokio::task::spawn_blocking(move || -> Result<String> {
            match output {
                OutputFormat::Outline => {
                    let lines = read_document(format, &bytes, extractor.config().scan_ceiling())?;
                    let outcome = extractor.extract_with_report(lines);
                    Ok(serialize_extraction(&outcome.extraction, style)?)
                }
                OutputFormat::Text => {
                    let lines = read_document(format, &bytes, None)?;
                    let joined = lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>().join("\n");
                    Ok(serialize_text(joined.trim(), style)?)
                }
            }
        })
        .await?
    }
}

#[async_trait]
impl Handler for DocumentHandler {
    async fn handle(&self, message: &Incoming, channel: &dyn ReplyChannel) -> Result<()> {
        let Incoming::Document(upload) = message else {
            return Err(unexpected(MessageKind::Document, message));
        };
        let limit = self.delivery.frame_limit;
        let Some(format) = upload.format() else {
            info!(file = %upload.file_name, mime = %upload.mime_type, "unsupported document type");
            send_text(channel, &self.bot.unsupported_type, limit).await?;
            return Ok(());
        };

        let job_id = Uuid::new_v4();
        let span = info_span!("document", %job_id, file = %upload.file_name, %format);
        async move {
            match self.render(format, upload).await {
                Ok(payload) => {
                    let report = deliver(channel, &payload, &DeliveryOptions::from(&self.delivery)).await?;
                    info!(frames = report.frames, chars = report.chars, "document answered");
                }
                Err(err) => {
                    warn!(error = %err, "document processing failed");
                    let reply = format!("{}{}", self.bot.failure_prefix, err);
                    send_text(channel, &reply, limit).await?;
                }
            }
            Ok::<(), BotError>(())
        }
        .instrument(span)
        .await
    }
}

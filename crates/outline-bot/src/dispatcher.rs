//! Kind-to-handler routing table, built once at startup.

use crate::error::{BotError, Result};
use crate::handlers::{DocumentHandler, Handler, StartHandler, TextHandler};
use crate::messages::{Incoming, MessageKind};
use outline_core::AppConfig;
use outline_delivery::ReplyChannel;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<MessageKind, Arc<dyn Handler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`, replacing any earlier one.
    pub fn register(mut self, kind: MessageKind, handler: Arc<dyn Handler>) -> Self {
        self.handlers.insert(kind, handler);
        self
    }

    /// The standard start, document and text handlers.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let document = DocumentHandler::new(config)?;
        Ok(Self::new()
            .register(MessageKind::Start, Arc::new(StartHandler::new(config)))
            .register(MessageKind::Document, Arc::new(document))
            .register(MessageKind::Text, Arc::new(TextHandler::new(config))))
    }

    pub fn handles(&self, kind: MessageKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub async fn dispatch(&self, message: &Incoming, channel: &dyn ReplyChannel) -> Result<()> {
        let kind = message.kind();
        let handler = self.handlers.get(&kind).ok_or(BotError::NoHandler(kind))?;
        debug!(%kind, "dispatching message");
        handler.handle(message, channel).await
    }
}

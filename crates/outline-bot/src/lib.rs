//! Message handling for the outline bot.
//!
//! Incoming messages are routed by kind to a handler registered at startup.
//! Handlers reply through a [`outline_delivery::ReplyChannel`].

pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod messages;

pub use dispatcher::Dispatcher;
pub use error::{BotError, Result};
pub use handlers::{DocumentHandler, Handler, StartHandler, TextHandler};
pub use messages::{DocumentUpload, Incoming, MessageKind};

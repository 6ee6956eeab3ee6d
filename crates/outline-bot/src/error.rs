use crate::messages::MessageKind;
use outline_core::OutlineError;
use outline_delivery::DeliveryError;
use outline_reader::ReaderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("No handler registered for {0} messages")]
    NoHandler(MessageKind),
    #[error("Handler for {expected} messages received a {got} message")]
    UnexpectedMessage { expected: MessageKind, got: MessageKind },
    #[error(transparent)]
    Reader(#[from] ReaderError),
    #[error(transparent)]
    Outline(#[from] OutlineError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error("Worker task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;

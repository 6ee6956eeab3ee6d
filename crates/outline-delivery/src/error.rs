use crate::channel::ChannelError;
use thiserror::Error;

/// A payload could not be delivered completely. Frames already sent stay
/// sent; `delivered` says how many reached the channel.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Frame delivery failed after {delivered} of {total} frames: {source}")]
    Frame {
        delivered: usize,
        total: usize,
        #[source]
        source: ChannelError,
    },
    #[error("Acknowledgement failed after all {delivered} frames: {source}")]
    Acknowledgement {
        delivered: usize,
        #[source]
        source: ChannelError,
    },
}

impl DeliveryError {
    /// Frames that reached the channel before the failure.
    pub fn delivered(&self) -> usize {
        match self {
            Self::Frame { delivered, .. } | Self::Acknowledgement { delivered, .. } => *delivered,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeliveryError>;

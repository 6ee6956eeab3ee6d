//! Ordered, paced delivery.
//!
//! Frames go out strictly in order and each send is awaited before the next
//! one starts. If the surrounding task is cancelled, the frames already sent
//! stay sent and no acknowledgement follows.

use crate::channel::ReplyChannel;
use crate::chunker::FrameChunker;
use crate::error::{DeliveryError, Result};
use chrono::{DateTime, Utc};
use outline_core::DeliveryConfig;
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOptions {
    pub limit: NonZeroUsize,
    /// Sent after the last frame, if any.
    pub acknowledgement: Option<String>,
    pub interval: Duration,
}

impl DeliveryOptions {
    pub fn new(limit: NonZeroUsize) -> Self {
        Self {
            limit,
            acknowledgement: None,
            interval: Duration::ZERO,
        }
    }

    pub fn with_acknowledgement(mut self, text: impl Into<String>) -> Self {
        self.acknowledgement = Some(text.into());
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

impl From<&DeliveryConfig> for DeliveryOptions {
    fn from(config: &DeliveryConfig) -> Self {
        let acknowledgement = Some(config.acknowledgement.clone()).filter(|a| !a.is_empty());
        Self {
            limit: config.frame_limit,
            acknowledgement,
            interval: Duration::from_millis(config.frame_interval_ms),
        }
    }
}

/// What went out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub frames: usize,
    pub chars: usize,
    pub acknowledged: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Send `payload` as ordered frames, then the acknowledgement.
pub async fn deliver<C>(channel: &C, payload: &str, options: &DeliveryOptions) -> Result<DeliveryReport>
where
    C: ReplyChannel + ?Sized,
{
    let chunker = FrameChunker::new(options.limit);
    let total = chunker.count(payload);
    let started_at = Utc::now();
    debug!(total, limit = options.limit.get(), "delivering payload");

    for (delivered, frame) in chunker.frames(payload).enumerate() {
        if delivered > 0 && !options.interval.is_zero() {
            tokio::time::sleep(options.interval).await;
        }
        if let Err(source) = channel.send(frame).await {
            warn!(delivered, total, error = %source, "frame delivery failed");
            return Err(DeliveryError::Frame { delivered, total, source });
        }
    }

    let acknowledged = match &options.acknowledgement {
        Some(ack) => {
            if let Err(source) = channel.send(ack).await {
                warn!(total, error = %source, "acknowledgement failed");
                return Err(DeliveryError::Acknowledgement { delivered: total, source });
            }
            true
        }
        None => false,
    };

    Ok(DeliveryReport {
        frames: total,
        chars: payload.chars().count(),
        acknowledged,
        started_at,
        finished_at: Utc::now(),
    })
}

/// Send a short reply, split if it happens to exceed the limit.
pub async fn send_text<C>(channel: &C, text: &str, limit: NonZeroUsize) -> Result<DeliveryReport>
where
    C: ReplyChannel + ?Sized,
{
    deliver(channel, text, &DeliveryOptions::new(limit)).await
}

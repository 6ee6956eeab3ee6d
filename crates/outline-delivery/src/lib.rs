//! Size-bounded delivery of serialized payloads.
//!
//! A payload is cut into ordered frames no longer than the transport's
//! message ceiling and sent one after another over a [`ReplyChannel`],
//! followed by an optional acknowledgement.

pub mod channel;
pub mod chunker;
pub mod deliver;
pub mod error;

pub use channel::{ChannelError, MemoryChannel, ReplyChannel, WriterChannel};
pub use chunker::{chunk, reassemble, FrameChunker, Frames};
pub use deliver::{deliver, send_text, DeliveryOptions, DeliveryReport};
pub use error::{DeliveryError, Result};

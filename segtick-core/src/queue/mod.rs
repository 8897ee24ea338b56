//! Frame queue
//!
//! Bounded ring of frames between any number of producer contexts and the
//! single tick handler that drains it.

pub mod ring;

pub use ring::{Consumer, FrameQueue, Producer, QueueFull, DEFAULT_QUEUE_SLOTS};

//! Bus state machine
//!
//! Drives the TM1637 start / byte / ack / stop sequence one line operation
//! per tick. The machine is explicit, finite, and knows nothing about
//! interrupts: whoever owns the timer calls [`Machine::tick`].

pub mod machine;
pub mod phase;

pub use machine::{FrameSource, Machine, Step};
pub use phase::Phase;

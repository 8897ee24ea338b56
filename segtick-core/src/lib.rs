//! Board-agnostic engine of the TM1637 driver
//!
//! This crate contains everything between the public display API and the
//! two bus lines:
//!
//! - Lock-free frame queue shared by producers and the tick handler
//! - Bus state machine advancing one line operation per tick
//! - Acknowledgment tracking and timer wake/park arbitration
//! - Display configuration types
//!
//! A [`Bus`] is created once (usually in a `StaticCell`) and split into a
//! [`Sender`] for application code and a [`Transmitter`] that the timer
//! interrupt advances.

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod config;
pub mod link;
pub mod queue;
pub mod state;

pub use bus::{Bus, Sender, Transmitter};
pub use link::{AckTracker, Link};
pub use queue::{Consumer, FrameQueue, Producer, QueueFull, DEFAULT_QUEUE_SLOTS};
pub use state::{FrameSource, Machine, Phase, Step};

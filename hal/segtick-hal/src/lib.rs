//! Segtick Hardware Abstraction Layer
//!
//! This crate defines the collaborators the TM1637 driver needs from the
//! target: two digital lines and a periodic timer. Chip-specific crates
//! implement these traits so the driver core stays board-agnostic.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (segtick-firmware, etc.)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segtick-drivers / segtick-core         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segtick-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ segtick-hal-  │       │  embedded-hal │
//! │    rp2040     │       │  via EhPin    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Clock and data lines
//! - [`timer::TickTimer`] - Periodic interrupt source driving the bus

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use gpio::{EhPin, InputPin, IoPin, Level, OutputPin};
pub use timer::TickTimer;

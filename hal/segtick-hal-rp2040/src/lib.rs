//! RP2040 binding for the Segtick TM1637 driver
//!
//! Implements the `segtick-hal` traits on RP2040 hardware:
//!
//! - Clock line on a push-pull output
//! - Data line on an open-drain output that can be read back
//! - SysTick as the periodic tick timer

#![no_std]

pub mod gpio;
pub mod systick;

pub use gpio::{OpenDrain, PushPull};
pub use systick::{SysTickTimer, TimerError};

// Re-export the shared traits for convenience
pub use segtick_hal::{InputPin, IoPin, OutputPin, TickTimer};

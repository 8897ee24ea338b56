//! TM1637 Wire Protocol
//!
//! This crate defines what travels over the two-wire TM1637 bus: frames of
//! one to seven bytes, the command bytes the controller understands, and the
//! segment patterns for decimal digits.
//!
//! # Protocol Overview
//!
//! Every transaction is bracketed by a start and a stop condition:
//! ```text
//!        ┌──────── byte ────────┐┌ack┐
//! CLK ‾‾‾‾‾\_/‾\_/‾\_/ ... \_/‾\_/‾\_____/‾‾‾‾
//! DIO ‾‾\___X___X___X ... X___/‾‾\_______/‾‾‾‾
//!       start  b0  b1       b7   ack     stop
//! ```
//!
//! Bits go out least-significant first, set while the clock is low and
//! latched on its rising edge. After each byte the device pulls DIO low for
//! one clock pulse to acknowledge it.

#![no_std]
#![deny(unsafe_code)]

pub mod commands;
pub mod digits;
pub mod frame;

pub use commands::{Brightness, DataCommand, DisplayControl};
pub use digits::{encode_digit, DIGITS};
pub use frame::{Frame, FrameError, MAX_FRAME_LEN};

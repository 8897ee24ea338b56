//! Display drivers
//!
//! Concrete display front-ends on top of `segtick-core`:
//!
//! - TM1637 4/6-digit seven-segment controller

#![no_std]
#![deny(unsafe_code)]

pub mod tm1637;

pub use tm1637::{Tm1637, Tm1637Error};

//! TM1637 seven-segment controller
//!
//! Every call turns into one or two frames on the bus queue and returns
//! immediately; the tick handler clocks them out in the background.

mod driver;
mod error;
pub mod render;

pub use driver::Tm1637;
pub use error::Tm1637Error;

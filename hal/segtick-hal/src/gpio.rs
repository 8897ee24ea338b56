//! GPIO line abstractions
//!
//! The TM1637 bus has a push-pull clock line and a data line that is driven
//! by the host and sampled during the acknowledgment window.

use core::convert::Infallible;

/// Logic level of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

/// Digital output line
///
/// Setting a level must be a single register write: the bus engine issues
/// one of these per tick and never waits on the pin.
pub trait OutputPin {
    /// Drive the line high (or release it, for open-drain lines)
    fn set_high(&mut self);

    /// Drive the line low
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }
}

/// Digital input line
pub trait InputPin {
    /// Check if the line reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the line reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

/// Line that is both driven and sampled
///
/// The TM1637 data line is one of these: the host writes bits on it and
/// reads the slave's acknowledgment back from it.
pub trait IoPin: OutputPin + InputPin {}

// Blanket implementation for types that implement both traits
impl<T: OutputPin + InputPin> IoPin for T {}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&mut self) -> bool {
        T::is_high(self)
    }
}

/// Adapter for `embedded-hal` 1.0 pins
///
/// Any pin whose error type is [`Infallible`] (the usual case for on-chip
/// GPIO) can be used as a bus line by wrapping it.
#[derive(Debug)]
pub struct EhPin<P>(pub P);

impl<P> EhPin<P> {
    /// Wrap an embedded-hal pin
    pub const fn new(pin: P) -> Self {
        Self(pin)
    }

    /// Return the wrapped pin
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> OutputPin for EhPin<P>
where
    P: embedded_hal::digital::OutputPin<Error = Infallible>,
{
    fn set_high(&mut self) {
        match self.0.set_high() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn set_low(&mut self) {
        match self.0.set_low() {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<P> InputPin for EhPin<P>
where
    P: embedded_hal::digital::InputPin<Error = Infallible>,
{
    fn is_high(&mut self) -> bool {
        match self.0.is_high() {
            Ok(high) => high,
            Err(never) => match never {},
        }
    }
}

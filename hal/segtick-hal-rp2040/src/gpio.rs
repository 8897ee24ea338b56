//! Bus lines on RP2040 GPIO

use embassy_rp::gpio::{Level, Output, OutputOpenDrain, Pin};
use embassy_rp::Peri;
use segtick_hal::{InputPin, OutputPin};

/// Push-pull output, used for the clock line
pub struct PushPull<'d>(Output<'d>);

impl<'d> PushPull<'d> {
    /// Take `pin` as an output, initially high (bus idle)
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self(Output::new(pin, Level::High))
    }

    /// Give back the embassy output
    pub fn into_inner(self) -> Output<'d> {
        self.0
    }
}

impl OutputPin for PushPull<'_> {
    #[inline]
    fn set_high(&mut self) {
        self.0.set_high();
    }

    #[inline]
    fn set_low(&mut self) {
        self.0.set_low();
    }
}

/// Open-drain line, used for the data line
///
/// High releases the line to the module's pull-up so the device can pull it
/// low during the acknowledgment window.
pub struct OpenDrain<'d>(OutputOpenDrain<'d>);

impl<'d> OpenDrain<'d> {
    /// Take `pin` as an open-drain line, initially released
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self(OutputOpenDrain::new(pin, Level::High))
    }

    /// Give back the embassy line
    pub fn into_inner(self) -> OutputOpenDrain<'d> {
        self.0
    }
}

impl OutputPin for OpenDrain<'_> {
    #[inline]
    fn set_high(&mut self) {
        self.0.set_high();
    }

    #[inline]
    fn set_low(&mut self) {
        self.0.set_low();
    }
}

impl InputPin for OpenDrain<'_> {
    #[inline]
    fn is_high(&mut self) -> bool {
        self.0.is_high()
    }
}

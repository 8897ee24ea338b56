//! Non-blocking TM1637 facade

use segtick_core::config::DisplayConfig;
use segtick_core::{Sender, DEFAULT_QUEUE_SLOTS};
use segtick_hal::TickTimer;
use segtick_protocol::commands::{address, ADDRESS_00H, DISPLAY_REGISTERS};
use segtick_protocol::digits::BLANK;
use segtick_protocol::{Brightness, DataCommand, DisplayControl, Frame};

use super::error::Tm1637Error;
use super::render;

/// TM1637 display driver
///
/// Cheap to construct from a [`Sender`]; several instances may share one
/// bus, each remembering its own brightness.
pub struct Tm1637<'a, T, const N: usize = DEFAULT_QUEUE_SLOTS> {
    bus: Sender<'a, T, N>,
    brightness: Brightness,
    on: bool,
}

impl<'a, T: TickTimer, const N: usize> Tm1637<'a, T, N> {
    /// Create a driver with the default brightness (level 5)
    pub fn new(bus: Sender<'a, T, N>) -> Self {
        Self {
            bus,
            brightness: Brightness::default(),
            on: false,
        }
    }

    /// Create a driver using the configured brightness
    pub fn from_config(bus: Sender<'a, T, N>, config: &DisplayConfig) -> Self {
        Self {
            bus,
            brightness: Brightness::saturating(config.brightness),
            on: false,
        }
    }

    /// Blank `digit_count` positions and switch the display on
    pub fn init(&mut self, digit_count: u8) -> Result<(), Tm1637Error> {
        let clear = Self::blank_frame(digit_count)?;
        self.submit(&[
            DataCommand::AUTO_INCREMENT.to_frame(),
            clear,
            DisplayControl::on(self.brightness).to_frame(),
        ])?;
        self.on = true;
        Ok(())
    }

    /// Queue a single command byte
    pub fn write_raw_byte(&self, byte: u8) -> Result<(), Tm1637Error> {
        self.submit(&[Frame::byte(byte)])
    }

    /// Write segment bytes to consecutive registers starting at `address`
    ///
    /// `address` is the full address command (`0xC0 | position`). At most
    /// six segment bytes are accepted.
    pub fn write_display(&self, address: u8, segments: &[u8]) -> Result<(), Tm1637Error> {
        if segments.len() > DISPLAY_REGISTERS as usize {
            #[cfg(feature = "defmt")]
            defmt::warn!("TM1637: {} segment bytes rejected", segments.len());
            return Err(Tm1637Error::FrameTooLong);
        }

        let data = Frame::with_data(address, segments)?;
        self.submit(&[DataCommand::AUTO_INCREMENT.to_frame(), data])
    }

    /// Write one register using fixed addressing
    pub fn write_segment(&self, address: u8, segments: u8) -> Result<(), Tm1637Error> {
        let data = Frame::new(&[address, segments])?;
        self.submit(&[DataCommand::FIXED_ADDRESS.to_frame(), data])
    }

    /// Switch the display on at `level` (0-7, higher values clamp to 7)
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Tm1637Error> {
        let brightness = Brightness::saturating(level);
        self.control(DisplayControl::on(brightness))?;
        self.brightness = brightness;
        self.on = true;
        Ok(())
    }

    /// Switch the display on at the remembered brightness
    pub fn display_on(&mut self) -> Result<(), Tm1637Error> {
        self.control(DisplayControl::on(self.brightness))?;
        self.on = true;
        Ok(())
    }

    /// Switch the display off; segment data is kept
    pub fn display_off(&mut self) -> Result<(), Tm1637Error> {
        self.control(DisplayControl::off(self.brightness))?;
        self.on = false;
        Ok(())
    }

    /// Read and clear the acknowledgment status
    ///
    /// `true` if every byte since the previous call was acknowledged.
    pub fn take_ack_status(&self) -> bool {
        self.bus.take_ack_status()
    }

    /// Remembered brightness
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Whether the last display control sent switched the display on
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Show decimal digits starting at `position`
    ///
    /// Values above 9 render blank.
    pub fn show_digits(&self, position: u8, digits: &[u8]) -> Result<(), Tm1637Error> {
        let start = address(position).ok_or(Tm1637Error::InvalidPosition)?;
        if digits.is_empty() {
            return Err(Tm1637Error::InvalidPosition);
        }
        if position as usize + digits.len() > DISPLAY_REGISTERS as usize {
            return Err(Tm1637Error::FrameTooLong);
        }
        self.write_display(start, &render::digits(digits))
    }

    /// Show `value` right-aligned over the first `digit_count` positions
    pub fn show_number(&self, value: u32, digit_count: u8) -> Result<(), Tm1637Error> {
        if digit_count == 0 {
            return Err(Tm1637Error::InvalidPosition);
        }
        self.write_display(ADDRESS_00H, &render::number(value, digit_count))
    }

    /// Blank the first `digit_count` positions
    pub fn clear(&self, digit_count: u8) -> Result<(), Tm1637Error> {
        let data = Self::blank_frame(digit_count)?;
        self.submit(&[DataCommand::AUTO_INCREMENT.to_frame(), data])
    }

    /// Bus handle this driver writes to
    pub fn sender(&self) -> Sender<'a, T, N> {
        self.bus
    }

    fn blank_frame(digit_count: u8) -> Result<Frame, Tm1637Error> {
        if digit_count == 0 {
            return Err(Tm1637Error::InvalidPosition);
        }
        let blanks = [BLANK; DISPLAY_REGISTERS as usize];
        let segments = blanks
            .get(..digit_count as usize)
            .ok_or(Tm1637Error::FrameTooLong)?;
        Ok(Frame::with_data(ADDRESS_00H, segments)?)
    }

    fn control(&self, control: DisplayControl) -> Result<(), Tm1637Error> {
        self.submit(&[DataCommand::AUTO_INCREMENT.to_frame(), control.to_frame()])
    }

    fn submit(&self, frames: &[Frame]) -> Result<(), Tm1637Error> {
        self.bus.send_all(frames).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("TM1637: queue full, {} frame(s) dropped", frames.len());
            Tm1637Error::from(e)
        })
    }
}

//! TM1637 command bytes
//!
//! The controller accepts three command families, distinguished by the two
//! top bits of the first byte in a frame:
//! - `01xx_xxxx` data command (write/read, address mode, test mode)
//! - `10xx_xxxx` display control (on/off, brightness)
//! - `11xx_xxxx` address command (display register 0-5)
//!
//! The values are fixed by the device.

use crate::frame::Frame;

// Data command: base pattern plus option bits
pub const DATA_COMMAND: u8 = 0x40;
pub const WRITE_DATA: u8 = 0x40;
pub const READ_KEYS: u8 = 0x42;
pub const AUTO_INCREMENT: u8 = 0x40;
pub const FIXED_ADDRESS: u8 = 0x44;
pub const NORMAL_MODE: u8 = 0x40;
pub const TEST_MODE: u8 = 0x48;

// Address command: base address ORed with a register position
pub const ADDRESS_BASE: u8 = 0xC0;
pub const ADDRESS_00H: u8 = 0xC0;
pub const ADDRESS_01H: u8 = 0xC1;
pub const ADDRESS_02H: u8 = 0xC2;
pub const ADDRESS_03H: u8 = 0xC3;
pub const ADDRESS_04H: u8 = 0xC4;
pub const ADDRESS_05H: u8 = 0xC5;

/// Number of display registers
pub const DISPLAY_REGISTERS: u8 = 6;

// Display control: on/off flag ORed with a 3-bit brightness
pub const DISPLAY_OFF: u8 = 0x80;
pub const DISPLAY_ON: u8 = 0x88;
pub const BRIGHTNESS_MASK: u8 = 0x07;

/// Data command settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataCommand {
    /// Read key scan data instead of writing display data
    pub read_keys: bool,
    /// Keep the address fixed instead of auto-incrementing after each byte
    pub fixed_address: bool,
    /// Factory test mode
    pub test_mode: bool,
}

impl DataCommand {
    /// Write with auto-increment addressing (used before multi-byte writes)
    pub const AUTO_INCREMENT: Self = Self {
        read_keys: false,
        fixed_address: false,
        test_mode: false,
    };

    /// Write to a single fixed address
    pub const FIXED_ADDRESS: Self = Self {
        read_keys: false,
        fixed_address: true,
        test_mode: false,
    };

    /// Encode as a command byte
    pub const fn to_byte(self) -> u8 {
        let mut byte = DATA_COMMAND;
        if self.read_keys {
            byte |= READ_KEYS;
        }
        if self.fixed_address {
            byte |= FIXED_ADDRESS;
        }
        if self.test_mode {
            byte |= TEST_MODE;
        }
        byte
    }

    /// Encode as a single-byte frame
    pub const fn to_frame(self) -> Frame {
        Frame::byte(self.to_byte())
    }
}

/// Address command for a display register position
///
/// Returns `None` for positions past the last register.
pub const fn address(position: u8) -> Option<u8> {
    if position < DISPLAY_REGISTERS {
        Some(ADDRESS_BASE | position)
    } else {
        None
    }
}

/// Display brightness (pulse width 1/16 .. 14/16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(7);

    /// Brightness level, or `None` if above 7
    pub const fn new(level: u8) -> Option<Self> {
        if level <= BRIGHTNESS_MASK {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Brightness level clamped to the 0-7 range
    pub const fn saturating(level: u8) -> Self {
        if level > BRIGHTNESS_MASK {
            Self::MAX
        } else {
            Self(level)
        }
    }

    /// Raw 3-bit level
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(5)
    }
}

/// Display control command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayControl {
    /// Display enabled
    pub on: bool,
    /// Brightness applied while on
    pub brightness: Brightness,
}

impl DisplayControl {
    /// Display on at the given brightness
    pub const fn on(brightness: Brightness) -> Self {
        Self {
            on: true,
            brightness,
        }
    }

    /// Display off, keeping the brightness bits
    pub const fn off(brightness: Brightness) -> Self {
        Self {
            on: false,
            brightness,
        }
    }

    /// Encode as a command byte
    pub const fn to_byte(self) -> u8 {
        let base = if self.on { DISPLAY_ON } else { DISPLAY_OFF };
        base | self.brightness.level()
    }

    /// Encode as a single-byte frame
    pub const fn to_frame(self) -> Frame {
        Frame::byte(self.to_byte())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_command_bytes() {
        assert_eq!(DataCommand::AUTO_INCREMENT.to_byte(), 0x40);
        assert_eq!(DataCommand::FIXED_ADDRESS.to_byte(), 0x44);

        let read = DataCommand {
            read_keys: true,
            ..Default::default()
        };
        assert_eq!(read.to_byte(), READ_KEYS);

        let test = DataCommand {
            test_mode: true,
            ..Default::default()
        };
        assert_eq!(test.to_byte(), TEST_MODE);
    }

    #[test]
    fn test_address_positions() {
        assert_eq!(address(0), Some(ADDRESS_00H));
        assert_eq!(address(3), Some(ADDRESS_03H));
        assert_eq!(address(5), Some(ADDRESS_05H));
        assert_eq!(address(6), None);
    }

    #[test]
    fn test_brightness_range() {
        assert_eq!(Brightness::new(7), Some(Brightness::MAX));
        assert_eq!(Brightness::new(8), None);
        assert_eq!(Brightness::saturating(200), Brightness::MAX);
        assert_eq!(Brightness::default().level(), 5);
    }

    #[test]
    fn test_display_control_bytes() {
        let five = Brightness::saturating(5);
        assert_eq!(DisplayControl::on(five).to_byte(), 0x8D);
        assert_eq!(DisplayControl::off(five).to_byte(), 0x85);
        assert_eq!(DisplayControl::on(Brightness::MIN).to_byte(), DISPLAY_ON);
        assert_eq!(DisplayControl::on(five).to_frame().as_bytes(), &[0x8D]);
    }
}

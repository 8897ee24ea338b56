//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout version of [`DisplayConfig`]
pub const CONFIG_VERSION: u8 = 1;

/// Upper bound of a serialized [`DisplayConfig`]
pub const MAX_CONFIG_SIZE: usize = 16;

/// Longest supported tick period (µs)
pub const MAX_TICK_INTERVAL_US: u32 = 100;

/// Positions addressable by the controller
pub const MAX_DIGITS: u8 = 6;

/// Highest brightness level
pub const MAX_BRIGHTNESS: u8 = 7;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Stored layout version does not match [`CONFIG_VERSION`]
    VersionMismatch(u8),
    /// Tick interval outside 1..=100 µs
    TickInterval,
    /// Digit count outside 1..=6
    DigitCount,
    /// Brightness above 7
    Brightness,
    /// Serialization failed (buffer too small)
    Serialize,
    /// Deserialization failed
    Deserialize,
}

/// Display and bus timing settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Layout version
    pub version: u8,
    /// Tick timer period in microseconds (nominal 5-10)
    pub tick_interval_us: u32,
    /// Digits fitted on the module
    pub digit_count: u8,
    /// Brightness level applied at start-up (0-7)
    pub brightness: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            tick_interval_us: 10,
            digit_count: 4,
            brightness: 5,
        }
    }
}

impl DisplayConfig {
    /// Check every field against its valid range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != CONFIG_VERSION {
            return Err(ConfigError::VersionMismatch(self.version));
        }
        if !(1..=MAX_TICK_INTERVAL_US).contains(&self.tick_interval_us) {
            return Err(ConfigError::TickInterval);
        }
        if !(1..=MAX_DIGITS).contains(&self.digit_count) {
            return Err(ConfigError::DigitCount);
        }
        if self.brightness > MAX_BRIGHTNESS {
            return Err(ConfigError::Brightness);
        }
        Ok(())
    }

    /// Tick rate in Hz
    pub fn tick_hz(&self) -> u32 {
        1_000_000 / self.tick_interval_us.max(1)
    }

    /// Serialize into `buffer`, returning the used prefix
    #[cfg(feature = "serde")]
    pub fn to_bytes<'a>(&self, buffer: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        self.validate()?;
        postcard::to_slice(self, buffer).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize and validate a stored configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: DisplayConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }
}

//! Display configuration
//!
//! The shipped configuration is kept as a postcard image so it can be
//! patched in the binary without rebuilding. Falls back to defaults when the
//! image is missing or invalid.

use defmt::*;

use segtick_core::config::DisplayConfig;

/// Postcard image: version 1, 10 us ticks, 4 digits, brightness 5
static STORED_CONFIG: [u8; 4] = [1, 10, 4, 5];

/// Load the display configuration
pub fn load() -> DisplayConfig {
    match DisplayConfig::from_bytes(&STORED_CONFIG) {
        Ok(config) => {
            info!(
                "Config: {} digits, brightness {}, {} Hz tick",
                config.digit_count,
                config.brightness,
                config.tick_hz()
            );
            config
        }
        Err(e) => {
            warn!("Stored config rejected: {:?}, using defaults", e);
            DisplayConfig::default()
        }
    }
}

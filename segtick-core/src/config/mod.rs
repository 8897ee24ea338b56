//! Display configuration
//!
//! Board-agnostic settings, persisted as postcard binary data when the
//! `serde` feature is enabled.

pub mod types;

pub use types::*;

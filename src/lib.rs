//! Environment-driven settings for the zerosmoke backend.
//!
//! Build a [`Settings`] once at process entry with [`load_settings`] (or a
//! configured [`SettingsLoader`]) and hand it to whatever needs it.

pub mod config;

pub use config::{ConfigError, PostgresDsn, Settings, SettingsLoader, load_settings};

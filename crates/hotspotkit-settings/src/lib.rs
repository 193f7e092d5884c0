//! HotspotKit Settings Crate
//!
//! Handles editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings, LoggingSettings};
pub use error::{ConfigError, Result, SettingsError};

//! Tribox Settings Crate
//!
//! Handles configuration files for the box generator.

pub mod config;
pub mod error;

pub use config::{Config, MaterialSettings, OutputSettings};
pub use error::{SettingsError, SettingsResult};

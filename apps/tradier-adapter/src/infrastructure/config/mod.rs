//! Configuration Module
//!
//! Process settings for the adapter binary, loaded from environment variables.

mod settings;

pub use settings::{AdapterSettings, ConfigError};

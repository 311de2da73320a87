//! FormCase Common Library
//!
//! Shared types, errors and configuration for the FormCase client.

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{ClientConfig, EndpointConfig, OutputConfig};
pub use error::{Error, Result};
pub use types::*;

/// FormCase version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default store path
pub fn default_store_path() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".formcase")
}

/// Default configuration file path
pub fn default_config_path() -> std::path::PathBuf {
    default_store_path().join("config.toml")
}

/// Home directory helper
mod dirs {
    pub fn home_dir() -> Option<std::path::PathBuf> {
        std::env::var_os("HOME").map(std::path::PathBuf::from)
    }
}

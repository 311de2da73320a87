//! Error types for FormCase

use thiserror::Error;

/// Result type alias using FormCase Error
pub type Result<T> = std::result::Result<T, Error>;

/// FormCase error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Generation endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Save error: {0}")]
    Save(String),
}

impl Error {
    /// Short message suitable for the output region's error state
    pub fn display_message(&self) -> String {
        match self {
            Error::Status { message, .. } if !message.is_empty() => message.clone(),
            Error::Http(e) if e.is_timeout() => "Generation request timed out".to_string(),
            Error::Http(e) if e.is_connect() => {
                "Could not reach the generation endpoint".to_string()
            }
            _ => self.to_string(),
        }
    }
}

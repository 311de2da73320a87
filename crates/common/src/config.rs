//! Client configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::{Error, Result};

/// Environment variable overriding the endpoint base URL
pub const ENV_ENDPOINT: &str = "FORMCASE_ENDPOINT";

/// Environment variable overriding the download directory
pub const ENV_DOWNLOAD_DIR: &str = "FORMCASE_DOWNLOAD_DIR";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Generation endpoint configuration
    pub endpoint: EndpointConfig,

    /// Output configuration
    pub output: OutputConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Where and how to reach the generation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Base URL of the generation service
    pub base_url: String,

    /// Path of the generation route
    pub generate_path: String,

    /// Request timeout in seconds. Unset means wait indefinitely.
    pub request_timeout_secs: Option<u64>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            generate_path: "/generate".to_string(),
            request_timeout_secs: None,
        }
    }
}

/// Rendering and download configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the download action writes into (current dir if unset)
    pub download_dir: Option<PathBuf>,

    /// Colorize highlighted JSON
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            download_dir: None,
            color: true,
        }
    }
}

impl ClientConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = toml::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `FORMCASE_*` environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            self.endpoint.base_url = url.trim().to_string();
        }
        if let Some(dir) = lookup(ENV_DOWNLOAD_DIR).filter(|v| !v.trim().is_empty()) {
            self.output.download_dir = Some(PathBuf::from(dir.trim()));
        }
        self
    }

    /// Full URL of the generation route
    pub fn generate_url(&self) -> Result<Url> {
        let base = Url::parse(&self.endpoint.base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!(
                "endpoint base URL cannot be a base: {}",
                self.endpoint.base_url
            )));
        }
        Ok(base.join(&self.endpoint.generate_path)?)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.endpoint.request_timeout_secs.map(Duration::from_secs)
    }

    /// Directory the download action writes into
    pub fn download_dir(&self) -> PathBuf {
        self.output
            .download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

//! Server configuration file and environment variable support.
//!
//! Settings are read from an optional `server.toml` and then overridden by
//! environment variables:
//!
//! - `SERVER_CONFIG`: explicit path to the TOML file
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: bind port (default: 8080)
//! - `PUBLIC_BASE_URL`: absolute URL advertised in the tool manifest

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Complete server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ListenSettings,
    #[serde(default)]
    pub manifest: ManifestSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Tool manifest settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestSettings {
    /// Absolute base URL joined with route paths in the manifest.
    #[serde(default)]
    pub public_base_url: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ListenSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Locate `server.toml` in the standard locations.
    ///
    /// Searches the current directory, `backend/` and the parent directory.
    pub fn default_location() -> Option<PathBuf> {
        [
            PathBuf::from("server.toml"),
            PathBuf::from("backend/server.toml"),
            PathBuf::from("../server.toml"),
        ]
        .into_iter()
        .find(|p| p.exists())
    }

    /// Load the file (if any) and apply environment overrides.
    pub fn load() -> ConfigResult<Self> {
        let file = env::var("SERVER_CONFIG")
            .ok()
            .map(PathBuf::from)
            .or_else(Self::default_location);

        let mut config = match file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading server config");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Override settings from `HOST`, `PORT` and `PUBLIC_BASE_URL`.
    pub fn apply_env(&mut self) -> ConfigResult<()> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                ConfigError::invalid("PORT", format!("'{}' is not a valid port number", port))
            })?;
        }
        if let Ok(url) = env::var("PUBLIC_BASE_URL") {
            self.manifest.public_base_url = if url.is_empty() { None } else { Some(url) };
        }
        Ok(())
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> ConfigResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| ConfigError::invalid("server.host", format!("{}", e)))
    }

    /// Base URL for the manifest, if configured.
    pub fn public_base_url(&self) -> Option<&str> {
        self.manifest.public_base_url.as_deref()
    }
}

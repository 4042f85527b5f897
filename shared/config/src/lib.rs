//! Connection settings for a Kafka Connect worker.
//!
//! Settings come from code (`ClientConfig::new` plus the `with_*` builders), from a
//! full URL, or from the environment (`KAFKA_CONNECT_*` variables, optionally loaded
//! from a `.env` file).

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const DEFAULT_SCHEME: &str = "http";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8083;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const ENV_URL: &str = "KAFKA_CONNECT_URL";
pub const ENV_SCHEME: &str = "KAFKA_CONNECT_SCHEME";
pub const ENV_HOST: &str = "KAFKA_CONNECT_HOST";
pub const ENV_PORT: &str = "KAFKA_CONNECT_PORT";
pub const ENV_AUTOCOMMIT: &str = "KAFKA_CONNECT_AUTOCOMMIT";
pub const ENV_TIMEOUT_SECS: &str = "KAFKA_CONNECT_TIMEOUT_SECS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, String),

    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid port for {0}: {1}")]
    InvalidPort(String, String),

    #[error("Invalid boolean for {0}: {1}")]
    InvalidBool(String, String),

    #[error("Invalid timeout for {0}: {1}")]
    InvalidTimeout(String, String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where and how to reach a Kafka Connect worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    /// Push connector config edits to the worker as soon as they are made
    pub autocommit: bool,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            autocommit: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn with_autocommit(mut self, autocommit: bool) -> Self {
        self.autocommit = autocommit;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `{scheme}://{host}:{port}`, without a trailing slash.
    ///
    /// IPv6 literals are bracketed, so `::1` becomes `[::1]`.
    pub fn base_url(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("{}://[{}]:{}", self.scheme, self.host, self.port)
        } else {
            format!("{}://{}:{}", self.scheme, self.host, self.port)
        }
    }

    /// Check that the settings form a usable worker URL
    pub fn validate(&self) -> ConfigResult<()> {
        if self.scheme != "http" && self.scheme != "https" {
            return Err(ConfigError::UnsupportedScheme(self.scheme.clone()));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(
                "timeout_secs".to_string(),
                self.timeout_secs.to_string(),
            ));
        }

        let base = self.base_url();
        let url = Url::parse(&base).map_err(|e| ConfigError::InvalidUrl(base.clone(), e.to_string()))?;
        if url.host_str().map(str::is_empty).unwrap_or(true) {
            return Err(ConfigError::InvalidUrl(base, "missing host".to_string()));
        }

        Ok(())
    }

    /// Parse a worker URL such as `https://connect.internal:8083`.
    ///
    /// A URL without an explicit port uses the scheme's default port. Any path
    /// other than `/` is rejected since endpoints are always rooted at the worker.
    pub fn from_url(raw: &str) -> ConfigResult<Self> {
        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(raw.to_string(), e.to_string()))?;

        let scheme = url.scheme().to_string();
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::UnsupportedScheme(scheme));
        }

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ConfigError::InvalidUrl(raw.to_string(), "missing host".to_string()))?
            .to_string();

        if !url.path().is_empty() && url.path() != "/" {
            return Err(ConfigError::InvalidUrl(
                raw.to_string(),
                format!("unexpected path '{}'", url.path()),
            ));
        }

        let port = url
            .port_or_known_default()
            .ok_or_else(|| ConfigError::InvalidPort(raw.to_string(), "missing port".to_string()))?;

        Ok(Self {
            scheme,
            host,
            port,
            ..Default::default()
        })
    }

    /// Build settings from `KAFKA_CONNECT_*` environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    /// `KAFKA_CONNECT_URL` wins over the individual scheme/host/port variables.
    pub fn from_env() -> ConfigResult<Self> {
        dotenv::dotenv().ok();

        let mut config = match env_var(ENV_URL) {
            Some(raw) => Self::from_url(&raw)?,
            None => {
                let mut config = Self::default();
                if let Some(scheme) = env_var(ENV_SCHEME) {
                    config.scheme = scheme.to_lowercase();
                }
                if let Some(host) = env_var(ENV_HOST) {
                    config.host = host;
                }
                if let Some(port) = env_var(ENV_PORT) {
                    config.port = port
                        .trim()
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidPort(ENV_PORT.to_string(), port.clone()))?;
                }
                config
            }
        };

        if let Some(raw) = env_var(ENV_AUTOCOMMIT) {
            config.autocommit = parse_bool(&raw)
                .ok_or_else(|| ConfigError::InvalidBool(ENV_AUTOCOMMIT.to_string(), raw.clone()))?;
        }

        if let Some(raw) = env_var(ENV_TIMEOUT_SECS) {
            config.timeout_secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(ENV_TIMEOUT_SECS.to_string(), raw.clone()))?;
        }

        config.validate()?;

        debug!(
            url = %config.base_url(),
            autocommit = config.autocommit,
            timeout_secs = config.timeout_secs,
            "Loaded Kafka Connect client config from environment"
        );

        Ok(config)
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

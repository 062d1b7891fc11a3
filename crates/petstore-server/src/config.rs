//! Server configuration read from `PETSTORE_*` environment variables.
//!
//! [`ServerConfig::from_lookup`] takes any variable source so tests never
//! mutate the process environment.

use thiserror::Error;

use crate::service::LookupMode;

pub const HOST_VAR: &str = "PETSTORE_HOST";
pub const PORT_VAR: &str = "PETSTORE_PORT";
pub const LOOKUP_VAR: &str = "PETSTORE_LOOKUP";
pub const SEED_VAR: &str = "PETSTORE_SEED";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Errors from reading configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be 'placeholder' or 'strict', got '{value}'")]
    InvalidLookupMode { var: &'static str, value: String },

    #[error("{var} must be a boolean (true/false/1/0/yes/no), got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Behavior of `GET /pet/{petId}` for ids with no stored record.
    pub lookup: LookupMode,
    /// Populate the store with the sample pets at startup.
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            lookup: LookupMode::default(),
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads configuration through `lookup`, falling back to defaults for
    /// unset variables. Values are trimmed; blank counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = ServerConfig::default();

        if let Some(host) = get(HOST_VAR) {
            config.host = host;
        }
        if let Some(port) = get(PORT_VAR) {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: port.clone(),
            })?;
        }
        if let Some(mode) = get(LOOKUP_VAR) {
            config.lookup = mode.parse().map_err(|_| ConfigError::InvalidLookupMode {
                var: LOOKUP_VAR,
                value: mode.clone(),
            })?;
        }
        if let Some(flag) = get(SEED_VAR) {
            config.seed = parse_flag(&flag).ok_or_else(|| ConfigError::InvalidFlag {
                var: SEED_VAR,
                value: flag.clone(),
            })?;
        }

        Ok(config)
    }

    /// `host:port` string for binding the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

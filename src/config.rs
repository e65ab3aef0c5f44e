//! Server configuration.

use crate::observability::LogFormat;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HTTP_PORT: u16 = 3000;

const PORT_VAR: &str = "ROUTE_CATALOG_PORT";
const DOCUMENT_PATH_VAR: &str = "ROUTE_CATALOG_OPENAPI_PATH";
const LOG_FORMAT_VAR: &str = "ROUTE_CATALOG_LOG_FORMAT";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got {value:?}")]
    InvalidPort { var: &'static str, value: String },

    #[error("{var} must be `json` or `pretty`, got {value:?}")]
    InvalidLogFormat { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub http_port: u16,
    /// OpenAPI document served by `GET /`, read on every request
    pub document_path: PathBuf,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            document_path: default_document_path(),
            log_format: LogFormat::default(),
        }
    }
}

/// `<cwd>/public/openapi.yaml`
pub fn default_document_path() -> PathBuf {
    let relative = PathBuf::from("public").join("openapi.yaml");
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(relative),
        Err(_) => relative,
    }
}

impl Config {
    /// Defaults overlaid with `ROUTE_CATALOG_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(PORT_VAR) {
            config.http_port = value.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(DOCUMENT_PATH_VAR) {
            config.document_path = PathBuf::from(value);
        }

        if let Some(value) = lookup(LOG_FORMAT_VAR) {
            config.log_format = match value.trim().to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => {
                    return Err(ConfigError::InvalidLogFormat {
                        var: LOG_FORMAT_VAR,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

//! Server configuration read from `ANONYMIZER_*` environment variables.
//!
//! | Variable                  | Default                  |
//! |---------------------------|--------------------------|
//! | `ANONYMIZER_HOST`         | `127.0.0.1`              |
//! | `ANONYMIZER_PORT`         | `8080`                   |
//! | `ANONYMIZER_STATIC_DIR`   | `static`                 |
//! | `ANONYMIZER_SERVICE_URL`  | see [`ServerConfig::service_url`] |
//! | `ANONYMIZER_STUB_SERVICE` | `false`                  |
//! | `ANONYMIZER_OPEN_BROWSER` | `false`                  |

use std::path::PathBuf;

use common::model::config::{ClientConfig, DEFAULT_SERVICE_BASE_URL};
use thiserror::Error;

const HOST: &str = "ANONYMIZER_HOST";
const PORT: &str = "ANONYMIZER_PORT";
const STATIC_DIR: &str = "ANONYMIZER_STATIC_DIR";
const SERVICE_URL: &str = "ANONYMIZER_SERVICE_URL";
const STUB_SERVICE: &str = "ANONYMIZER_STUB_SERVICE";
const OPEN_BROWSER: &str = "ANONYMIZER_OPEN_BROWSER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a port number, got '{value}'")]
    InvalidPort { var: &'static str, value: String },
    #[error("{var} must be true or false, got '{value}'")]
    InvalidFlag { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Base address handed to the frontend. Defaults to the server's own
    /// address when the stub service is enabled, otherwise to the standalone
    /// service's usual address.
    pub service_url: String,
    pub stub_service: bool,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source; unset and blank
    /// variables take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let host = value(HOST)
            .map(|host| host.trim().to_string())
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = match value(PORT) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort {
                var: PORT,
                value: raw,
            })?,
            None => 8080,
        };
        let static_dir = PathBuf::from(value(STATIC_DIR).unwrap_or_else(|| "static".to_string()));
        let stub_service = flag(STUB_SERVICE, value(STUB_SERVICE))?;
        let open_browser = flag(OPEN_BROWSER, value(OPEN_BROWSER))?;

        let service_url = match value(SERVICE_URL) {
            Some(url) => url.trim().to_string(),
            None if stub_service => format!("http://{}:{}", host, port),
            None => DEFAULT_SERVICE_BASE_URL.to_string(),
        };

        Ok(Self {
            host,
            port,
            static_dir,
            service_url,
            stub_service,
            open_browser,
        })
    }

    pub fn address(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            service_base_url: self.service_url.clone(),
        }
    }
}

fn flag(var: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(raw) = raw else {
        return Ok(false);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var, value: raw }),
    }
}

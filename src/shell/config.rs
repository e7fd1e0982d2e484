// Layered configuration: defaults, then `employee_time.toml` in the working
// directory, then `EMPLOYEE_TIME_*` environment variables (`__` separates
// sections, so `EMPLOYEE_TIME_SERVER__PORT` sets `server.port`).

use crate::modules::time_logs::core::employee::Employee;
use crate::modules::time_logs::core::project::Project;
use axum::http::HeaderName;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = "employee_time.toml";
pub const ENV_PREFIX: &str = "EMPLOYEE_TIME_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Figment(Box::new(error))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Request header carrying the authenticated user id, set by the gateway.
    pub user_header: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_header: "x-user-id".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TableConfig {
    pub default_page_length: usize,
    pub max_page_length: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_length: 10,
            max_page_length: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

/// Directory data loaded into the in-memory repositories at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if Path::new(CONFIG_FILE).exists() {
            figment = figment.merge(Toml::file(CONFIG_FILE));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        HeaderName::try_from(self.auth.user_header.as_str()).map_err(|error| {
            ConfigError::InvalidValue {
                field: "auth.user_header",
                reason: error.to_string(),
            }
        })?;
        if self.table.max_page_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "table.max_page_length",
                reason: "must be at least 1".into(),
            });
        }
        if self.table.default_page_length == 0 {
            return Err(ConfigError::InvalidValue {
                field: "table.default_page_length",
                reason: "must be at least 1".into(),
            });
        }
        self.socket_addr()?;
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|error: std::net::AddrParseError| ConfigError::InvalidValue {
                field: "server.host",
                reason: error.to_string(),
            })
    }
}

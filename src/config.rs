//! Startup configuration, read once from the process environment.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::utils::LogLevel;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 2222;
pub const DEFAULT_SERVICE_ID: &str = "compute-service";

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_addr: String,
    pub port: u16,
    pub service_id: String,
    /// Host announced in the registration.
    pub advertised_host: String,
    pub log_level: LogLevel,
    pub log_file: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            service_id: DEFAULT_SERVICE_ID.to_string(),
            advertised_host: DEFAULT_BIND_ADDR.to_string(),
            log_level: LogLevel::INFO,
            log_file: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let defaults = ServiceConfig::default();

        let bind_addr = get("COMPUTE_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let port = match get("COMPUTE_PORT") {
            Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: "COMPUTE_PORT",
                value,
            })?,
            None => defaults.port,
        };

        let log_level = match get("COMPUTE_LOG_LEVEL") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: "COMPUTE_LOG_LEVEL",
                value,
            })?,
            None => defaults.log_level,
        };

        Ok(ServiceConfig {
            advertised_host: get("COMPUTE_HOST").unwrap_or_else(|| bind_addr.clone()),
            bind_addr,
            port,
            service_id: get("COMPUTE_SERVICE_ID").unwrap_or(defaults.service_id),
            log_level,
            log_file: get("COMPUTE_LOG_FILE").map(PathBuf::from),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

//! Application configuration loaded from environment variables.
//!
//! Every variable carries the `RADIX_` prefix, e.g. `RADIX_PORT=9090`.
//! With nothing set the server binds `0.0.0.0:8080`.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Prefix shared by all configuration variables.
pub const ENV_PREFIX: &str = "RADIX_";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Expose Prometheus metrics on `/metrics`.
    #[serde(default)]
    pub metrics_enabled: bool,

    // === Logging ===
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as newline-delimited JSON.
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            metrics_enabled: false,
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::prefixed(ENV_PREFIX).from_env()?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(ServiceError::InvalidConfig(format!(
                "RADIX_HOST must be an IP address, got {:?}",
                self.host
            )));
        }

        if self.port == 0 {
            return Err(ServiceError::InvalidConfig(
                "RADIX_PORT must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ServiceError::InvalidConfig(format!("invalid host address {:?}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert!(!config.metrics_enabled);
        assert!(!config.log_json);
    }

    #[test]
    fn default_binds_all_interfaces_on_8080() {
        let addr = Config::default().socket_addr().unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn deserializes_prefixed_variables() {
        let vars = vec![
            ("RADIX_PORT".to_string(), "9090".to_string()),
            ("RADIX_METRICS_ENABLED".to_string(), "true".to_string()),
        ];
        let config: Config = envy::prefixed(ENV_PREFIX).from_iter(vars).unwrap();
        assert_eq!(config.port, 9090);
        assert!(config.metrics_enabled);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn malformed_variable_is_a_config_error() {
        let vars = vec![("RADIX_PORT".to_string(), "eighty".to_string())];
        let err: ServiceError = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Config>(vars)
            .unwrap_err()
            .into();
        assert!(matches!(err, ServiceError::Config(_)), "{err}");
    }

    #[test]
    fn validate_rejects_bad_host() {
        let config = Config {
            host: "not-an-ip".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}

//! Server configuration.
//!
//! Read from environment variables, falling back to defaults suitable for
//! local development.

use std::env;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid ROSTER_HOST {0:?}")]
    InvalidHost(String),
    #[error("Invalid ROSTER_PORT {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address to bind to
    pub host: IpAddr,
    /// Port to bind to
    pub port: u16,
    /// Origins allowed by CORS in release builds
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from `ROSTER_HOST`, `ROSTER_PORT` and `ROSTER_ALLOWED_ORIGINS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("ROSTER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost(host.clone()))?;

        let port: u16 = match lookup("ROSTER_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = lookup("ROSTER_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            host,
            port,
            allowed_origins,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ROSTER_HOST", "0.0.0.0"),
            ("ROSTER_PORT", "9090"),
            (
                "ROSTER_ALLOWED_ORIGINS",
                "https://roster.example.com, ,https://admin.example.com",
            ),
        ]))
        .unwrap();

        assert_eq!(config.addr().to_string(), "0.0.0.0:9090");
        assert_eq!(
            config.allowed_origins,
            vec!["https://roster.example.com", "https://admin.example.com"]
        );
    }

    #[test]
    fn invalid_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[("ROSTER_PORT", "eighty")])),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("ROSTER_HOST", "localhost:1")])),
            Err(ConfigError::InvalidHost("localhost:1".to_string()))
        );
    }
}

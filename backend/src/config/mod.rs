//! Application configuration management

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

use crate::cli::CliOptions;

const DEFAULT_ADDRESS: &str = "0.0.0.0:8081";
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Listen address; `:8081` means every interface
    pub address: String,

    /// SQLite URL. The default is a private in-memory database
    pub database_url: String,

    pub database_max_connections: u32,

    /// Verbose logging and per-resolver tracing
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let address = get("ADDRESS").unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS {:?}", raw))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            address: normalize_address(&address),
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections,
            debug: get("DEBUG")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }

    /// Command-line flags win over the environment
    pub fn apply_cli(&mut self, cli: &CliOptions) {
        if let Some(address) = &cli.address {
            self.address = normalize_address(address);
        }
        if cli.debug {
            self.debug = true;
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.address
            .parse()
            .with_context(|| format!("Invalid listen address {:?}", self.address))
    }
}

/// `:8081` listens on every interface, as Go-style addresses do
fn normalize_address(address: &str) -> String {
    match address.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{}", port),
        None => address.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use pretty_assertions::assert_eq;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(
            config,
            Config {
                address: "0.0.0.0:8081".to_string(),
                database_url: "sqlite::memory:".to_string(),
                database_max_connections: 10,
                debug: false,
            }
        );
        assert_eq!(config.socket_addr().unwrap().port(), 8081);
    }

    #[test]
    fn test_env_values() {
        let config = load(&[
            ("ADDRESS", ":9000"),
            ("DATABASE_URL", "sqlite://fltbase.db"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("DEBUG", "1"),
        ])
        .unwrap();
        assert_eq!(config.address, "0.0.0.0:9000");
        assert_eq!(config.database_url, "sqlite://fltbase.db");
        assert_eq!(config.database_max_connections, 4);
        assert!(config.debug);
    }

    #[test]
    fn test_invalid_max_connections() {
        assert!(load(&[("DATABASE_MAX_CONNECTIONS", "many")]).is_err());
    }

    #[test]
    fn test_cli_overrides_env() {
        let mut config = load(&[("ADDRESS", "127.0.0.1:1")]).unwrap();
        config.apply_cli(&CliOptions {
            address: Some(":8082".to_string()),
            debug: true,
        });
        assert_eq!(config.address, "0.0.0.0:8082");
        assert!(config.debug);
    }
}

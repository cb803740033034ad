use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::{debug, info};

pub mod defaults;
pub mod duration_serde;

use defaults::*;
use duration_serde::duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URI for the contact store (sqlite:, postgres:, mysql:)
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// How long to wait for the initial connection
    #[serde(default = "default_connect_timeout", with = "duration")]
    pub connect_timeout: Duration,
    /// Upper bound on a single contact store call made while handling a request
    #[serde(default = "default_store_timeout", with = "duration")]
    pub store_timeout: Duration,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

// Database defaults
fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_string()
}

fn default_max_connections() -> u32 {
    DEFAULT_MAX_CONNECTIONS
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECONDS)
}

fn default_store_timeout() -> Duration {
    Duration::from_secs(DEFAULT_STORE_TIMEOUT_SECONDS)
}

// Web defaults
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connect_timeout: default_connect_timeout(),
            store_timeout: default_store_timeout(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, then `config_file` if it exists, then
    /// `KEEPINTOUCH_*` environment variables (`__` separates nested keys, e.g.
    /// `KEEPINTOUCH_DATABASE__URL`).
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        if std::path::Path::new(config_file).exists() {
            info!("Reading config file: {}", config_file);
        } else {
            debug!("Config file {} not found, using defaults and environment", config_file);
        }

        let config = Self::figment(config_file).extract()?;
        Ok(config)
    }

    /// Layered configuration sources, lowest precedence first
    pub fn figment(config_file: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Address the web server binds to
    ///
    /// `web.host` must be an IPv4 or IPv6 literal; hostnames are not resolved.
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .web
            .host
            .parse()
            .with_context(|| format!("Invalid listen address {}", self.web.host))?;
        Ok(SocketAddr::new(ip, self.web.port))
    }
}

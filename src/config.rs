//! Runtime configuration.
//!
//! All settings come from environment variables read once at startup.
//! Every variable is optional:
//!
//! - `CATALOG_ADDR` - socket address to bind (default `127.0.0.1:3000`)
//! - `CATALOG_PUBLIC_URL` - page URL used to build canonical product links
//!   (default `http://{CATALOG_ADDR}/`)
//! - `CATALOG_ASSETS_DIR` - directory served under `/assets`
//! - `CATALOG_CURRENCY` - symbol printed before prices
//! - `CATALOG_INSTAGRAM_URL` - social profile linked from every card

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_CURRENCY: &str = "₹";
pub const DEFAULT_INSTAGRAM_URL: &str = "https://www.instagram.com/";

/// Configuration loading failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Bind address is not a valid socket address
    InvalidAddr(String),
    /// A URL setting could not be parsed
    InvalidUrl { var: &'static str, reason: String },
    /// A URL setting is neither http nor https
    UnsupportedScheme { var: &'static str, scheme: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidAddr(addr) => write!(f, "Invalid bind address: {}", addr),
            ConfigError::InvalidUrl { var, reason } => write!(f, "Invalid URL in {}: {}", var, reason),
            ConfigError::UnsupportedScheme { var, scheme } => {
                write!(f, "{} must be an http or https URL, got {}", var, scheme)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    /// Origin plus path of the catalog page; query and fragment are stripped.
    pub public_url: Url,
    pub assets_dir: PathBuf,
    pub currency: String,
    pub instagram_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let addr_str = get("CATALOG_ADDR", DEFAULT_ADDR);
        let addr = addr_str
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr(addr_str.clone()))?;

        let served_url = format!("http://{}/", addr);
        let mut public_url = parse_web_url("CATALOG_PUBLIC_URL", &get("CATALOG_PUBLIC_URL", &served_url))?;
        public_url.set_query(None);
        public_url.set_fragment(None);

        let instagram_url = parse_web_url(
            "CATALOG_INSTAGRAM_URL",
            &get("CATALOG_INSTAGRAM_URL", DEFAULT_INSTAGRAM_URL),
        )?;

        Ok(Self {
            addr,
            public_url,
            assets_dir: PathBuf::from(get("CATALOG_ASSETS_DIR", DEFAULT_ASSETS_DIR)),
            currency: get("CATALOG_CURRENCY", DEFAULT_CURRENCY),
            instagram_url,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None).expect("default configuration is valid")
    }
}

fn parse_web_url(var: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        var,
        reason: e.to_string(),
    })?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::UnsupportedScheme {
            var,
            scheme: url.scheme().to_string(),
        });
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            var,
            reason: "No host in URL".to_string(),
        });
    }

    Ok(url)
}

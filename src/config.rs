//! Server configuration parsed from environment variables.

use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid HOST {value:?}: {source}")]
    InvalidHost { value: String, source: AddrParseError },
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site-root` (where `/pkg` assets are read from).
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default `3000`
    /// - `SITE_ROOT`: default from `[package.metadata.leptos]`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match non_empty(lookup("HOST")) {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidHost { value, source })?,
            None => DEFAULT_HOST,
        };
        let port = match non_empty(lookup("PORT")) {
            Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let site_root = non_empty(lookup("SITE_ROOT")).map(PathBuf::from);
        Ok(Self { host, port, site_root })
    }

    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

//! Runtime configuration parsed from environment variables.
//!
//! Every knob has a default, so an empty environment yields a server on
//! `127.0.0.1:3000` with plain-HTTP cookies and one-hour sessions.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3600;
/// One year. Longer lifetimes are refused so expiry instants stay representable.
pub const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 3600;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {0:?}")]
    InvalidBindAddr(String),
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("invalid SESSION_TTL_SECS {0:?} (expected whole seconds, at most one year)")]
    InvalidSessionTtl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Send the session cookie with the `Secure` attribute.
    pub cookie_secure: bool,
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([127, 0, 0, 1]),
            port: DEFAULT_PORT,
            cookie_secure: false,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
        }
    }
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `127.0.0.1`
    /// - `PORT`: default 3000
    /// - `COOKIE_SECURE`: boolean, default false
    /// - `SESSION_TTL_SECS`: default 3600, at most one year
    ///
    /// # Errors
    ///
    /// Returns an error if `BIND_ADDR` is not an IP address, `PORT` is not a
    /// valid port number, or `SESSION_TTL_SECS` is not a whole number of
    /// seconds within range.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(raw_addr.clone()))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            bind_addr,
            port,
            cookie_secure: env_bool("COOKIE_SECURE").unwrap_or(false),
            session_ttl: parse_session_ttl(std::env::var("SESSION_TTL_SECS").ok().as_deref())?,
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

fn parse_session_ttl(raw: Option<&str>) -> Result<Duration, ConfigError> {
    let Some(raw) = raw else {
        return Ok(Duration::from_secs(DEFAULT_SESSION_TTL_SECS));
    };
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs <= MAX_SESSION_TTL_SECS)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidSessionTtl(raw.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

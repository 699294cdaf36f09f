//! Service configuration read from the environment.
//!
//! # Environment Variables
//!
//! - `PORT`: listening port (default: `3000`)
//! - `BIND_ADDR`: listening address (default: `0.0.0.0`)
//! - `PUBLIC_DIR`: directory served for the landing page (default: `public`)
//! - `SEED_DATA`: `false` starts with empty collections (default: `true`)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory for static files.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub public_dir: PathBuf,
    pub seed_data: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
            seed_data: true,
        }
    }
}

impl ServiceConfig {
    /// Create configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary key lookup.
    ///
    /// Unparsable values fall back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid BIND_ADDR, using default");
                defaults.bind_addr
            }),
            None => defaults.bind_addr,
        };

        let public_dir = lookup("PUBLIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.public_dir);

        let seed_data = lookup("SEED_DATA")
            .map(|v| v.trim().to_lowercase() != "false")
            .unwrap_or(defaults.seed_data);

        Self {
            bind_addr,
            port,
            public_dir,
            seed_data,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

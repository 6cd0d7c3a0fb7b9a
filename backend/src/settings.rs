//! Runtime settings loaded via OrthoConfig.
//!
//! Values merge command-line flags, `REQUEST_DESK_*` environment variables
//! and configuration files. Unset values fall back to the defaults below.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Conventional variable honoured when `database_url` is not configured.
pub const DATABASE_URL_FALLBACK_VAR: &str = "DATABASE_URL";

/// Server and persistence settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REQUEST_DESK")]
pub struct AppSettings {
    /// PostgreSQL connection URL. The in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Interface to listen on.
    pub bind_host: Option<String>,
    /// Port to listen on.
    #[ortho_config(default = 8080)]
    pub bind_port: u16,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
}

impl AppSettings {
    /// Configured database URL, falling back to `DATABASE_URL`.
    ///
    /// Blank values count as unset.
    #[must_use]
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(DATABASE_URL_FALLBACK_VAR).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Host to bind, falling back to all interfaces.
    #[must_use]
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Socket address built from host and port.
    ///
    /// # Errors
    /// Returns [`std::net::AddrParseError`] when the host is not an IP
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind_host(), self.bind_port).parse()
    }
}

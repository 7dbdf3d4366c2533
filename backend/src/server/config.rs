//! Server settings loaded via OrthoConfig.
//!
//! Values layer CLI flags over `HBNB_*` environment variables over an
//! optional configuration file.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HBNB")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Emit human-readable logs instead of JSON.
    #[ortho_config(default = false)]
    pub log_pretty: bool,
}

impl ServerSettings {
    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port, falling back to 8080.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

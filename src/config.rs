use std::net::SocketAddr;
use std::path::PathBuf;

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address; overrides the Leptos `site-addr` when set
    pub listen: Option<SocketAddr>,

    /// Unix socket path; takes precedence over any TCP address
    pub socket: Option<PathBuf>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint (if None, uses OTEL_EXPORTER_OTLP_ENDPOINT or the local collector)
    pub endpoint: Option<String>,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

pub const DEFAULT_OTLP_ENDPOINT: &str = "http://127.0.0.1:4318";

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            environment: default_environment(),
        }
    }
}

impl OtelConfig {
    pub fn endpoint_or_default(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_OTLP_ENDPOINT)
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - FOLIO_LISTEN
    /// - FOLIO_SOCKET
    /// - FOLIO_OTEL_ENDPOINT
    /// - FOLIO_OTEL_ENVIRONMENT
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().merge(Env::prefixed("FOLIO_").split("_")).extract()
    }

    /// Defaults only, before any environment is merged in.
    pub fn figment() -> Figment {
        Figment::new().merge(Serialized::defaults(ConfigDefaults::default()))
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Default, Serialize)]
struct ConfigDefaults {
    otel: OtelConfig,
}

//! Centralized configuration for Marquee.
//!
//! All tunable parameters live here so the rest of the codebase never
//! reaches into the environment directly. The catalog API key has no
//! default: startup fails when it is not configured.

use thiserror::Error;

/// Environment variable holding the catalog API key. Required.
pub const API_KEY_VAR: &str = "MARQUEE_OMDB_API_KEY";

/// Environment variable overriding the catalog endpoint. Optional.
pub const ENDPOINT_VAR: &str = "MARQUEE_OMDB_URL";

/// Environment variable overriding the web UI bind host. Optional.
pub const HOST_VAR: &str = "MARQUEE_HOST";

/// Environment variable overriding the web UI bind port. Optional.
pub const PORT_VAR: &str = "MARQUEE_PORT";

/// Errors raised while assembling configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The catalog API key is unset or blank. There is deliberately no
    /// built-in fallback key.
    #[error("catalog API key missing: set MARQUEE_OMDB_API_KEY")]
    MissingApiKey,

    /// An environment override carried a value that does not parse.
    #[error("invalid value for {var}: {reason}")]
    InvalidValue {
        /// The environment variable that failed to parse.
        var: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Central configuration for all Marquee components.
///
/// Groups related settings into logical sections, each with its own
/// defaults except for the required catalog credential.
#[derive(Debug, Clone)]
pub struct MarqueeConfig {
    /// Remote catalog service settings.
    pub catalog: CatalogConfig,
    /// Web UI server settings.
    pub server: ServerConfig,
}

/// Remote catalog service configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog service.
    pub endpoint: String,
    /// API key sent with every request. Required, no default.
    pub api_key: String,
    /// Results per page, fixed by the catalog service.
    pub page_size: u32,
    /// User agent for HTTP requests.
    pub user_agent: &'static str,
}

impl CatalogConfig {
    /// Builds catalog settings around the one value that has no
    /// default, the API key.
    pub fn new(api_key: String) -> Self {
        Self {
            endpoint: "https://www.omdbapi.com/".to_string(),
            api_key,
            page_size: 10,
            user_agent: "marquee/0.1.0",
        }
    }
}

/// Web UI server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind the web UI to.
    pub host: String,
    /// Port to bind the web UI to.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl MarqueeConfig {
    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingApiKey` - `MARQUEE_OMDB_API_KEY` unset or blank
    /// - `ConfigError::InvalidValue` - an override that does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Loads configuration through an injected variable lookup.
    ///
    /// Tests pass closures here instead of mutating process-global
    /// environment state.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MarqueeConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut catalog = CatalogConfig::new(api_key);
        if let Some(endpoint) = lookup(ENDPOINT_VAR) {
            catalog.endpoint = endpoint;
        }

        let mut server = ServerConfig::default();
        if let Some(host) = lookup(HOST_VAR) {
            server.host = host;
        }
        if let Some(port) = lookup(PORT_VAR) {
            server.port = port
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidValue {
                    var: PORT_VAR,
                    reason: format!("{e}"),
                })?;
        }

        Ok(Self { catalog, server })
    }
}

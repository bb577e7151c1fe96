//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::error::ConfigError;

/// Default OMDb endpoint
pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com/";

/// Signing secret used when `JWT_SECRET` is not provided
pub const FALLBACK_JWT_SECRET: &str = "secreta";

/// Server configuration parameters.
///
/// Everything except the OMDb API key has a sensible default.
#[derive(Debug, Clone)]
pub struct Config {
    /// OMDb API key (required)
    pub omdb_api_key: String,
    /// OMDb base URL
    pub omdb_base_url: String,
    /// Secret used to sign login tokens
    pub jwt_secret: String,
    /// Cache entry lifetime in seconds
    pub cache_ttl: u64,
    /// Per-request upstream timeout in seconds
    pub upstream_timeout: u64,
    /// Maximum concurrent upstream fetches per aggregation call
    pub fetch_concurrency: usize,
    /// Login token lifetime in seconds
    pub token_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// A `.env` file in the working directory is read first when present.
    ///
    /// # Environment Variables
    /// - `OMDB_API_KEY` - OMDb API key (required)
    /// - `OMDB_BASE_URL` - Provider endpoint (default: http://www.omdbapi.com/)
    /// - `JWT_SECRET` - Token signing secret (default: insecure fallback)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 21600)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 10)
    /// - `FETCH_CONCURRENCY` - Concurrent upstream fetches (default: 4)
    /// - `TOKEN_TTL` - Token lifetime in seconds (default: 86400)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let omdb_api_key = env::var("OMDB_API_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("OMDB_API_KEY"))?;

        let defaults = Self::default();

        Ok(Self {
            omdb_api_key,
            omdb_base_url: env::var("OMDB_BASE_URL").unwrap_or(defaults.omdb_base_url),
            jwt_secret: env::var("JWT_SECRET")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.jwt_secret),
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT").unwrap_or(defaults.upstream_timeout),
            fetch_concurrency: parse_var("FETCH_CONCURRENCY")
                .filter(|n| *n > 0)
                .unwrap_or(defaults.fetch_concurrency),
            token_ttl: parse_var("TOKEN_TTL").unwrap_or(defaults.token_ttl),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
        })
    }

    /// Returns true when the signing secret is the built-in fallback.
    pub fn uses_fallback_secret(&self) -> bool {
        self.jwt_secret == FALLBACK_JWT_SECRET
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            omdb_api_key: String::new(),
            omdb_base_url: DEFAULT_OMDB_BASE_URL.to_string(),
            jwt_secret: FALLBACK_JWT_SECRET.to_string(),
            cache_ttl: 6 * 60 * 60,
            upstream_timeout: 10,
            fetch_concurrency: 4,
            token_ttl: 24 * 60 * 60,
            server_port: 8080,
        }
    }
}

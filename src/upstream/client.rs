//! OMDb HTTP client
//!
//! Fetches raw movie records by IMDb identifier over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::upstream::MovieSource;

/// Record as returned by the OMDb API.
///
/// Every field defaults to empty when the provider omits it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawMovie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Plot")]
    pub plot: String,
    /// String-encoded float, e.g. `"8.8"` or `"N/A"`
    #[serde(rename = "imdbRating")]
    pub imdb_rating: String,
    /// String-encoded integer, e.g. `"74"` or `"N/A"`
    #[serde(rename = "Metascore")]
    pub metascore: String,
    #[serde(rename = "Poster")]
    pub poster: String,
    /// Comma-space separated list, e.g. `"Action, Sci-Fi"`
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    /// `"True"` on success, `"False"` otherwise
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: String,
    #[serde(rename = "Released")]
    pub released: String,
}

impl RawMovie {
    /// Whether the provider flagged the lookup as successful.
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

/// OMDb API client with a per-request timeout.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Builds a client for `base_url` authenticating with `api_key`.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl MovieSource for OmdbClient {
    async fn fetch_by_id(&self, id: &str) -> Result<RawMovie> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("i", id), ("plot", "full")])
            .send()
            .await?;

        let status = resp.status();
        debug!("omdb fetch id={} status={}", id, status.as_u16());
        if status != StatusCode::OK {
            warn!("omdb fetch failed id={} status={}", id, status.as_u16());
            return Err(AppError::Upstream(format!(
                "status code: {}",
                status.as_u16()
            )));
        }

        let raw: RawMovie = resp.json().await?;
        if !raw.is_success() {
            return Err(AppError::Upstream(format!("OMDb error: {}", raw.error)));
        }

        Ok(raw)
    }
}

//! API Handlers
//!
//! HTTP request handlers for the GraphQL endpoint and the service probes.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::api::schema::{build_schema, MovieSchema};
use crate::auth::{TokenIssuer, UserStore};
use crate::cache::CacheStore;
use crate::catalog::default_catalog;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{HealthResponse, StatsResponse};
use crate::service::MovieService;
use crate::upstream::OmdbClient;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema
    pub schema: MovieSchema,
    /// Movie cache, also held by the service inside the schema
    pub cache: Arc<CacheStore>,
    /// Credential registry, also held by the schema
    pub users: Arc<UserStore>,
}

impl AppState {
    /// Creates a new AppState around an already wired movie service.
    pub fn new(service: Arc<MovieService>, users: Arc<UserStore>, tokens: TokenIssuer) -> Self {
        let cache = Arc::clone(service.cache());
        let schema = build_schema(service, Arc::clone(&users), tokens);
        Self {
            schema,
            cache,
            users,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the OMDb client, the cache, the default catalog and the auth store.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Arc::new(CacheStore::new(config.cache_ttl()));
        let source = OmdbClient::new(
            config.omdb_base_url.clone(),
            config.omdb_api_key.clone(),
            config.upstream_timeout(),
        )?;
        let service = MovieService::new(cache, Arc::new(source), default_catalog())
            .with_fetch_concurrency(config.fetch_concurrency);
        let tokens = TokenIssuer::new(&config.jwt_secret, Duration::from_secs(config.token_ttl));

        Ok(Self::new(
            Arc::new(service),
            Arc::new(UserStore::new()),
            tokens,
        ))
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}

/// Handler for POST /graphql
///
/// Accepts `{query, variables?, operationName?}` as JSON. Responses that
/// carry GraphQL errors are returned with status 400.
pub async fn graphql_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response> {
    if !is_json(&headers) {
        return Err(AppError::UnsupportedMediaType);
    }

    let request: async_graphql::Request = serde_json::from_slice(&body).map_err(|e| {
        debug!("rejecting graphql body: {}", e);
        AppError::InvalidRequest("invalid request body".to_string())
    })?;

    let response = state.schema.execute(request).await;
    let status = if response.errors.is_empty() {
        StatusCode::OK
    } else {
        debug!("graphql execution returned {} errors", response.errors.len());
        StatusCode::BAD_REQUEST
    };

    Ok((status, Json(response)).into_response())
}

/// Handler for GET /stats
///
/// Returns cache statistics and the number of registered users.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;
    let users = state.users.len().await;

    Json(StatsResponse::new(&stats, users))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

//! Movie Service
//!
//! Cache-or-fetch resolution over the catalog, plus one method per query.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::stream::{self, StreamExt};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::error::Result;
use crate::models::Movie;
use crate::service::policy;
use crate::upstream::{adapt, MovieSource};

/// Outcome of resolving a list of identifiers.
///
/// Failed identifiers are counted, never returned as errors: a partial
/// result is a successful result.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Resolved movies, in input order
    pub movies: Vec<Arc<Movie>>,
    /// Identifiers whose fetch failed
    pub skipped: usize,
}

/// Aggregation engine over a fixed catalog.
pub struct MovieService {
    cache: Arc<CacheStore>,
    source: Arc<dyn MovieSource>,
    catalog: Vec<String>,
    /// Upper bound on in-flight upstream fetches per call
    fetch_concurrency: usize,
    /// Seeded once for the life of the service
    rng: Mutex<StdRng>,
}

impl MovieService {
    /// Creates a service with an entropy-seeded RNG and sequential fetches.
    pub fn new(cache: Arc<CacheStore>, source: Arc<dyn MovieSource>, catalog: Vec<String>) -> Self {
        Self::with_rng(cache, source, catalog, StdRng::from_entropy())
    }

    /// Creates a service that draws random picks from `rng`.
    pub fn with_rng(
        cache: Arc<CacheStore>,
        source: Arc<dyn MovieSource>,
        catalog: Vec<String>,
        rng: StdRng,
    ) -> Self {
        Self {
            cache,
            source,
            catalog,
            fetch_concurrency: 1,
            rng: Mutex::new(rng),
        }
    }

    /// Allows up to `limit` concurrent upstream fetches (minimum 1).
    pub fn with_fetch_concurrency(mut self, limit: usize) -> Self {
        self.fetch_concurrency = limit.max(1);
        self
    }

    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    pub fn cache(&self) -> &Arc<CacheStore> {
        &self.cache
    }

    // == Resolution ==
    /// Returns the movie for `id` from the cache, fetching and caching it on miss.
    pub async fn resolve(&self, id: &str) -> Result<Arc<Movie>> {
        if let Some(movie) = self.cache.get(id).await {
            return Ok(movie);
        }

        let raw = self.source.fetch_by_id(id).await?;
        let movie = Arc::new(adapt(&raw));
        self.cache.set(id, Arc::clone(&movie)).await;
        Ok(movie)
    }

    /// Resolves every identifier, skipping the ones that fail.
    ///
    /// Fetches run with bounded fan-out but results keep input order.
    pub async fn resolve_all(&self, ids: Vec<String>) -> Resolution {
        let outcomes: Vec<(String, Result<Arc<Movie>>)> = stream::iter(ids)
            .map(|id| async move {
                let outcome = self.resolve(&id).await;
                (id, outcome)
            })
            .buffered(self.fetch_concurrency)
            .collect()
            .await;

        let resolution = outcomes
            .into_iter()
            .fold(Resolution::default(), |mut acc, (id, outcome)| {
                match outcome {
                    Ok(movie) => acc.movies.push(movie),
                    Err(e) => {
                        warn!("skipping {}: {}", id, e);
                        acc.skipped += 1;
                    }
                }
                acc
            });

        debug!(
            "resolved {} movies, skipped {}",
            resolution.movies.len(),
            resolution.skipped
        );
        resolution
    }

    async fn resolve_catalog(&self) -> Vec<Arc<Movie>> {
        self.resolve_all(self.catalog.clone()).await.movies
    }

    // == Queries ==
    /// Single lookup. Upstream failures propagate to the caller.
    pub async fn movie_by_id(&self, id: &str) -> Result<Arc<Movie>> {
        self.resolve(id).await
    }

    /// Catalog sorted by release date, most recent first; undated movies dropped.
    pub async fn recent_movies(&self) -> Vec<Arc<Movie>> {
        policy::most_recent(self.resolve_catalog().await)
    }

    /// Ten best movies by critic score.
    pub async fn top_rated_by_critic(&self) -> Vec<Arc<Movie>> {
        policy::top_by_critic(self.resolve_catalog().await)
    }

    /// Ten best movies by user rating.
    pub async fn top_rated_by_users(&self) -> Vec<Arc<Movie>> {
        policy::top_by_users(self.resolve_catalog().await)
    }

    /// Movies rated highly by both critics and users.
    pub async fn loved_by_all(&self) -> Vec<Arc<Movie>> {
        policy::loved_by_all(self.resolve_catalog().await)
    }

    /// Movies of one genre, catalog order.
    pub async fn by_genre(&self, genre: &str) -> Vec<Arc<Movie>> {
        policy::with_genre(self.resolve_catalog().await, genre)
    }

    /// One uniformly random movie matching any of `genres`.
    ///
    /// `None` when no genres are given or nothing matches.
    pub async fn random_from_genres(&self, genres: &[String]) -> Option<Arc<Movie>> {
        if genres.is_empty() {
            return None;
        }

        let candidates = policy::with_any_genre(self.resolve_catalog().await, genres);
        let mut rng = self.rng.lock().await;
        candidates.choose(&mut *rng).cloned()
    }

    /// Whole catalog in order, each identifier at most once.
    pub async fn all_movies(&self) -> Vec<Arc<Movie>> {
        let mut seen = HashSet::new();
        let unique: Vec<String> = self
            .catalog
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect();

        self.resolve_all(unique).await.movies
    }
}

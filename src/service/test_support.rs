//! In-memory movie source for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::upstream::{MovieSource, RawMovie};

/// Serves raw records from a map and counts every fetch.
#[derive(Debug, Default)]
pub struct StaticSource {
    records: HashMap<String, RawMovie>,
    fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(records: impl IntoIterator<Item = RawMovie>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|r| (r.imdb_id.clone(), r))
                .collect(),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieSource for StaticSource {
    async fn fetch_by_id(&self, id: &str) -> Result<RawMovie> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::Upstream(format!("OMDb error: Incorrect IMDb ID {}", id)))
    }
}

/// Builds a successful raw record.
pub fn raw(id: &str, critic: &str, user: &str, genre: &str, released: &str) -> RawMovie {
    RawMovie {
        title: format!("Movie {}", id),
        plot: String::new(),
        imdb_rating: user.to_string(),
        metascore: critic.to_string(),
        poster: String::new(),
        genre: genre.to_string(),
        imdb_id: id.to_string(),
        response: "True".to_string(),
        error: String::new(),
        released: released.to_string(),
    }
}

//! Movie entity
//!
//! The internal representation of one title, built by the upstream adapter
//! and shared read-only once stored in the cache.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A single movie as exposed by the API.
///
/// Field names stay snake_case on the GraphQL side (`user_rating`,
/// `critic_rating`, `poster_url`) to match the published shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(rename_fields = "snake_case")]
pub struct Movie {
    /// External identifier (e.g. `tt1375666`)
    pub id: String,
    pub title: String,
    pub synopsis: String,
    /// Provider-scale user rating, 0–10
    pub user_rating: f64,
    /// Provider-scale critic score, 0–100
    pub critic_rating: i32,
    pub poster_url: String,
    /// Ordered genre list, compared case-insensitively
    pub genres: Vec<String>,
    /// Free-form release date as reported by the provider
    pub released: String,
}

impl Movie {
    /// Returns true if any of the movie's genres equals `genre`, ignoring case.
    pub fn has_genre(&self, genre: &str) -> bool {
        let wanted = genre.to_lowercase();
        self.genres.iter().any(|g| g.to_lowercase() == wanted)
    }

    /// Composite score used to rank movies loved by critics and users alike.
    pub fn composite_score(&self) -> f64 {
        f64::from(self.critic_rating) / 10.0 + self.user_rating
    }
}

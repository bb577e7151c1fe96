//! Selection policies
//!
//! Pure sort/filter/limit rules applied to a resolved set of movies. All
//! sorts are stable, so ties keep catalog order.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::models::Movie;

/// Maximum length of the top-rated lists
pub const TOP_RATED_LIMIT: usize = 10;

/// Minimum critic score for a movie to count as loved by all
pub const LOVED_MIN_CRITIC: i32 = 80;

/// Minimum user rating for a movie to count as loved by all
pub const LOVED_MIN_USER: f64 = 8.0;

/// Layout of the provider's release date, e.g. `16 Jul 2010`
pub const RELEASE_DATE_FORMAT: &str = "%d %b %Y";

/// Parses a provider release date, `None` for `"N/A"` or anything malformed.
///
/// The day must be zero-padded to two digits; `5 Jul 2010` is rejected.
pub fn parse_release_date(released: &str) -> Option<NaiveDate> {
    let padded_day = released
        .as_bytes()
        .get(..2)
        .is_some_and(|day| day.iter().all(u8::is_ascii_digit));
    if !padded_day {
        return None;
    }
    NaiveDate::parse_from_str(released, RELEASE_DATE_FORMAT).ok()
}

/// Most recent first. Movies without a parseable date are dropped.
pub fn most_recent(movies: Vec<Arc<Movie>>) -> Vec<Arc<Movie>> {
    let mut dated: Vec<(NaiveDate, Arc<Movie>)> = movies
        .into_iter()
        .filter_map(|m| parse_release_date(&m.released).map(|date| (date, m)))
        .collect();

    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().map(|(_, m)| m).collect()
}

/// Highest critic score first, at most [`TOP_RATED_LIMIT`] entries.
pub fn top_by_critic(mut movies: Vec<Arc<Movie>>) -> Vec<Arc<Movie>> {
    movies.sort_by(|a, b| b.critic_rating.cmp(&a.critic_rating));
    movies.truncate(TOP_RATED_LIMIT);
    movies
}

/// Highest user rating first, at most [`TOP_RATED_LIMIT`] entries.
pub fn top_by_users(mut movies: Vec<Arc<Movie>>) -> Vec<Arc<Movie>> {
    movies.sort_by(|a, b| b.user_rating.total_cmp(&a.user_rating));
    movies.truncate(TOP_RATED_LIMIT);
    movies
}

/// Movies both critics and users rate highly, best composite score first.
pub fn loved_by_all(movies: Vec<Arc<Movie>>) -> Vec<Arc<Movie>> {
    let mut loved: Vec<Arc<Movie>> = movies
        .into_iter()
        .filter(|m| m.critic_rating >= LOVED_MIN_CRITIC && m.user_rating >= LOVED_MIN_USER)
        .collect();

    loved.sort_by(|a, b| b.composite_score().total_cmp(&a.composite_score()));
    loved
}

/// Movies listing `genre` (case-insensitive), order preserved.
pub fn with_genre(movies: Vec<Arc<Movie>>, genre: &str) -> Vec<Arc<Movie>> {
    movies.into_iter().filter(|m| m.has_genre(genre)).collect()
}

/// Movies listing at least one of `genres` (case-insensitive), each once.
pub fn with_any_genre(movies: Vec<Arc<Movie>>, genres: &[String]) -> Vec<Arc<Movie>> {
    movies
        .into_iter()
        .filter(|m| genres.iter().any(|g| m.has_genre(g)))
        .collect()
}

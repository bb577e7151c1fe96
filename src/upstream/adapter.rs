//! Upstream Adapter
//!
//! Maps the provider's raw record into the internal `Movie`.

use crate::models::Movie;
use crate::upstream::RawMovie;

/// Separator between genres in the provider's single genre string
const GENRE_SEPARATOR: &str = ", ";

/// Converts a raw provider record into a `Movie`.
///
/// Never fails: ratings that do not parse (`"N/A"`, empty, padded with
/// whitespace, garbage) become zero. The genre string is split on `", "` as is, so an empty string
/// yields a single empty genre.
pub fn adapt(raw: &RawMovie) -> Movie {
    let user_rating = raw.imdb_rating.parse::<f64>().unwrap_or(0.0);
    let critic_rating = raw.metascore.parse::<i32>().unwrap_or(0);
    let genres = raw
        .genre
        .split(GENRE_SEPARATOR)
        .map(str::to_string)
        .collect();

    Movie {
        id: raw.imdb_id.clone(),
        title: raw.title.clone(),
        synopsis: raw.plot.clone(),
        user_rating,
        critic_rating,
        poster_url: raw.poster.clone(),
        genres,
        released: raw.released.clone(),
    }
}

//! Cache Store Module
//!
//! Key → movie storage with a fixed TTL, guarded by a reader/writer lock.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::Movie;

// == Cache Store ==
/// Movie cache with per-entry expiration.
///
/// Readers share the lock, `set` takes it exclusively. Expired entries are
/// reported as absent but stay in the map until overwritten; there is no
/// capacity bound and no eviction.
#[derive(Debug)]
pub struct CacheStore {
    /// Key → entry storage
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Lifetime given to every entry on `set`
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty CacheStore whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    // == Get ==
    /// Returns the movie stored under `key` if present and not expired.
    ///
    /// The expiry check happens under the same read guard as the lookup.
    pub async fn get(&self, key: &str) -> Option<Arc<Movie>> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("cache hit: {}", key);
                Some(Arc::clone(&entry.movie))
            }
            Some(_) => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("cache expired: {}", key);
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                debug!("cache miss: {}", key);
                None
            }
        }
    }

    // == Set ==
    /// Stores `movie` under `key`, expiring one TTL from now.
    ///
    /// Overwrites any previous entry and resets its expiration.
    pub async fn set(&self, key: impl Into<String>, movie: Arc<Movie>) {
        let entry = CacheEntry::new(movie, self.ttl);
        let mut entries = self.entries.write().await;
        entries.insert(key.into(), entry);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            total_entries: self.len().await,
        }
    }

    // == Length ==
    /// Returns the number of entries physically held, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const LONG_TTL: Duration = Duration::from_secs(300);

    fn movie(id: &str, title: &str) -> Arc<Movie> {
        Arc::new(Movie {
            id: id.to_string(),
            title: title.to_string(),
            synopsis: String::new(),
            user_rating: 7.0,
            critic_rating: 70,
            poster_url: String::new(),
            genres: vec!["Drama".to_string()],
            released: "01 Jan 2000".to_string(),
        })
    }

    #[tokio::test]
    async fn test_store_new() {
        let store = CacheStore::new(LONG_TTL);
        assert_eq!(store.len().await, 0);
        assert!(store.is_empty().await);
        assert_eq!(store.ttl(), LONG_TTL);
    }

    #[tokio::test]
    async fn test_store_set_and_get() {
        let store = CacheStore::new(LONG_TTL);

        store.set("tt1", movie("tt1", "One")).await;
        let found = store.get("tt1").await.unwrap();

        assert_eq!(found.title, "One");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_get_nonexistent() {
        let store = CacheStore::new(LONG_TTL);
        assert!(store.get("nonexistent").await.is_none());
    }

    #[tokio::test]
    async fn test_store_overwrite() {
        let store = CacheStore::new(LONG_TTL);

        store.set("tt1", movie("tt1", "First")).await;
        store.set("tt1", movie("tt1", "Second")).await;

        assert_eq!(store.get("tt1").await.unwrap().title, "Second");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_ttl_expiration() {
        let store = CacheStore::new(Duration::from_millis(100));

        store.set("tt1", movie("tt1", "One")).await;
        assert!(store.get("tt1").await.is_some());

        tokio::time::sleep(Duration::from_millis(150)).await;

        // Expired entries read as absent even though they are still held
        assert!(store.get("tt1").await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_overwrite_resets_expiration() {
        let store = CacheStore::new(Duration::from_millis(100));

        store.set("tt1", movie("tt1", "One")).await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(store.get("tt1").await.is_none());

        store.set("tt1", movie("tt1", "One")).await;
        assert!(store.get("tt1").await.is_some());
    }

    #[tokio::test]
    async fn test_store_zero_ttl_never_returns() {
        let store = CacheStore::new(Duration::ZERO);

        store.set("tt1", movie("tt1", "One")).await;
        assert!(store.get("tt1").await.is_none());
    }

    #[tokio::test]
    async fn test_store_stats() {
        let store = CacheStore::new(LONG_TTL);

        store.set("tt1", movie("tt1", "One")).await;
        store.get("tt1").await; // hit
        store.get("nonexistent").await; // miss

        let stats = store.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_store_concurrent_readers_and_writers() {
        let store = Arc::new(CacheStore::new(LONG_TTL));
        let mut handles = Vec::new();

        for i in 0..8 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                for j in 0..50 {
                    let key = format!("tt{}", j % 10);
                    if (i + j) % 3 == 0 {
                        store.set(key.clone(), movie(&key, &key)).await;
                    } else if let Some(found) = store.get(&key).await {
                        // A reader never sees a half-written entry
                        assert_eq!(found.id, key);
                        assert_eq!(found.title, key);
                    }
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 10);
    }
}

//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache's storage and expiry guarantees over
//! arbitrary keys and movies.

use proptest::prelude::*;
use proptest::strategy::ValueTree;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio_test::block_on;

use crate::cache::CacheStore;
use crate::models::Movie;

// == Test Configuration ==
const TEST_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Generates catalog-style identifiers
fn key_strategy() -> impl Strategy<Value = String> {
    "tt[0-9]{7,8}".prop_map(|s| s)
}

fn movie_strategy() -> impl Strategy<Value = Movie> {
    (
        key_strategy(),
        "[a-zA-Z ]{1,32}",
        0.0f64..10.0,
        0i32..=100,
        prop::collection::vec("[a-zA-Z-]{1,12}", 0..4),
    )
        .prop_map(|(id, title, user_rating, critic_rating, genres)| Movie {
            id,
            title,
            synopsis: String::new(),
            user_rating,
            critic_rating,
            poster_url: String::new(),
            genres,
            released: "01 Jan 2000".to_string(),
        })
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, movie: Movie },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), movie_strategy()).prop_map(|(key, movie)| CacheOp::Set { key, movie }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // set(k, m) followed by get(k) within TTL returns m.
    #[test]
    fn prop_roundtrip_within_ttl(key in key_strategy(), movie in movie_strategy()) {
        let store = CacheStore::new(TEST_TTL);

        let found = block_on(async {
            store.set(key.clone(), Arc::new(movie.clone())).await;
            store.get(&key).await
        });

        prop_assert_eq!(found.as_deref(), Some(&movie));
    }

    // Repeated set with the same movie does not change what get returns.
    #[test]
    fn prop_set_idempotent(key in key_strategy(), movie in movie_strategy(), times in 1usize..10) {
        let store = CacheStore::new(TEST_TTL);

        let (found, len) = block_on(async {
            for _ in 0..times {
                store.set(key.clone(), Arc::new(movie.clone())).await;
            }
            (store.get(&key).await, store.len().await)
        });

        prop_assert_eq!(found.as_deref(), Some(&movie));
        prop_assert_eq!(len, 1);
    }

    // The store behaves like a map with last-write-wins semantics, and the
    // hit/miss counters account for every lookup.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let store = CacheStore::new(TEST_TTL);
        let mut model: HashMap<String, Movie> = HashMap::new();
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { key, movie } => {
                    block_on(store.set(key.clone(), Arc::new(movie.clone())));
                    model.insert(key, movie);
                }
                CacheOp::Get { key } => {
                    let found = block_on(store.get(&key));
                    prop_assert_eq!(found.as_deref(), model.get(&key));
                    if found.is_some() {
                        expected_hits += 1;
                    } else {
                        expected_misses += 1;
                    }
                }
            }
        }

        let stats = block_on(store.stats());
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.total_entries, model.len());
    }
}

// After the TTL elapses every key reads as absent.
#[test]
fn test_all_entries_expire() {
    let store = CacheStore::new(Duration::from_millis(100));
    let mut runner = proptest::test_runner::TestRunner::new(ProptestConfig::with_cases(1));
    let movies = prop::collection::vec(movie_strategy(), 1..20)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    block_on(async {
        for movie in &movies {
            store.set(movie.id.clone(), Arc::new(movie.clone())).await;
        }
    });

    std::thread::sleep(Duration::from_millis(150));

    block_on(async {
        for movie in &movies {
            assert!(store.get(&movie.id).await.is_none());
        }
    });
}

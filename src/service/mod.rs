//! Aggregation Module
//!
//! Resolves catalog identifiers through the cache or the upstream provider
//! and applies the ranking/filtering policies on top.

mod movies;
pub mod policy;

#[cfg(test)]
pub(crate) mod test_support;

pub use movies::{MovieService, Resolution};

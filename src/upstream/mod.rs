//! Upstream Module
//!
//! Access to the third-party movie provider: the raw record shape, the HTTP
//! client, and the adapter into the internal `Movie`.

mod adapter;
mod client;

pub use adapter::adapt;
pub use client::{OmdbClient, RawMovie};

use async_trait::async_trait;

use crate::error::Result;

/// A provider that can look a movie up by its external identifier.
///
/// Any failure (transport, timeout, non-success status, decode, provider
/// error flag) surfaces as `AppError::Upstream`.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn fetch_by_id(&self, id: &str) -> Result<RawMovie>;
}

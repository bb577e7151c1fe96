//! Movies API - GraphQL over the OMDb provider
//!
//! Serves ranked, filtered and sampled views of a fixed movie catalog,
//! shielding the upstream provider behind a TTL cache, plus a minimal
//! signup/login store.

pub mod api;
pub mod auth;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use error::{AppError, Result};

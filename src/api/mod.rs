//! API Module
//!
//! GraphQL schema, HTTP handlers and routing.
//!
//! # Endpoints
//! - `POST /graphql` - GraphQL queries and mutations
//! - `GET /stats` - Cache and user store statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;
pub mod schema;

pub use handlers::*;
pub use routes::create_router;
pub use schema::{build_schema, MovieSchema};

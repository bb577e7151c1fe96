//! Domain entities and response DTOs
//!
//! Movies and users as they flow through the service, plus the JSON bodies
//! returned by the plain HTTP endpoints.

pub mod movie;
pub mod responses;
pub mod user;

// Re-export commonly used types
pub use movie::Movie;
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
pub use user::{LoginPayload, User, UserView};

//! Auth Module
//!
//! In-memory credential store with Argon2 password hashing and signed
//! login tokens. Authentication only; there is no authorization layer.

pub mod password;
mod store;
mod token;

pub use store::UserStore;
pub use token::{Claims, TokenIssuer};

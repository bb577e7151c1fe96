//! User models
//!
//! The stored user record plus the views handed back through the API.

use async_graphql::SimpleObject;
use serde::Serialize;
use uuid::Uuid;

/// A registered user. Only ever held by the user store.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique key of the store, compared as given
    pub email: String,
    /// Argon2 PHC string, never the plaintext
    pub password_hash: String,
}

/// Public view of a user, without the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
#[graphql(name = "User")]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, Serialize, SimpleObject)]
#[graphql(name = "LoginResponse")]
pub struct LoginPayload {
    pub email: String,
    pub token: String,
}

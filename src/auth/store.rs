//! User Store
//!
//! Email → user registry guarded by a reader/writer lock.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, Result};
use crate::models::User;

/// In-memory credential registry keyed by email (case-sensitive, as given).
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<String, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    // == Signup ==
    /// Registers a new user.
    ///
    /// The password is hashed before the write lock is taken; the uniqueness
    /// check and the insert happen under a single lock acquisition, so two
    /// concurrent signups for one email cannot both succeed.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let password_hash = hash_blocking(password).await?;

        let mut users = self.users.write().await;
        if users.contains_key(email) {
            debug!("signup rejected, email already registered");
            return Err(AppError::AlreadyExists(email.to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        };
        users.insert(email.to_string(), user.clone());
        info!("registered user {}", user.id);

        Ok(user)
    }

    // == Login ==
    /// Returns the user if `password` matches the stored hash.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let user = self
            .users
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("user {}", email)))?;

        if verify_blocking(password, &user.password_hash).await? {
            Ok(user)
        } else {
            debug!("login rejected for user {}", user.id);
            Err(AppError::InvalidCredentials)
        }
    }

    // == Authenticate ==
    /// Same check as [`login`](Self::login), collapsed to a boolean.
    pub async fn authenticate(&self, email: &str, password: &str) -> bool {
        self.login(email, password).await.is_ok()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

// Argon2 work runs on the blocking pool.
async fn hash_blocking(password: &str) -> Result<String> {
    let password = password.to_string();
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| AppError::Internal(format!("hashing task failed: {}", e)))?
}

async fn verify_blocking(password: &str, hash: &str) -> Result<bool> {
    let password = password.to_string();
    let hash = hash.to_string();
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("verification task failed: {}", e)))
}

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use skybook_core::User;
use skybook_shared::Masked;
use std::sync::Arc;
use tracing::warn;

use crate::state_store::{StateStore, StoreError};

/// Storage key for the registered-user table
pub const USERS_KEY: &str = "skybook_registered_users";
/// Storage key for the signed-in identity
pub const SESSION_KEY: &str = "skybook_user";

/// SHA-256 hex digest of a secret. Secrets are never persisted in clear
/// text; only digests are stored and compared.
pub fn secret_digest(secret: &str) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}

/// A registered identity as persisted in the user table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisteredUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub secret_hash: Masked<String>,
}

impl RegisteredUser {
    pub fn as_user(&self) -> User {
        User::new(self.id.clone(), self.name.clone(), self.email.clone())
    }
}

/// Registered-user table persisted as one JSON array under a fixed key.
pub struct UserRepo {
    store: Arc<dyn StateStore>,
}

impl UserRepo {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<RegisteredUser>, StoreError> {
        let Some(raw) = self.store.load(USERS_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(users) => Ok(users),
            Err(e) => {
                warn!(error = %e, "Registered-user table unparsable, starting empty");
                Ok(Vec::new())
            }
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<RegisteredUser>, StoreError> {
        Ok(self.list().await?.into_iter().find(|u| u.email == email))
    }

    pub async fn insert(&self, user: RegisteredUser) -> Result<(), StoreError> {
        let mut users = self.list().await?;
        users.push(user);
        let raw = serde_json::to_string(&users)?;
        self.store.save(USERS_KEY, &raw).await
    }
}

/// The signed-in identity, persisted under its own key so the session
/// survives reloads.
pub struct SessionRepo {
    store: Arc<dyn StateStore>,
}

impl SessionRepo {
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }

    pub async fn current(&self) -> Result<Option<User>, StoreError> {
        let Some(raw) = self.store.load(SESSION_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!(error = %e, "Stored session unparsable, treating as signed out");
                Ok(None)
            }
        }
    }

    pub async fn set(&self, user: &User) -> Result<(), StoreError> {
        let raw = serde_json::to_string(user)?;
        self.store.save(SESSION_KEY, &raw).await
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(SESSION_KEY).await
    }
}

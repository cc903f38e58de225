use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("user already exists")]
    AlreadyExists,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Username to salted bcrypt hash. The map is only reachable through
/// `register` and `verify`; no other component writes to it.
#[derive(Clone)]
pub struct CredentialVault {
    users: Arc<RwLock<HashMap<String, String>>>,
    cost: u32,
}

impl CredentialVault {
    pub fn new() -> Self {
        Self::with_cost(bcrypt::DEFAULT_COST)
    }

    /// Lower costs keep test runs fast; production uses `new`.
    pub fn with_cost(cost: u32) -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            cost,
        }
    }

    /// Check-and-set under the write lock: of two concurrent registrations
    /// for one username, exactly one succeeds. Hashing happens before the
    /// lock is taken, so a hash failure commits nothing.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), VaultError> {
        let hashed = bcrypt::hash(password, self.cost)?;

        let mut users = self.users.write().await;
        if users.contains_key(username) {
            return Err(VaultError::AlreadyExists);
        }
        users.insert(username.to_string(), hashed);
        Ok(())
    }

    pub async fn verify(&self, username: &str, password: &str) -> Result<(), VaultError> {
        let hashed = {
            let users = self.users.read().await;
            users
                .get(username)
                .cloned()
                .ok_or(VaultError::InvalidCredentials)?
        };

        match bcrypt::verify(password, &hashed) {
            Ok(true) => Ok(()),
            _ => Err(VaultError::InvalidCredentials),
        }
    }
}

impl Default for CredentialVault {
    fn default() -> Self {
        Self::new()
    }
}

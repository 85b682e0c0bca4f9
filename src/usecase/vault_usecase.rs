use async_trait::async_trait;

use crate::domain::{
    error::{DomainError, VaultError},
    models::credential::HashedPassword,
    services::{password_service::PasswordHasher, vault_service::VaultService},
};

/// In-process vault backed by a [`PasswordHasher`].
///
/// Hashing is CPU-bound, so each call runs on the blocking pool. Once started
/// it always runs to completion; dropping the future only stops calls that
/// have not been scheduled yet.
#[derive(Debug, Clone, Default)]
pub struct VaultUsecase<P: PasswordHasher> {
    password_hasher: P,
}

impl<P: PasswordHasher> VaultUsecase<P> {
    pub fn new(password_hasher: P) -> Self {
        Self { password_hasher }
    }
}

#[async_trait]
impl<P: PasswordHasher> VaultService for VaultUsecase<P> {
    async fn hash(&self, password: &str) -> Result<String, VaultError> {
        let hasher = self.password_hasher.clone();
        let password = password.to_owned();

        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::WorkerFailed(e.to_string()))??;

        Ok(hashed.into_string())
    }

    async fn validate(&self, password: &str, hash: &str) -> Result<bool, VaultError> {
        let hasher = self.password_hasher.clone();
        let password = password.to_owned();
        let hash = HashedPassword::new(hash.to_owned());

        let valid = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| DomainError::WorkerFailed(e.to_string()))?;

        Ok(valid)
    }
}

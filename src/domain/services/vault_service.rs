use async_trait::async_trait;

use crate::domain::error::VaultError;

/// Password hashing capabilities, independent of where they run.
///
/// Implemented in-process by `VaultUsecase` and remotely by `Endpoints`, so
/// callers never know which one they hold.
#[async_trait]
pub trait VaultService: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, VaultError>;

    async fn validate(&self, password: &str, hash: &str) -> Result<bool, VaultError>;
}

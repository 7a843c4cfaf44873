// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// Errors with `Unauthorized` when the password does not match the hash.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

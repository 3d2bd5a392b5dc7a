//! Bcrypt adapter for the password hasher port.

use async_trait::async_trait;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Salted one-way hashing via bcrypt.
///
/// Bcrypt is CPU-bound by design, so both operations run on the blocking
/// thread pool instead of stalling the async executor.
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the given cost factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl PasswordHasher for BcryptPasswordHasher {
    async fn hash(&self, plain: &str) -> Result<String, PasswordHashError> {
        let cost = self.cost;
        let plain = plain.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
            .await
            .map_err(|error| PasswordHashError::hash(error.to_string()))?
            .map_err(|error| PasswordHashError::hash(error.to_string()))
    }

    async fn verify(&self, candidate: &str, hash: &str) -> Result<bool, PasswordHashError> {
        let candidate = candidate.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(candidate, &hash))
            .await
            .map_err(|error| PasswordHashError::hash(error.to_string()))?
            .map_err(|error| PasswordHashError::hash(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Lowest cost bcrypt accepts; keeps the suite fast.
    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn hash_and_verify_round_trip() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let hash = hasher.hash("hello123").await.expect("hashable");
        assert_ne!(hash, "hello123");
        assert!(hasher.verify("hello123", &hash).await.expect("comparable"));
        assert!(!hasher.verify("hello124", &hash).await.expect("comparable"));
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let first = hasher.hash("hello123").await.expect("hashable");
        let second = hasher.hash("hello123").await.expect("hashable");
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn malformed_stored_hash_is_an_error() {
        let hasher = BcryptPasswordHasher::new(TEST_COST);
        let error = hasher
            .verify("hello123", "not-a-bcrypt-hash")
            .await
            .expect_err("malformed hash");
        assert!(matches!(error, PasswordHashError::Hash { .. }));
    }
}

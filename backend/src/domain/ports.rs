//! Domain ports defining the edges of the hexagon.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (the document store, the token issuer, the password hasher). Each trait
//! exposes strongly typed errors so adapters map their failures into
//! predictable variants instead of returning `anyhow::Result`.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::auth::AccessToken;
use crate::domain::entity::Entity;
use crate::domain::record_id::RecordId;

/// Failures surfaced by document-store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Store connectivity failures.
    #[error("document store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("document store query failed: {message}")]
    Query { message: String },
    /// The store rejected the document or query shape.
    #[error("rejected by the document store: {message}")]
    Rejected { message: String },
}

impl StoreError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Helper for document/query-shape rejections.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Field-equality filter over serialized documents.
///
/// Field names follow the serialized (camelCase) form.
///
/// # Examples
/// ```
/// use stockyard_backend::domain::ports::Filter;
///
/// let filter = Filter::by_field("username", "Tester");
/// assert_eq!(filter.clauses().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    /// Filter matching documents whose `field` equals `value`.
    pub fn by_field(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            clauses: vec![(field.into(), value.into())],
        }
    }

    /// Add a further equality clause.
    #[must_use]
    pub fn and_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    /// The equality clauses in declaration order.
    pub fn clauses(&self) -> &[(String, Value)] {
        self.clauses.as_slice()
    }
}

/// Persistence port over one document-store collection.
///
/// One implementation serves every entity type; the collection is selected by
/// [`Entity::KIND`].
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Return every stored record.
    async fn list(&self) -> Result<Vec<E>, StoreError>;

    /// Fetch a record by its identifier.
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<E>, StoreError>;

    /// Fetch the first record matching the filter.
    async fn find_by_filter(&self, filter: &Filter) -> Result<Option<E>, StoreError>;

    /// Insert or fully replace a record, assigning an identifier when the
    /// entity carries none. Returns the persisted form.
    async fn insert_or_replace(&self, entity: E) -> Result<E, StoreError>;

    /// Remove a record, returning the stored document. The returned entity
    /// carries no identifier; callers re-attach it when needed.
    async fn remove_by_id(&self, id: &RecordId) -> Result<Option<E>, StoreError>;
}

/// Failures surfaced by the token issuer/verifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token's lifetime has elapsed.
    #[error("token expired")]
    Expired,
    /// Signature, format, or claim problems.
    #[error("invalid token: {message}")]
    Invalid { message: String },
    /// Token creation failed.
    #[error("token signing failed: {message}")]
    Signing { message: String },
}

impl TokenError {
    /// Helper for verification failures.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Helper for signing failures.
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }
}

/// Port producing and verifying signed, expiring access tokens.
pub trait TokenIssuer: Send + Sync {
    /// Issue a token bound to the given subject identifier.
    fn issue(&self, subject: &RecordId) -> Result<AccessToken, TokenError>;

    /// Verify signature and expiry, returning the embedded subject
    /// identifier in its external string form.
    fn verify(&self, token: &str) -> Result<String, TokenError>;
}

/// Failures surfaced by the password hasher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    /// Hashing or comparison failed.
    #[error("password hashing failed: {message}")]
    Hash { message: String },
}

impl PasswordHashError {
    /// Helper wrapping an adapter failure message.
    pub fn hash(message: impl Into<String>) -> Self {
        Self::Hash {
            message: message.into(),
        }
    }
}

/// Port for one-way, salted password hashing.
///
/// Hashing is CPU-bound, so the port is async and adapters may suspend.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password.
    async fn hash(&self, plain: &str) -> Result<String, PasswordHashError>;

    /// Compare a candidate password against a stored hash.
    async fn verify(&self, candidate: &str, hash: &str) -> Result<bool, PasswordHashError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_collects_clauses_in_order() {
        let filter = Filter::by_field("username", "Tester").and_field("emailAddress", "t@t.com");
        let clauses = filter.clauses();
        assert_eq!(clauses[0], ("username".to_owned(), json!("Tester")));
        assert_eq!(clauses[1], ("emailAddress".to_owned(), json!("t@t.com")));
    }

    #[test]
    fn store_error_helpers_carry_messages() {
        assert_eq!(
            StoreError::rejected("bad shape").to_string(),
            "rejected by the document store: bad shape"
        );
        assert_eq!(
            StoreError::connection("down").to_string(),
            "document store connection failed: down"
        );
    }
}

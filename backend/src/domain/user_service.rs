//! User orchestration: CRUD, credential hashing, login, and authorization.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::auth::{AccessToken, LoginCredentials};
use crate::domain::entity::Entity;
use crate::domain::entity_service::EntityService;
use crate::domain::error::{DomainError, DomainResult, ErrorCode};
use crate::domain::ports::{EntityStore, Filter, PasswordHasher, TokenIssuer};
use crate::domain::record_id::RecordId;
use crate::domain::user::User;

/// Default account seeded on an empty user collection.
pub const DEFAULT_USERNAME: &str = "Tester";
const DEFAULT_EMAIL: &str = "tester@test.com";
const DEFAULT_PASSWORD: &str = "hello123";

/// Service for user accounts and authentication.
///
/// Lookup failures inside `login` and `authorize` are reported as
/// `unauthorized`, so callers cannot distinguish a wrong password from an
/// unknown username or a token for a deleted account.
pub struct UserService<S, T, H> {
    base: EntityService<User, S>,
    tokens: Arc<T>,
    hasher: Arc<H>,
}

impl<S, T, H> UserService<S, T, H>
where
    S: EntityStore<User>,
    T: TokenIssuer,
    H: PasswordHasher,
{
    /// Create the service over its store and credential ports.
    pub fn new(store: Arc<S>, tokens: Arc<T>, hasher: Arc<H>) -> Self {
        Self {
            base: EntityService::new(store),
            tokens,
            hasher,
        }
    }

    /// Fetch every user, sanitized (no password, external id only).
    pub async fn find_all(&self) -> DomainResult<Vec<User>> {
        self.base.find_all().await
    }

    /// Fetch one user by external identifier, sanitized.
    pub async fn find_one_by_id(&self, id: &str) -> DomainResult<User> {
        self.base.find_one_by_id(id).await
    }

    /// Validate, hash the password, and persist a new user.
    pub async fn save(&self, mut user: User) -> DomainResult<User> {
        user.validate()?;
        user.password = self.hash_password(&user.password).await?;
        let mut saved = self.base.repository().save(user).await?;
        saved.sanitize();
        Ok(saved)
    }

    /// Validate, re-hash the supplied password, and fully replace the record.
    pub async fn update(&self, mut user: User) -> DomainResult<User> {
        user.validate()?;
        let id = user
            .record_id()
            .cloned()
            .ok_or_else(|| DomainError::invalid_request("Incorrect / invalid parameters supplied"))?;
        user.password = self.hash_password(&user.password).await?;
        let mut updated = self.base.repository().update_one_by_id(&id, user).await?;
        updated.sanitize();
        Ok(updated)
    }

    /// Delete by external identifier.
    pub async fn delete(&self, id: &str) -> DomainResult<User> {
        self.base.delete(id).await
    }

    /// Exchange credentials for a signed, expiring access token.
    pub async fn login(&self, credentials: &LoginCredentials) -> DomainResult<AccessToken> {
        let filter = Filter::by_field("username", credentials.username());
        let user = match self.base.repository().find_one_by_filter(&filter).await {
            Ok(user) => user,
            Err(error) if error.code() == ErrorCode::NotFound => {
                debug!(username = credentials.username(), "login for unknown user");
                return Err(Self::invalid_credentials());
            }
            Err(error) => return Err(error),
        };

        // Shape-check a copy carrying the candidate secret; the fetched
        // record keeps its hash untouched.
        user.with_password(credentials.password()).validate()?;

        let matches = self
            .hasher
            .verify(credentials.password(), &user.password)
            .await
            .map_err(|error| DomainError::internal(error.to_string()))?;
        if !matches {
            debug!(username = credentials.username(), "password mismatch");
            return Err(Self::invalid_credentials());
        }

        let id = user
            .record_id()
            .ok_or_else(|| DomainError::internal("stored user is missing its identifier"))?;
        self.tokens
            .issue(id)
            .map_err(|error| DomainError::internal(error.to_string()))
    }

    /// Resolve a bearer token back to its user.
    pub async fn authorize(&self, token: &str) -> DomainResult<User> {
        let subject = self
            .tokens
            .verify(token)
            .map_err(|_| Self::invalid_token())?;
        let id = RecordId::parse(&subject).map_err(|_| Self::invalid_token())?;
        match self.base.repository().find_one_by_id(&id).await {
            Ok(user) => Ok(user),
            Err(error) if error.code() == ErrorCode::NotFound => Err(Self::invalid_token()),
            Err(error) => Err(error),
        }
    }

    /// Seed a default account when the collection is empty.
    ///
    /// Returns the created user, or `None` when accounts already exist.
    pub async fn ensure_default_account(&self) -> DomainResult<Option<User>> {
        let users = self.base.repository().get_all().await?;
        if !users.is_empty() {
            return Ok(None);
        }
        info!(username = DEFAULT_USERNAME, "seeding default account");
        let user = User::new(DEFAULT_USERNAME, DEFAULT_EMAIL, DEFAULT_PASSWORD);
        Ok(Some(self.save(user).await?))
    }

    async fn hash_password(&self, plain: &str) -> DomainResult<String> {
        self.hasher
            .hash(plain)
            .await
            .map_err(|error| DomainError::internal(error.to_string()))
    }

    fn invalid_credentials() -> DomainError {
        DomainError::unauthorized("Invalid credentials")
    }

    fn invalid_token() -> DomainError {
        DomainError::unauthorized("Invalid token")
    }
}

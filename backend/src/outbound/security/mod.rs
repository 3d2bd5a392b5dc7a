//! Driven adapters for token issuing and password hashing.

mod jwt;
mod password;

pub use jwt::JwtTokenIssuer;
pub use password::BcryptPasswordHasher;

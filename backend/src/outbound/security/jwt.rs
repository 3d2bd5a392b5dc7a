//! JWT adapter for the token issuer port.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::domain::auth::AccessToken;
use crate::domain::ports::{TokenError, TokenIssuer};
use crate::domain::record_id::RecordId;

/// Registered claims carried by issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user's record identifier in hex form.
    sub: String,
    /// Issued at (seconds since epoch).
    iat: i64,
    /// Expiration time (seconds since epoch).
    exp: i64,
}

/// HS256 token issuer/verifier.
pub struct JwtTokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiry_secs: i64,
}

impl JwtTokenIssuer {
    /// Create an issuer from a shared secret and token lifetime.
    ///
    /// A non-positive lifetime produces already-expired tokens; tests use
    /// that to exercise expiry handling.
    pub fn new(secret: &str, expiry_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiry_secs,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: &RecordId) -> Result<AccessToken, TokenError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_hex(),
            iat: now,
            exp: now + self.expiry_secs,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)
            .map_err(|error| TokenError::signing(error.to_string()))?;
        Ok(AccessToken { token })
    }

    fn verify(&self, token: &str) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|error| {
            match error.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::invalid(error.to_string()),
            }
        })?;
        Ok(data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_tokens_verify_back_to_their_subject() {
        let issuer = JwtTokenIssuer::new("test-secret", 3600);
        let subject = RecordId::generate();
        let token = issuer.issue(&subject).expect("issuable");
        let verified = issuer.verify(&token.token).expect("verifiable");
        assert_eq!(verified, subject.to_hex());
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let issuer = JwtTokenIssuer::new("test-secret", -3600);
        let token = issuer.issue(&RecordId::generate()).expect("issuable");
        let error = issuer.verify(&token.token).expect_err("expired");
        assert_eq!(error, TokenError::Expired);
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let issuer = JwtTokenIssuer::new("test-secret", 3600);
        let forger = JwtTokenIssuer::new("other-secret", 3600);
        let token = forger.issue(&RecordId::generate()).expect("issuable");
        let error = issuer.verify(&token.token).expect_err("bad signature");
        assert!(matches!(error, TokenError::Invalid { .. }));
    }

    #[test]
    fn garbage_is_rejected() {
        let issuer = JwtTokenIssuer::new("test-secret", 3600);
        let error = issuer.verify("not.a.token").expect_err("garbage");
        assert!(matches!(error, TokenError::Invalid { .. }));
    }
}

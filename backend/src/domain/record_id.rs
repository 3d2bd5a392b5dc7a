//! Store-native record identifiers.
//!
//! The document store keys every record with a 24-character lowercase hex
//! string. The internal [`RecordId`] form never reaches API clients; sanitize
//! turns it into the external string field of each entity, and inbound
//! identifiers are parsed back through [`RecordId::parse`] before any lookup
//! so malformed input never reaches the store.

use std::fmt;

use rand::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of hex characters in a record identifier (12 bytes).
pub const RECORD_ID_LEN: usize = 24;

/// Validation error returned when parsing a [`RecordId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordIdError {
    /// The value is not exactly [`RECORD_ID_LEN`] hexadecimal characters.
    #[error("record id must be exactly {RECORD_ID_LEN} hexadecimal characters")]
    InvalidShape,
}

/// Internal identifier assigned by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh identifier from 12 random bytes.
    pub fn generate() -> Self {
        let mut bytes = [0_u8; RECORD_ID_LEN / 2];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    /// Parse an identifier, normalising hex digits to lowercase.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, RecordIdError> {
        let raw = value.as_ref();
        if Self::is_valid(raw) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(RecordIdError::InvalidShape)
        }
    }

    /// Shape gate applied before any identifier is used in a lookup.
    ///
    /// # Examples
    /// ```
    /// use stockyard_backend::domain::RecordId;
    ///
    /// assert!(!RecordId::is_valid("10"));
    /// assert!(RecordId::is_valid("507f1f77bcf86cd799439011"));
    /// ```
    pub fn is_valid(value: &str) -> bool {
        value.len() == RECORD_ID_LEN && value.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The external string form carried in API payloads.
    pub fn to_hex(&self) -> String {
        self.0.clone()
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = RecordIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("10")]
    #[case("507f1f77bcf86cd79943901")] // 23 chars
    #[case("507f1f77bcf86cd7994390111")] // 25 chars
    #[case("507f1f77bcf86cd79943901z")] // non-hex
    fn rejects_malformed_identifiers(#[case] value: &str) {
        assert!(!RecordId::is_valid(value));
        assert_eq!(RecordId::parse(value), Err(RecordIdError::InvalidShape));
    }

    #[rstest]
    #[case("507f1f77bcf86cd799439011")]
    #[case("ABCDEFABCDEFABCDEFABCDEF")]
    fn accepts_24_hex_characters(#[case] value: &str) {
        assert!(RecordId::is_valid(value));
        let id = RecordId::parse(value).expect("valid id");
        assert_eq!(id.as_str(), value.to_ascii_lowercase());
    }

    #[test]
    fn generated_identifiers_are_valid_and_distinct() {
        let first = RecordId::generate();
        let second = RecordId::generate();
        assert!(RecordId::is_valid(first.as_str()));
        assert_ne!(first, second);
    }

    #[test]
    fn serde_round_trips_through_strings() {
        let id = RecordId::generate();
        let encoded = serde_json::to_string(&id).expect("serializable");
        let decoded: RecordId = serde_json::from_str(&encoded).expect("deserializable");
        assert_eq!(decoded, id);
    }
}

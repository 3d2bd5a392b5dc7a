//! User entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entity::Entity;
use crate::domain::record_id::RecordId;
use crate::domain::validation::{Constraint, FieldSpec};

const USERNAME_RULES: &[Constraint] = &[Constraint::Length { min: 3, max: 255 }];
const EMAIL_RULES: &[Constraint] = &[Constraint::Email];
const PASSWORD_RULES: &[Constraint] = &[Constraint::Length { min: 6, max: 255 }];

/// An account that can authenticate against the API.
///
/// The `password` field holds plaintext between input and hashing, and the
/// bcrypt hash once persisted. Sanitization blanks it, so neither form ever
/// serializes into a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip)]
    id: Option<RecordId>,
    /// External identifier, attached during sanitization.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = String, example = "507f1f77bcf86cd799439011")]
    pub user_id: Option<String>,
    /// Login name.
    #[serde(default)]
    pub username: String,
    /// Contact address.
    #[serde(default)]
    pub email_address: String,
    /// Credential; blanked by sanitize and omitted from output when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
}

impl User {
    /// Build a user from its field values.
    pub fn new(
        username: impl Into<String>,
        email_address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email_address: email_address.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// Clone with a different password, leaving the original untouched.
    ///
    /// Used to shape-check a login candidate without mutating the fetched
    /// record.
    #[must_use]
    pub fn with_password(&self, password: impl Into<String>) -> Self {
        let mut clone = self.clone();
        clone.password = password.into();
        clone
    }
}

impl Entity for User {
    const KIND: &'static str = "users";

    fn record_id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    fn set_record_id(&mut self, id: RecordId) {
        self.id = Some(id);
    }

    fn clear_record_id(&mut self) {
        self.id = None;
    }

    fn set_external_id(&mut self, id: String) {
        self.user_id = Some(id);
    }

    fn field_specs(&self) -> Vec<FieldSpec<'_>> {
        vec![
            FieldSpec::text("username", &self.username, USERNAME_RULES),
            FieldSpec::text("emailAddress", &self.email_address, EMAIL_RULES),
            FieldSpec::text("password", &self.password, PASSWORD_RULES),
        ]
    }

    fn sanitize(&mut self) {
        self.password.clear();
        self.sanitize_id();
    }
}

/// Partial field bag accepted from API payloads; only supplied fields are
/// applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    /// External identifier, when updating.
    pub user_id: Option<String>,
    /// Login name.
    pub username: Option<String>,
    /// Contact address.
    pub email_address: Option<String>,
    /// Plaintext credential.
    pub password: Option<String>,
}

impl UserDraft {
    /// Build a user applying only the supplied fields.
    pub fn build(self) -> User {
        let mut user = User::default();
        if let Some(value) = self.user_id {
            user.user_id = Some(value);
        }
        if let Some(value) = self.username {
            user.username = value;
        }
        if let Some(value) = self.email_address {
            user.email_address = value;
        }
        if let Some(value) = self.password {
            user.password = value;
        }
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("ab", "tester@test.com", "hello123", "username")]
    #[case("Tester", "not-an-email", "hello123", "emailAddress")]
    #[case("Tester", "tester@test.com", "short", "password")]
    fn violations_name_the_offending_field(
        #[case] username: &str,
        #[case] email: &str,
        #[case] password: &str,
        #[case] field: &str,
    ) {
        let error = User::new(username, email, password)
            .validate()
            .expect_err("constraint violated");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        let details = error.details().expect("violation details");
        assert_eq!(details["violations"][0]["field"], field);
    }

    #[test]
    fn sanitize_blanks_the_password_and_moves_the_identifier() {
        let mut user = User::new("Tester", "tester@test.com", "$2b$10$abcdefgh");
        let id = RecordId::generate();
        user.set_record_id(id.clone());

        user.sanitize();
        assert!(user.password.is_empty());
        assert!(user.record_id().is_none());
        assert_eq!(user.user_id.as_deref(), Some(id.as_str()));

        let body = serde_json::to_value(&user).expect("serializable");
        assert!(body.get("password").is_none());
        assert!(body.get("id").is_none());
    }

    #[test]
    fn with_password_leaves_the_original_untouched() {
        let user = User::new("Tester", "tester@test.com", "stored-hash");
        let probe = user.with_password("candidate");
        assert_eq!(user.password, "stored-hash");
        assert_eq!(probe.password, "candidate");
        assert_eq!(probe.username, user.username);
    }

    #[test]
    fn draft_applies_only_supplied_fields() {
        let draft = UserDraft {
            username: Some("Tester".to_owned()),
            password: Some("hello123".to_owned()),
            ..UserDraft::default()
        };
        let user = draft.build();
        assert_eq!(user.username, "Tester");
        assert!(user.email_address.is_empty());
    }
}

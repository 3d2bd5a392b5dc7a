//! Inbound HTTP adapters.
//!
//! Handlers are thin: parse the payload, call the service, serialize the
//! sanitized result. Status-code mapping lives in [`error`], token extraction
//! in [`auth`]; the domain never sees HTTP.

pub mod auth;
pub mod error;
pub mod stock_accessories;
pub mod stock_images;
pub mod stock_items;
pub mod templates;
pub mod users;

pub use self::error::{ApiError, ApiResult};

use crate::domain::{DomainError, Entity, RecordId};

/// Reconcile the path identifier with an update payload.
///
/// Rejects a body whose external identifier contradicts the path before any
/// store call, then attaches the parsed store identifier to the entity.
pub(crate) fn attach_path_id<E: Entity>(
    entity: &mut E,
    path_id: &str,
    body_id: Option<&str>,
) -> Result<(), ApiError> {
    if let Some(body_id) = body_id {
        if body_id != path_id {
            return Err(ApiError::from(DomainError::invalid_request(
                "Identifier in the path does not match the request body",
            )));
        }
    }
    let record_id = RecordId::parse(path_id).map_err(|_| {
        ApiError::from(DomainError::invalid_request(
            "Incorrect / invalid parameters supplied",
        ))
    })?;
    entity.set_record_id(record_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Template;

    #[test]
    fn mismatched_body_identifier_is_rejected() {
        let mut template = Template::new("text");
        template.template_id = Some("507f1f77bcf86cd799439011".to_owned());
        let body_id = template.template_id.clone();
        let err = attach_path_id(&mut template, "507f1f77bcf86cd799439012", body_id.as_deref())
            .expect_err("mismatch");
        assert_eq!(err.code(), crate::domain::ErrorCode::InvalidRequest);
        assert!(template.record_id().is_none());
    }

    #[test]
    fn matching_identifier_is_attached() {
        let mut template = Template::new("text");
        template.template_id = Some("507f1f77bcf86cd799439011".to_owned());
        let body_id = template.template_id.clone();
        attach_path_id(&mut template, "507f1f77bcf86cd799439011", body_id.as_deref())
            .expect("match");
        assert_eq!(
            template.record_id().map(RecordId::as_str),
            Some("507f1f77bcf86cd799439011")
        );
    }

    #[test]
    fn malformed_path_identifier_is_rejected() {
        let mut template = Template::new("text");
        let err = attach_path_id(&mut template, "10", None).expect_err("bad path id");
        assert_eq!(err.code(), crate::domain::ErrorCode::InvalidRequest);
    }
}

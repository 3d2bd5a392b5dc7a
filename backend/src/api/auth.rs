//! Bearer-token extraction for protected handlers.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use futures_util::future::LocalBoxFuture;

use crate::api::error::ApiError;
use crate::domain::{DomainError, User};
use crate::server::AppContext;

/// The user resolved from the request's `Authorization: Bearer` header.
///
/// Adding this extractor to a handler makes the route require a valid access
/// token; the token's subject must still resolve to a stored user.
pub struct AuthenticatedUser(pub User);

fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
}

impl FromRequest for AuthenticatedUser {
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, ApiError>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let context = req.app_data::<web::Data<AppContext>>().cloned();
        let token = bearer_token(req);

        Box::pin(async move {
            let context = context.ok_or_else(|| {
                ApiError::from(DomainError::internal("application context not configured"))
            })?;
            let token = token.ok_or_else(|| {
                ApiError::from(DomainError::unauthorized("Missing bearer token"))
            })?;
            let user = context.users.authorize(&token).await?;
            Ok(Self(user))
        })
    }
}

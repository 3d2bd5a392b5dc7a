//! User API handlers.
//!
//! ```text
//! POST /api/users/login {"username":"Tester","password":"hello123"}
//! POST /api/users       registration, open
//! GET/PUT/DELETE        bearer token required
//! ```

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::api::attach_path_id;
use crate::api::auth::AuthenticatedUser;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::{
    AccessToken, DomainError, LoginCredentials, LoginValidationError, User, UserDraft,
};
use crate::server::AppContext;

/// Login request body for `POST /api/users/login`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plaintext credential.
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

fn map_login_validation_error(err: LoginValidationError) -> DomainError {
    match err {
        LoginValidationError::EmptyUsername => DomainError::invalid_request(
            "username must not be empty",
        )
        .with_details(json!({ "field": "username" })),
        LoginValidationError::EmptyPassword => DomainError::invalid_request(
            "password must not be empty",
        )
        .with_details(json!({ "field": "password" })),
    }
}

/// Exchange credentials for an access token.
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Issued token", body = AccessToken),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Invalid credentials", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/users/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<AccessToken>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let token = ctx.users.login(&credentials).await?;
    Ok(web::Json(token))
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserDraft,
    responses(
        (status = 200, description = "Created user", body = User),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "saveUser"
)]
#[post("/users")]
pub async fn save_user(
    ctx: web::Data<AppContext>,
    payload: web::Json<UserDraft>,
) -> ApiResult<web::Json<User>> {
    let user = payload.into_inner().build();
    Ok(web::Json(ctx.users.save(user).await?))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "findAllUsers"
)]
#[get("/users")]
pub async fn find_all_users(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<User>>> {
    Ok(web::Json(ctx.users.find_all().await?))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "External user identifier")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such user", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "findUserById"
)]
#[get("/users/{id}")]
pub async fn find_user_by_id(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    Ok(web::Json(ctx.users.find_one_by_id(&path.into_inner()).await?))
}

/// Replace an existing user.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "External user identifier")),
    request_body = UserDraft,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such user", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UserDraft>,
) -> ApiResult<web::Json<User>> {
    let mut user = payload.into_inner().build();
    let body_id = user.user_id.clone();
    attach_path_id(&mut user, &path.into_inner(), body_id.as_deref())?;
    Ok(web::Json(ctx.users.update(user).await?))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "External user identifier")),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such user", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    Ok(web::Json(ctx.users.delete(&path.into_inner()).await?))
}

//! Template API handlers.

use actix_web::{delete, get, post, put, web};

use crate::api::attach_path_id;
use crate::api::auth::AuthenticatedUser;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::{Template, TemplateDraft};
use crate::server::AppContext;

/// List every template.
#[utoipa::path(
    get,
    path = "/api/templates",
    responses(
        (status = 200, description = "Templates", body = [Template]),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["templates"],
    operation_id = "findAllTemplates"
)]
#[get("/templates")]
pub async fn find_all_templates(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<Template>>> {
    Ok(web::Json(ctx.templates.find_all().await?))
}

/// Fetch one template.
#[utoipa::path(
    get,
    path = "/api/templates/{id}",
    params(("id" = String, Path, description = "External template identifier")),
    responses(
        (status = 200, description = "The template", body = Template),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such template", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["templates"],
    operation_id = "findTemplateById"
)]
#[get("/templates/{id}")]
pub async fn find_template_by_id(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<Template>> {
    Ok(web::Json(
        ctx.templates.find_one_by_id(&path.into_inner()).await?,
    ))
}

/// Create a template.
#[utoipa::path(
    post,
    path = "/api/templates",
    request_body = TemplateDraft,
    responses(
        (status = 200, description = "Created template", body = Template),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["templates"],
    operation_id = "saveTemplate"
)]
#[post("/templates")]
pub async fn save_template(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    payload: web::Json<TemplateDraft>,
) -> ApiResult<web::Json<Template>> {
    let template = payload.into_inner().build();
    Ok(web::Json(ctx.templates.save(template).await?))
}

/// Replace an existing template.
#[utoipa::path(
    put,
    path = "/api/templates/{id}",
    params(("id" = String, Path, description = "External template identifier")),
    request_body = TemplateDraft,
    responses(
        (status = 200, description = "Updated template", body = Template),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such template", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["templates"],
    operation_id = "updateTemplate"
)]
#[put("/templates/{id}")]
pub async fn update_template(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<TemplateDraft>,
) -> ApiResult<web::Json<Template>> {
    let mut template = payload.into_inner().build();
    let body_id = template.template_id.clone();
    attach_path_id(&mut template, &path.into_inner(), body_id.as_deref())?;
    Ok(web::Json(ctx.templates.update(template).await?))
}

/// Delete a template.
#[utoipa::path(
    delete,
    path = "/api/templates/{id}",
    params(("id" = String, Path, description = "External template identifier")),
    responses(
        (status = 200, description = "Deleted template", body = Template),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such template", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["templates"],
    operation_id = "deleteTemplate"
)]
#[delete("/templates/{id}")]
pub async fn delete_template(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<Template>> {
    Ok(web::Json(ctx.templates.delete(&path.into_inner()).await?))
}

//! Stock image API handlers.

use actix_web::{delete, get, post, put, web};

use crate::api::attach_path_id;
use crate::api::auth::AuthenticatedUser;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::{StockImage, StockImageDraft};
use crate::server::AppContext;

/// List every image, payloads base64-encoded.
#[utoipa::path(
    get,
    path = "/api/stock-images",
    responses(
        (status = 200, description = "Images", body = [StockImage]),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-images"],
    operation_id = "findAllStockImages"
)]
#[get("/stock-images")]
pub async fn find_all_stock_images(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<StockImage>>> {
    Ok(web::Json(ctx.stock_images.find_all().await?))
}

/// Fetch one image.
#[utoipa::path(
    get,
    path = "/api/stock-images/{id}",
    params(("id" = String, Path, description = "External image identifier")),
    responses(
        (status = 200, description = "The image", body = StockImage),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such image", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-images"],
    operation_id = "findStockImageById"
)]
#[get("/stock-images/{id}")]
pub async fn find_stock_image_by_id(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<StockImage>> {
    Ok(web::Json(
        ctx.stock_images.find_one_by_id(&path.into_inner()).await?,
    ))
}

/// Store an image. The payload must be non-empty.
#[utoipa::path(
    post,
    path = "/api/stock-images",
    request_body = StockImageDraft,
    responses(
        (status = 200, description = "Stored image", body = StockImage),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-images"],
    operation_id = "saveStockImage"
)]
#[post("/stock-images")]
pub async fn save_stock_image(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    payload: web::Json<StockImageDraft>,
) -> ApiResult<web::Json<StockImage>> {
    let image = payload.into_inner().build();
    Ok(web::Json(ctx.stock_images.save(image).await?))
}

/// Replace an existing image.
#[utoipa::path(
    put,
    path = "/api/stock-images/{id}",
    params(("id" = String, Path, description = "External image identifier")),
    request_body = StockImageDraft,
    responses(
        (status = 200, description = "Updated image", body = StockImage),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such image", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-images"],
    operation_id = "updateStockImage"
)]
#[put("/stock-images/{id}")]
pub async fn update_stock_image(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<StockImageDraft>,
) -> ApiResult<web::Json<StockImage>> {
    let mut image = payload.into_inner().build();
    let body_id = image.stock_image_id.clone();
    attach_path_id(&mut image, &path.into_inner(), body_id.as_deref())?;
    Ok(web::Json(ctx.stock_images.update(image).await?))
}

/// Delete an image.
#[utoipa::path(
    delete,
    path = "/api/stock-images/{id}",
    params(("id" = String, Path, description = "External image identifier")),
    responses(
        (status = 200, description = "Deleted image", body = StockImage),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such image", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-images"],
    operation_id = "deleteStockImage"
)]
#[delete("/stock-images/{id}")]
pub async fn delete_stock_image(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<StockImage>> {
    Ok(web::Json(ctx.stock_images.delete(&path.into_inner()).await?))
}

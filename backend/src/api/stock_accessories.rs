//! Stock accessory API handlers.

use actix_web::{delete, get, post, put, web};

use crate::api::attach_path_id;
use crate::api::auth::AuthenticatedUser;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::{StockAccessory, StockAccessoryDraft};
use crate::server::AppContext;

/// List every accessory.
#[utoipa::path(
    get,
    path = "/api/stock-accessories",
    responses(
        (status = 200, description = "Accessories", body = [StockAccessory]),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-accessories"],
    operation_id = "findAllStockAccessories"
)]
#[get("/stock-accessories")]
pub async fn find_all_stock_accessories(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<StockAccessory>>> {
    Ok(web::Json(ctx.stock_accessories.find_all().await?))
}

/// Fetch one accessory.
#[utoipa::path(
    get,
    path = "/api/stock-accessories/{id}",
    params(("id" = String, Path, description = "External accessory identifier")),
    responses(
        (status = 200, description = "The accessory", body = StockAccessory),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such accessory", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-accessories"],
    operation_id = "findStockAccessoryById"
)]
#[get("/stock-accessories/{id}")]
pub async fn find_stock_accessory_by_id(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<StockAccessory>> {
    Ok(web::Json(
        ctx.stock_accessories
            .find_one_by_id(&path.into_inner())
            .await?,
    ))
}

/// Create an accessory.
#[utoipa::path(
    post,
    path = "/api/stock-accessories",
    request_body = StockAccessoryDraft,
    responses(
        (status = 200, description = "Created accessory", body = StockAccessory),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-accessories"],
    operation_id = "saveStockAccessory"
)]
#[post("/stock-accessories")]
pub async fn save_stock_accessory(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    payload: web::Json<StockAccessoryDraft>,
) -> ApiResult<web::Json<StockAccessory>> {
    let accessory = payload.into_inner().build();
    Ok(web::Json(ctx.stock_accessories.save(accessory).await?))
}

/// Replace an existing accessory.
#[utoipa::path(
    put,
    path = "/api/stock-accessories/{id}",
    params(("id" = String, Path, description = "External accessory identifier")),
    request_body = StockAccessoryDraft,
    responses(
        (status = 200, description = "Updated accessory", body = StockAccessory),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such accessory", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-accessories"],
    operation_id = "updateStockAccessory"
)]
#[put("/stock-accessories/{id}")]
pub async fn update_stock_accessory(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<StockAccessoryDraft>,
) -> ApiResult<web::Json<StockAccessory>> {
    let mut accessory = payload.into_inner().build();
    let body_id = accessory.stock_accessory_id.clone();
    attach_path_id(&mut accessory, &path.into_inner(), body_id.as_deref())?;
    Ok(web::Json(ctx.stock_accessories.update(accessory).await?))
}

/// Delete an accessory.
#[utoipa::path(
    delete,
    path = "/api/stock-accessories/{id}",
    params(("id" = String, Path, description = "External accessory identifier")),
    responses(
        (status = 200, description = "Deleted accessory", body = StockAccessory),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such accessory", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-accessories"],
    operation_id = "deleteStockAccessory"
)]
#[delete("/stock-accessories/{id}")]
pub async fn delete_stock_accessory(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<StockAccessory>> {
    Ok(web::Json(
        ctx.stock_accessories.delete(&path.into_inner()).await?,
    ))
}

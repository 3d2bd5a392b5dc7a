//! Stock item API handlers.

use actix_web::{delete, get, post, put, web};

use crate::api::attach_path_id;
use crate::api::auth::AuthenticatedUser;
use crate::api::error::{ApiError, ApiResult};
use crate::domain::{StockItem, StockItemDraft};
use crate::server::AppContext;

/// List every stock item with accessories and images resolved.
#[utoipa::path(
    get,
    path = "/api/stock-items",
    responses(
        (status = 200, description = "Stock items", body = [StockItem]),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "A referenced accessory or image is missing", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-items"],
    operation_id = "findAllStockItems"
)]
#[get("/stock-items")]
pub async fn find_all_stock_items(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
) -> ApiResult<web::Json<Vec<StockItem>>> {
    Ok(web::Json(ctx.stock_items.find_all().await?))
}

/// Fetch one stock item with accessories and images resolved.
#[utoipa::path(
    get,
    path = "/api/stock-items/{id}",
    params(("id" = String, Path, description = "External stock item identifier")),
    responses(
        (status = 200, description = "The stock item", body = StockItem),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such stock item", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-items"],
    operation_id = "findStockItemById"
)]
#[get("/stock-items/{id}")]
pub async fn find_stock_item_by_id(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<StockItem>> {
    Ok(web::Json(
        ctx.stock_items.find_one_by_id(&path.into_inner()).await?,
    ))
}

/// Create a stock item.
#[utoipa::path(
    post,
    path = "/api/stock-items",
    request_body = StockItemDraft,
    responses(
        (status = 200, description = "Created stock item", body = StockItem),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-items"],
    operation_id = "saveStockItem"
)]
#[post("/stock-items")]
pub async fn save_stock_item(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    payload: web::Json<StockItemDraft>,
) -> ApiResult<web::Json<StockItem>> {
    let item = payload.into_inner().build();
    Ok(web::Json(ctx.stock_items.save(item).await?))
}

/// Replace an existing stock item.
#[utoipa::path(
    put,
    path = "/api/stock-items/{id}",
    params(("id" = String, Path, description = "External stock item identifier")),
    request_body = StockItemDraft,
    responses(
        (status = 200, description = "Updated stock item", body = StockItem),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such stock item", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-items"],
    operation_id = "updateStockItem"
)]
#[put("/stock-items/{id}")]
pub async fn update_stock_item(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<StockItemDraft>,
) -> ApiResult<web::Json<StockItem>> {
    let mut item = payload.into_inner().build();
    let body_id = item.stock_item_id.clone();
    attach_path_id(&mut item, &path.into_inner(), body_id.as_deref())?;
    Ok(web::Json(ctx.stock_items.update(item).await?))
}

/// Delete a stock item. Referenced accessories and images stay behind.
#[utoipa::path(
    delete,
    path = "/api/stock-items/{id}",
    params(("id" = String, Path, description = "External stock item identifier")),
    responses(
        (status = 200, description = "Deleted stock item", body = StockItem),
        (status = 400, description = "Invalid identifier", body = ApiError),
        (status = 401, description = "Unauthorized", body = ApiError),
        (status = 404, description = "No such stock item", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["stock-items"],
    operation_id = "deleteStockItem"
)]
#[delete("/stock-items/{id}")]
pub async fn delete_stock_item(
    ctx: web::Data<AppContext>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> ApiResult<web::Json<StockItem>> {
    Ok(web::Json(ctx.stock_items.delete(&path.into_inner()).await?))
}

//! OpenAPI document assembled from handler annotations.

use utoipa::OpenApi;

use crate::api;
use crate::domain;

/// Public OpenAPI surface, served at `/api/docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stockyard API",
        description = "Dealership stock management backend"
    ),
    paths(
        api::users::login,
        api::users::save_user,
        api::users::find_all_users,
        api::users::find_user_by_id,
        api::users::update_user,
        api::users::delete_user,
        api::stock_items::find_all_stock_items,
        api::stock_items::find_stock_item_by_id,
        api::stock_items::save_stock_item,
        api::stock_items::update_stock_item,
        api::stock_items::delete_stock_item,
        api::stock_accessories::find_all_stock_accessories,
        api::stock_accessories::find_stock_accessory_by_id,
        api::stock_accessories::save_stock_accessory,
        api::stock_accessories::update_stock_accessory,
        api::stock_accessories::delete_stock_accessory,
        api::stock_images::find_all_stock_images,
        api::stock_images::find_stock_image_by_id,
        api::stock_images::save_stock_image,
        api::stock_images::update_stock_image,
        api::stock_images::delete_stock_image,
        api::templates::find_all_templates,
        api::templates::find_template_by_id,
        api::templates::save_template,
        api::templates::update_template,
        api::templates::delete_template,
    ),
    components(schemas(
        api::error::ApiError,
        api::users::LoginRequest,
        domain::auth::AccessToken,
        domain::error::ErrorCode,
        domain::stock_accessory::StockAccessory,
        domain::stock_accessory::StockAccessoryDraft,
        domain::stock_image::ImagePayload,
        domain::stock_image::StockImage,
        domain::stock_image::StockImageDraft,
        domain::stock_item::StockItem,
        domain::stock_item::StockItemDraft,
        domain::template::Template,
        domain::template::TemplateDraft,
        domain::user::User,
        domain::user::UserDraft,
    )),
    tags(
        (name = "users", description = "User accounts and authentication"),
        (name = "stock-items", description = "Vehicles on the floor"),
        (name = "stock-accessories", description = "Accessories referenced by stock items"),
        (name = "stock-images", description = "Vehicle photographs"),
        (name = "templates", description = "Reusable description templates")
    )
)]
pub struct ApiDoc;

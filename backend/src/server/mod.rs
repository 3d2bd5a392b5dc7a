//! Application context and HTTP bootstrap.
//!
//! The context is an explicit object built once at startup and passed to the
//! app factory; nothing hangs off static state. Shutdown is actix's default
//! graceful stop on signal.

mod config;

pub use config::{AppConfig, DEV_JWT_SECRET};

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use utoipa::OpenApi;

use crate::api;
use crate::api::error::ApiError;
use crate::doc::ApiDoc;
use crate::domain::{
    DomainError, EntityService, StockAccessory, StockAccessoryService, StockImage,
    StockImageService, StockItem, StockItemService, Template, TemplateService, User, UserService,
};
use crate::outbound::persistence::{MemoryCollection, MemoryStore};
use crate::outbound::security::{BcryptPasswordHasher, JwtTokenIssuer};

/// Stock item service as wired for the running application.
pub type AppStockItemService = StockItemService<
    MemoryCollection<StockItem>,
    MemoryCollection<StockAccessory>,
    MemoryCollection<StockImage>,
>;
/// Accessory service as wired for the running application.
pub type AppStockAccessoryService = StockAccessoryService<MemoryCollection<StockAccessory>>;
/// Image service as wired for the running application.
pub type AppStockImageService = StockImageService<MemoryCollection<StockImage>>;
/// Template service as wired for the running application.
pub type AppTemplateService = TemplateService<MemoryCollection<Template>>;
/// User service as wired for the running application.
pub type AppUserService =
    UserService<MemoryCollection<User>, JwtTokenIssuer, BcryptPasswordHasher>;

/// Everything handlers need, built once and shared through `web::Data`.
pub struct AppContext {
    /// Stock item orchestration.
    pub stock_items: AppStockItemService,
    /// Accessory CRUD.
    pub stock_accessories: AppStockAccessoryService,
    /// Image CRUD.
    pub stock_images: AppStockImageService,
    /// Template CRUD.
    pub templates: AppTemplateService,
    /// User accounts and authentication.
    pub users: AppUserService,
}

impl AppContext {
    /// Wire the services over one shared store and the configured credential
    /// adapters.
    pub fn new(config: &AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let item_store = Arc::new(store.collection::<StockItem>());
        let accessory_store = Arc::new(store.collection::<StockAccessory>());
        let image_store = Arc::new(store.collection::<StockImage>());
        let template_store = Arc::new(store.collection::<Template>());
        let user_store = Arc::new(store.collection::<User>());

        let tokens = Arc::new(JwtTokenIssuer::new(
            &config.jwt_secret,
            config.jwt_expiry_secs,
        ));
        let hasher = Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost));

        Self {
            stock_items: StockItemService::new(
                item_store,
                Arc::clone(&accessory_store),
                Arc::clone(&image_store),
            ),
            stock_accessories: EntityService::new(accessory_store),
            stock_images: EntityService::new(image_store),
            templates: EntityService::new(template_store),
            users: UserService::new(user_store, tokens, hasher),
        }
    }
}

async fn openapi_document() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

/// Compose the actix application over a prepared context.
pub fn build_app(
    ctx: web::Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::from(DomainError::invalid_request(err.to_string())).into()
    });

    App::new()
        .app_data(ctx)
        .app_data(json_config)
        .service(
            web::scope("/api")
                .service(api::users::login)
                .service(api::users::save_user)
                .service(api::users::find_all_users)
                .service(api::users::find_user_by_id)
                .service(api::users::update_user)
                .service(api::users::delete_user)
                .service(api::stock_items::find_all_stock_items)
                .service(api::stock_items::find_stock_item_by_id)
                .service(api::stock_items::save_stock_item)
                .service(api::stock_items::update_stock_item)
                .service(api::stock_items::delete_stock_item)
                .service(api::stock_accessories::find_all_stock_accessories)
                .service(api::stock_accessories::find_stock_accessory_by_id)
                .service(api::stock_accessories::save_stock_accessory)
                .service(api::stock_accessories::update_stock_accessory)
                .service(api::stock_accessories::delete_stock_accessory)
                .service(api::stock_images::find_all_stock_images)
                .service(api::stock_images::find_stock_image_by_id)
                .service(api::stock_images::save_stock_image)
                .service(api::stock_images::update_stock_image)
                .service(api::stock_images::delete_stock_image)
                .service(api::templates::find_all_templates)
                .service(api::templates::find_template_by_id)
                .service(api::templates::save_template)
                .service(api::templates::update_template)
                .service(api::templates::delete_template)
                .route("/docs/openapi.json", web::get().to(openapi_document)),
        )
}

/// Run the HTTP server until shutdown.
pub async fn run(config: AppConfig) -> std::io::Result<()> {
    if config.jwt_secret == DEV_JWT_SECRET {
        warn!("running with the built-in development token secret");
    }

    let ctx = web::Data::new(AppContext::new(&config));

    if config.seed_default_account {
        match ctx.users.ensure_default_account().await {
            Ok(Some(user)) => info!(username = %user.username, "default account ready"),
            Ok(None) => {}
            Err(error) => warn!(%error, "default account seeding failed"),
        }
    }

    info!(addr = %config.bind_addr, "starting stockyard backend");
    let factory_ctx = ctx.clone();
    HttpServer::new(move || build_app(factory_ctx.clone()))
        .bind(config.bind_addr)?
        .run()
        .await
}

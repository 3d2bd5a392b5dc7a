//! Domain entities, services, and the ports they drive.
//!
//! Everything here is transport agnostic: services accept and return domain
//! values, fail with [`DomainError`], and reach the outside world only
//! through the traits in [`ports`]. Inbound adapters live under `crate::api`,
//! driven adapters under `crate::outbound`.

pub mod auth;
pub mod entity;
pub mod entity_service;
pub mod error;
pub mod ports;
pub mod record_id;
pub mod repository;
pub mod stock_accessory;
pub mod stock_image;
pub mod stock_item;
pub mod stock_item_service;
pub mod template;
pub mod user;
pub mod user_service;
pub mod validation;

pub use self::auth::{AccessToken, LoginCredentials, LoginValidationError};
pub use self::entity::Entity;
pub use self::entity_service::{
    EntityService, StockAccessoryService, StockImageService, TemplateService,
};
pub use self::error::{DomainError, DomainResult, ErrorCode};
pub use self::record_id::{RecordId, RecordIdError};
pub use self::repository::Repository;
pub use self::stock_accessory::{StockAccessory, StockAccessoryDraft};
pub use self::stock_image::{ImagePayload, StockImage, StockImageDraft};
pub use self::stock_item::{StockItem, StockItemDraft};
pub use self::stock_item_service::StockItemService;
pub use self::template::{Template, TemplateDraft};
pub use self::user::{User, UserDraft};
pub use self::user_service::UserService;

//! Generic service orchestration shared by every entity.
//!
//! The service layer converts API-facing identifiers into store identifiers,
//! validates before mutating, sanitizes before returning, and keeps the error
//! taxonomy as the only failure surface. Entities without extra orchestration
//! (accessories, images, templates) use [`EntityService`] directly; stock
//! items and users wrap it.

use std::sync::Arc;

use crate::domain::entity::Entity;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::ports::EntityStore;
use crate::domain::record_id::RecordId;
use crate::domain::repository::Repository;
use crate::domain::stock_accessory::StockAccessory;
use crate::domain::stock_image::StockImage;
use crate::domain::template::Template;

/// Coerce an API-facing identifier into the store's shape.
pub(crate) fn parse_identifier(raw: &str) -> DomainResult<RecordId> {
    RecordId::parse(raw)
        .map_err(|_| DomainError::invalid_request("Incorrect / invalid parameters supplied"))
}

/// Orchestration for one entity type: validate, persist, sanitize.
pub struct EntityService<E, S> {
    repo: Repository<E, S>,
}

impl<E, S> Clone for EntityService<E, S> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<E, S> EntityService<E, S>
where
    E: Entity,
    S: EntityStore<E>,
{
    /// Create a service over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// The underlying repository, for wrapping services.
    pub fn repository(&self) -> &Repository<E, S> {
        &self.repo
    }

    /// Fetch every record, sanitized.
    pub async fn find_all(&self) -> DomainResult<Vec<E>> {
        let mut records = self.repo.get_all().await?;
        for record in &mut records {
            record.sanitize();
        }
        Ok(records)
    }

    /// Fetch one record by its external identifier, sanitized.
    pub async fn find_one_by_id(&self, id: &str) -> DomainResult<E> {
        let record_id = parse_identifier(id)?;
        let mut record = self.repo.find_one_by_id(&record_id).await?;
        record.sanitize();
        Ok(record)
    }

    /// Validate and persist a new record, returning the sanitized result.
    pub async fn save(&self, entity: E) -> DomainResult<E> {
        entity.validate()?;
        let mut saved = self.repo.save(entity).await?;
        saved.sanitize();
        Ok(saved)
    }

    /// Validate and fully replace an existing record.
    ///
    /// The entity must carry its store identifier; handlers attach it from
    /// the request path after the mismatch check.
    pub async fn update(&self, entity: E) -> DomainResult<E> {
        entity.validate()?;
        let id = entity
            .record_id()
            .cloned()
            .ok_or_else(|| DomainError::invalid_request("Incorrect / invalid parameters supplied"))?;
        let mut updated = self.repo.update_one_by_id(&id, entity).await?;
        updated.sanitize();
        Ok(updated)
    }

    /// Delete by external identifier, returning the sanitized pre-deletion
    /// record with its identifier re-attached.
    pub async fn delete(&self, id: &str) -> DomainResult<E> {
        let record_id = parse_identifier(id)?;
        let mut removed = self.repo.delete_one_by_id(&record_id).await?;
        // The store clears the identifier on delete.
        removed.set_record_id(record_id);
        removed.sanitize();
        Ok(removed)
    }
}

/// Accessory CRUD is entirely generic.
pub type StockAccessoryService<S> = EntityService<StockAccessory, S>;

/// Image CRUD is entirely generic; base64 re-encoding lives in the entity's
/// sanitize transform.
pub type StockImageService<S> = EntityService<StockImage, S>;

/// Template CRUD is entirely generic.
pub type TemplateService<S> = EntityService<Template, S>;

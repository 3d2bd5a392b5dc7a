//! Generic repository façade over one document-store collection.
//!
//! One composed type serves every entity; it owns the not-found contract and
//! is the single point where raw store failures are translated into the
//! domain error taxonomy.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::error;

use crate::domain::entity::Entity;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::ports::{EntityStore, Filter, StoreError};
use crate::domain::record_id::RecordId;

/// Uniform CRUD façade over the collection holding `E`.
pub struct Repository<E, S> {
    store: Arc<S>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, S> Clone for Repository<E, S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<E, S> Repository<E, S>
where
    E: Entity,
    S: EntityStore<E>,
{
    /// Wrap a store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// Translate a store failure into the taxonomy: shape rejections become
    /// bad requests, infrastructure failures become internal errors.
    fn translate(failure: StoreError) -> DomainError {
        match failure {
            StoreError::Rejected { message } => DomainError::invalid_request(message),
            StoreError::Connection { message } | StoreError::Query { message } => {
                error!(collection = E::KIND, %message, "document store failure");
                DomainError::internal(message)
            }
        }
    }

    fn missing(id: Option<&RecordId>) -> DomainError {
        match id {
            Some(id) => DomainError::not_found(format!("The requested record was not found: {id}")),
            None => DomainError::not_found("The requested record was not found"),
        }
    }

    /// Return every stored record. No pagination; collections are small.
    pub async fn get_all(&self) -> DomainResult<Vec<E>> {
        self.store.list().await.map_err(Self::translate)
    }

    /// Fetch one record by identifier.
    pub async fn find_one_by_id(&self, id: &RecordId) -> DomainResult<E> {
        self.store
            .find_by_id(id)
            .await
            .map_err(Self::translate)?
            .ok_or_else(|| Self::missing(Some(id)))
    }

    /// Fetch one record by a non-identifier filter.
    pub async fn find_one_by_filter(&self, filter: &Filter) -> DomainResult<E> {
        self.store
            .find_by_filter(filter)
            .await
            .map_err(Self::translate)?
            .ok_or_else(|| Self::missing(None))
    }

    /// Insert or replace; the store assigns an identifier when missing.
    pub async fn save(&self, entity: E) -> DomainResult<E> {
        self.store
            .insert_or_replace(entity)
            .await
            .map_err(Self::translate)
    }

    /// Fully replace the record at `id`, which must already exist.
    pub async fn update_one_by_id(&self, id: &RecordId, mut entity: E) -> DomainResult<E> {
        self.find_one_by_id(id).await?;
        entity.set_record_id(id.clone());
        self.save(entity).await
    }

    /// Remove the record at `id`, returning the pre-deletion document.
    ///
    /// The store clears the identifier on delete; callers re-attach it before
    /// sanitizing.
    pub async fn delete_one_by_id(&self, id: &RecordId) -> DomainResult<E> {
        self.store
            .remove_by_id(id)
            .await
            .map_err(Self::translate)?
            .ok_or_else(|| Self::missing(Some(id)))
    }
}

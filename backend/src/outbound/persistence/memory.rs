//! In-memory document store adapter.
//!
//! Collections are maps of [`RecordId`] to JSON documents; entities are
//! serialized on write and re-hydrated on read with the key re-attached. One
//! store serves every collection, mirroring how the services share a single
//! database handle. Writes of a single document are atomic under the store's
//! lock; nothing coordinates across documents.

use std::collections::{BTreeMap, HashMap};
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::entity::Entity;
use crate::domain::ports::{EntityStore, Filter, StoreError};
use crate::domain::record_id::RecordId;

type Collections = HashMap<&'static str, BTreeMap<RecordId, Value>>;

/// Process-local document store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed handle onto the collection holding `E`.
    pub fn collection<E>(self: &Arc<Self>) -> MemoryCollection<E>
    where
        E: Entity + Serialize + DeserializeOwned,
    {
        MemoryCollection {
            store: Arc::clone(self),
            _entity: PhantomData,
        }
    }
}

/// Typed view over one collection of a [`MemoryStore`].
#[derive(Debug)]
pub struct MemoryCollection<E> {
    store: Arc<MemoryStore>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for MemoryCollection<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<E> MemoryCollection<E>
where
    E: Entity + Serialize + DeserializeOwned,
{
    fn encode(entity: &E) -> Result<Value, StoreError> {
        serde_json::to_value(entity)
            .map_err(|error| StoreError::rejected(format!("unencodable {}: {error}", E::KIND)))
    }

    fn decode(document: Value) -> Result<E, StoreError> {
        // A stored document that no longer decodes is an infrastructure
        // problem, not the caller's.
        serde_json::from_value(document)
            .map_err(|error| StoreError::query(format!("corrupt {} document: {error}", E::KIND)))
    }

    fn matches(document: &Value, filter: &Filter) -> bool {
        filter
            .clauses()
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, Collections>, StoreError> {
        self.store
            .collections
            .read()
            .map_err(|_| StoreError::connection("store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, Collections>, StoreError> {
        self.store
            .collections
            .write()
            .map_err(|_| StoreError::connection("store lock poisoned"))
    }
}

#[async_trait]
impl<E> EntityStore<E> for MemoryCollection<E>
where
    E: Entity + Serialize + DeserializeOwned,
{
    async fn list(&self) -> Result<Vec<E>, StoreError> {
        let documents: Vec<(RecordId, Value)> = {
            let guard = self.read()?;
            guard
                .get(E::KIND)
                .map(|collection| {
                    collection
                        .iter()
                        .map(|(id, document)| (id.clone(), document.clone()))
                        .collect()
                })
                .unwrap_or_default()
        };

        let mut entities = Vec::with_capacity(documents.len());
        for (id, document) in documents {
            let mut entity = Self::decode(document)?;
            entity.set_record_id(id);
            entities.push(entity);
        }
        Ok(entities)
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<E>, StoreError> {
        let document = {
            let guard = self.read()?;
            guard
                .get(E::KIND)
                .and_then(|collection| collection.get(id))
                .cloned()
        };

        document
            .map(|document| {
                let mut entity = Self::decode(document)?;
                entity.set_record_id(id.clone());
                Ok(entity)
            })
            .transpose()
    }

    async fn find_by_filter(&self, filter: &Filter) -> Result<Option<E>, StoreError> {
        let matched = {
            let guard = self.read()?;
            guard.get(E::KIND).and_then(|collection| {
                collection
                    .iter()
                    .find(|(_, document)| Self::matches(document, filter))
                    .map(|(id, document)| (id.clone(), document.clone()))
            })
        };

        matched
            .map(|(id, document)| {
                let mut entity = Self::decode(document)?;
                entity.set_record_id(id);
                Ok(entity)
            })
            .transpose()
    }

    async fn insert_or_replace(&self, mut entity: E) -> Result<E, StoreError> {
        let id = entity
            .record_id()
            .cloned()
            .unwrap_or_else(RecordId::generate);
        // Documents are stored without their key; the internal identifier is
        // not a field of the serialized form.
        let document = Self::encode(&entity)?;

        let mut guard = self.write()?;
        guard
            .entry(E::KIND)
            .or_default()
            .insert(id.clone(), document);
        drop(guard);

        entity.set_record_id(id);
        Ok(entity)
    }

    async fn remove_by_id(&self, id: &RecordId) -> Result<Option<E>, StoreError> {
        let removed = {
            let mut guard = self.write()?;
            guard
                .get_mut(E::KIND)
                .and_then(|collection| collection.remove(id))
        };

        removed.map(Self::decode).transpose()
    }
}

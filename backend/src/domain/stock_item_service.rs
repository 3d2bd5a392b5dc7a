//! Stock item orchestration: CRUD plus relation expansion.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entity::Entity;
use crate::domain::entity_service::{EntityService, parse_identifier};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::ports::EntityStore;
use crate::domain::repository::Repository;
use crate::domain::stock_accessory::StockAccessory;
use crate::domain::stock_image::StockImage;
use crate::domain::stock_item::StockItem;

/// Service for stock items.
///
/// Reads resolve the item's accessory/image identifier lists into fully
/// fetched, sanitized sub-entities before the item itself is sanitized.
/// The store is never asked to join; expansion happens here.
pub struct StockItemService<S, A, I> {
    items: EntityService<StockItem, S>,
    accessories: Repository<StockAccessory, A>,
    images: Repository<StockImage, I>,
}

impl<S, A, I> StockItemService<S, A, I>
where
    S: EntityStore<StockItem>,
    A: EntityStore<StockAccessory>,
    I: EntityStore<StockImage>,
{
    /// Create the service over the three collection handles.
    pub fn new(items: Arc<S>, accessories: Arc<A>, images: Arc<I>) -> Self {
        Self {
            items: EntityService::new(items),
            accessories: Repository::new(accessories),
            images: Repository::new(images),
        }
    }

    async fn expand(&self, item: &mut StockItem) -> DomainResult<()> {
        let mut expanded_accessories = Vec::with_capacity(item.accessories.len());
        for raw in &item.accessories {
            let id = parse_identifier(raw)?;
            let mut accessory = self.accessories.find_one_by_id(&id).await?;
            accessory.sanitize();
            expanded_accessories.push(accessory);
        }

        let mut expanded_images = Vec::with_capacity(item.images.len());
        for raw in &item.images {
            let id = parse_identifier(raw)?;
            let mut image = self.images.find_one_by_id(&id).await?;
            image.sanitize();
            expanded_images.push(image);
        }

        item.stock_accessories = expanded_accessories;
        item.stock_images = expanded_images;
        Ok(())
    }

    /// Fetch every stock item with relations resolved, sanitized.
    pub async fn find_all(&self) -> DomainResult<Vec<StockItem>> {
        let mut items = self.items.repository().get_all().await?;
        for item in &mut items {
            self.expand(item).await?;
            item.sanitize();
        }
        Ok(items)
    }

    /// Fetch one stock item with relations resolved, sanitized.
    pub async fn find_one_by_id(&self, id: &str) -> DomainResult<StockItem> {
        let record_id = parse_identifier(id)?;
        let mut item = self.items.repository().find_one_by_id(&record_id).await?;
        self.expand(&mut item).await?;
        item.sanitize();
        Ok(item)
    }

    /// Validate, stamp timestamps, and persist a new stock item.
    pub async fn save(&self, mut item: StockItem) -> DomainResult<StockItem> {
        item.validate()?;
        let now = Utc::now();
        item.created_at = Some(now);
        item.updated_at = Some(now);
        let mut saved = self.items.repository().save(item).await?;
        saved.sanitize();
        Ok(saved)
    }

    /// Validate and fully replace an existing stock item.
    ///
    /// The replacement keeps the stored `created_at` and takes a fresh
    /// `updated_at`; everything else comes from the supplied entity.
    pub async fn update(&self, mut item: StockItem) -> DomainResult<StockItem> {
        item.validate()?;
        let id = item
            .record_id()
            .cloned()
            .ok_or_else(|| DomainError::invalid_request("Incorrect / invalid parameters supplied"))?;
        let existing = self.items.repository().find_one_by_id(&id).await?;
        item.created_at = existing.created_at;
        item.updated_at = Some(Utc::now());
        let mut updated = self.items.repository().update_one_by_id(&id, item).await?;
        updated.sanitize();
        Ok(updated)
    }

    /// Delete a stock item. Referenced accessories and images are not
    /// cascaded; stale references surface as `NotFound` on later reads.
    pub async fn delete(&self, id: &str) -> DomainResult<StockItem> {
        self.items.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::stock_image::ImagePayload;
    use crate::domain::stock_item::StockItemDraft;
    use crate::outbound::persistence::{MemoryCollection, MemoryStore};

    type TestService = StockItemService<
        MemoryCollection<StockItem>,
        MemoryCollection<StockAccessory>,
        MemoryCollection<StockImage>,
    >;

    struct Fixture {
        service: TestService,
        accessories: EntityService<StockAccessory, MemoryCollection<StockAccessory>>,
        images: EntityService<StockImage, MemoryCollection<StockImage>>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let item_store = Arc::new(store.collection::<StockItem>());
        let accessory_store = Arc::new(store.collection::<StockAccessory>());
        let image_store = Arc::new(store.collection::<StockImage>());
        Fixture {
            service: StockItemService::new(
                item_store,
                Arc::clone(&accessory_store),
                Arc::clone(&image_store),
            ),
            accessories: EntityService::new(accessory_store),
            images: EntityService::new(image_store),
        }
    }

    fn draft() -> StockItemDraft {
        StockItemDraft {
            registration_number: Some("CA 123-456".to_owned()),
            make: Some("Toyota".to_owned()),
            model: Some("Corolla".to_owned()),
            model_year: Some(2019),
            odometer: Some(42_000),
            colour: Some("White".to_owned()),
            vin: Some("JTDBU4EE9A9123456".to_owned()),
            retail_price: Some("R249 900".to_owned()),
            cost_price: Some("R198 000".to_owned()),
            ..StockItemDraft::default()
        }
    }

    #[tokio::test]
    async fn save_stamps_timestamps_and_sanitizes() {
        let fixture = fixture();
        let saved = fixture
            .service
            .save(draft().build())
            .await
            .expect("valid item");
        assert!(saved.created_at.is_some());
        assert_eq!(saved.created_at, saved.updated_at);
        assert_eq!(saved.stock_item_id.as_ref().expect("external id").len(), 24);
    }

    #[tokio::test]
    async fn reads_expand_relations_into_sanitized_children() {
        let fixture = fixture();
        let accessory = fixture
            .accessories
            .save(StockAccessory::new("Tow bar", "Detachable tow bar"))
            .await
            .expect("accessory saved");
        let image = fixture
            .images
            .save(StockImage::new("front.jpg", vec![0xde, 0xad, 0xbe, 0xef]))
            .await
            .expect("image saved");

        let mut item_draft = draft();
        item_draft.accessories = Some(vec![accessory.stock_accessory_id.clone().expect("id")]);
        item_draft.images = Some(vec![image.stock_image_id.clone().expect("id")]);
        let saved = fixture
            .service
            .save(item_draft.build())
            .await
            .expect("item saved");

        let fetched = fixture
            .service
            .find_one_by_id(saved.stock_item_id.as_deref().expect("id"))
            .await
            .expect("fetchable");
        assert_eq!(fetched.stock_accessories.len(), 1);
        assert_eq!(fetched.stock_accessories[0].name, "Tow bar");
        assert_eq!(
            fetched.stock_accessories[0].stock_accessory_id,
            accessory.stock_accessory_id
        );
        assert_eq!(fetched.stock_images.len(), 1);
        assert_eq!(
            fetched.stock_images[0].image,
            ImagePayload::Encoded("3q2+7w==".to_owned())
        );
    }

    #[tokio::test]
    async fn dangling_relation_surfaces_as_not_found() {
        let fixture = fixture();
        let accessory = fixture
            .accessories
            .save(StockAccessory::new("Tow bar", "Detachable tow bar"))
            .await
            .expect("accessory saved");
        let accessory_id = accessory.stock_accessory_id.clone().expect("id");

        let mut item_draft = draft();
        item_draft.accessories = Some(vec![accessory_id.clone()]);
        let saved = fixture
            .service
            .save(item_draft.build())
            .await
            .expect("item saved");

        fixture
            .accessories
            .delete(&accessory_id)
            .await
            .expect("accessory deleted");

        let error = fixture
            .service
            .find_one_by_id(saved.stock_item_id.as_deref().expect("id"))
            .await
            .expect_err("stale reference");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_restamps_updated_at() {
        let fixture = fixture();
        let saved = fixture
            .service
            .save(draft().build())
            .await
            .expect("item saved");
        let id = saved.stock_item_id.clone().expect("external id");
        let created_at = saved.created_at.expect("stamped");

        let mut replacement = draft().build();
        replacement.colour = "Silver".to_owned();
        replacement.set_record_id(
            crate::domain::RecordId::parse(&id).expect("saved id is store-shaped"),
        );
        let updated = fixture
            .service
            .update(replacement)
            .await
            .expect("update succeeds");

        assert_eq!(updated.colour, "Silver");
        assert_eq!(updated.created_at, Some(created_at));
        assert!(updated.updated_at.expect("restamped") >= created_at);
    }

    #[tokio::test]
    async fn update_of_missing_item_is_not_found() {
        let fixture = fixture();
        let mut item = draft().build();
        item.set_record_id(crate::domain::RecordId::generate());
        let error = fixture.service.update(item).await.expect_err("no record");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}

use std::sync::Arc;
use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::items::domain::{Item, ItemId, ItemInput, ItemPatch};
use crate::items::repository::ItemRepository;
use crate::storage::map_store::MapStore;

/// In-memory item store. Contents live as long as the process.
#[derive(Default)]
pub struct ItemStore {
    store: MapStore<Item>,
}

impl ItemStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// List all items in insertion order.
    pub async fn list(&self) -> Vec<Item> {
        self.store.list().await
    }

    pub async fn get(&self, id: ItemId) -> Result<Item, ServiceError> {
        self.store.get(id).await.ok_or_else(|| ServiceError::item_not_found(id))
    }

    /// Validate, assign the next id and insert.
    pub async fn create(&self, input: ItemInput) -> Result<Item, ServiceError> {
        if let Err(e) = input.validate() {
            warn!(name = %input.name, price = input.price, error = %e, "item create rejected");
            return Err(e);
        }
        let item = self.store.insert_with(|id| input.into_item(id)).await;
        info!(item_id = item.id, name = %item.name, "item created");
        Ok(item)
    }

    /// Merge the fields present in `patch`. Unknown ids fail before validation.
    pub async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, ServiceError> {
        let updated = self
            .store
            .update_with(id, |item| {
                patch.validate()?;
                patch.apply(item);
                Ok(())
            })
            .await;
        match updated {
            Ok(Some(item)) => {
                info!(item_id = id, "item updated");
                Ok(item)
            }
            Ok(None) => Err(ServiceError::item_not_found(id)),
            Err(e) => {
                warn!(item_id = id, error = %e, "item update rejected");
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: ItemId) -> Result<(), ServiceError> {
        match self.store.remove(id).await {
            Some(item) => {
                info!(item_id = id, name = %item.name, "item deleted");
                Ok(())
            }
            None => Err(ServiceError::item_not_found(id)),
        }
    }
}

#[async_trait::async_trait]
impl ItemRepository for ItemStore {
    async fn list(&self) -> Vec<Item> { self.list().await }
    async fn get(&self, id: ItemId) -> Result<Item, ServiceError> { self.get(id).await }
    async fn create(&self, input: ItemInput) -> Result<Item, ServiceError> { self.create(input).await }
    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, ServiceError> { self.update(id, patch).await }
    async fn delete(&self, id: ItemId) -> Result<(), ServiceError> { self.delete(id).await }
}

use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::items::domain::{Item, ItemId, ItemInput, ItemPatch};

/// Trait abstraction for item storage (CRUD of item records).
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn list(&self) -> Vec<Item>;
    async fn get(&self, id: ItemId) -> Result<Item, ServiceError>;
    async fn create(&self, input: ItemInput) -> Result<Item, ServiceError>;
    async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, ServiceError>;
    async fn delete(&self, id: ItemId) -> Result<(), ServiceError>;
}

//! Item records and the store that owns them.

pub mod domain;
pub mod patch;
pub mod repository;
pub mod store;

pub use domain::{Item, ItemId, ItemInput, ItemPatch};
pub use patch::Patch;
pub use repository::ItemRepository;
pub use store::ItemStore;

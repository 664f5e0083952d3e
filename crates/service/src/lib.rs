//! Service layer for item management.
//! - `items` holds the domain model, validation and the in-memory store.
//! - `storage` provides the id-keyed map the store is built on.
//! - Errors are reported through [`errors::ServiceError`].

pub mod errors;
pub mod items;
pub mod storage;

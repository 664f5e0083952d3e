//! Storage abstractions for service layer
//!
//! In-memory maps keyed by store-assigned integer ids.

pub mod map_store;

use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

struct Entries<V> {
    next_id: u64,
    map: BTreeMap<u64, V>,
}

/// Generic in-memory map keyed by store-assigned ids.
///
/// Ids start at 1 and only ever grow, so iteration order is insertion order.
/// The counter and the map share one lock: assigning an id and inserting the
/// value happen under the same write guard.
pub struct MapStore<V> {
    inner: RwLock<Entries<V>>,
}

impl<V> Default for MapStore<V> {
    fn default() -> Self {
        Self { inner: RwLock::new(Entries { next_id: 1, map: BTreeMap::new() }) }
    }
}

impl<V: Clone> MapStore<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all values in ascending id order.
    pub async fn list(&self) -> Vec<V> {
        let entries = self.inner.read().await;
        entries.map.values().cloned().collect()
    }

    /// Get value by id.
    pub async fn get(&self, id: u64) -> Option<V> {
        let entries = self.inner.read().await;
        entries.map.get(&id).cloned()
    }

    /// Assign the next id, build the value from it and insert it.
    pub async fn insert_with<F>(&self, build: F) -> V
    where
        F: FnOnce(u64) -> V,
    {
        let mut entries = self.inner.write().await;
        let id = entries.next_id;
        entries.next_id += 1;
        let value = build(id);
        entries.map.insert(id, value.clone());
        value
    }

    /// Apply a fallible mutation to one entry under the write lock.
    ///
    /// Returns `Ok(None)` when the id is absent. When `f` fails the entry is
    /// left exactly as it was.
    pub async fn update_with<F>(&self, id: u64, f: F) -> Result<Option<V>, ServiceError>
    where
        F: FnOnce(&mut V) -> Result<(), ServiceError>,
    {
        let mut entries = self.inner.write().await;
        let Some(existing) = entries.map.get_mut(&id) else {
            return Ok(None);
        };
        let mut draft = existing.clone();
        f(&mut draft)?;
        *existing = draft.clone();
        Ok(Some(draft))
    }

    /// Remove an id; returns the removed value if it existed.
    pub async fn remove(&self, id: u64) -> Option<V> {
        let mut entries = self.inner.write().await;
        entries.map.remove(&id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

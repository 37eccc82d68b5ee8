use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::errors::ServiceError;
use crate::item::model::{Item, ItemInput};

/// In-memory owner of the item collection.
///
/// A single `RwLock` guards both the collection and the id sequence:
/// mutations take the write half, so check-then-write sequences are atomic
/// and concurrent creates can never issue duplicate ids; reads take the read
/// half and never observe a partially-applied mutation. Nothing blocks under
/// the lock besides memory work. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<StoreState>>,
}

#[derive(Default)]
struct StoreState {
    /// Insertion-ordered collection; at most one item per id.
    items: Vec<Item>,
    /// Monotonic id sequence. Never decremented, never reused after delete.
    next_id: u64,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in insertion order. Empty store yields an empty vec.
    pub async fn list(&self) -> Vec<Item> {
        let state = self.inner.read().await;
        state.items.clone()
    }

    /// The item with the given id, if present. Never mutates.
    pub async fn get(&self, id: &str) -> Option<Item> {
        let state = self.inner.read().await;
        state.items.iter().find(|item| item.id == id).cloned()
    }

    /// Validate, then append a new item with a freshly issued id and a
    /// server-side `createdAt`. Validation failures leave the store untouched.
    pub async fn create(&self, input: ItemInput) -> Result<Item, ServiceError> {
        input.validate()?;
        let mut state = self.inner.write().await;
        state.next_id += 1;
        let id = state.next_id.to_string();
        // A freshly issued id colliding with a live item is a defect, not a
        // client error.
        assert!(
            state.items.iter().all(|item| item.id != id),
            "duplicate item id issued: {id}"
        );
        let item = Item {
            id,
            name: input.name,
            description: input.description,
            created_at: Utc::now(),
        };
        state.items.push(item.clone());
        debug!(id = %item.id, "item created");
        Ok(item)
    }

    /// Replace `name` and `description` in place, preserving `id` and
    /// `createdAt`. Input is validated exactly as on create, and before the
    /// existence check, so an invalid body never reports not-found.
    pub async fn update(&self, id: &str, input: ItemInput) -> Result<Item, ServiceError> {
        input.validate()?;
        let mut state = self.inner.write().await;
        let item = state
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| ServiceError::not_found("Item"))?;
        item.name = input.name;
        item.description = input.description;
        debug!(id = %item.id, "item updated");
        Ok(item.clone())
    }

    /// Remove the item with the given id. Remaining items keep their ids and
    /// order.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        let mut state = self.inner.write().await;
        let pos = state
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| ServiceError::not_found("Item"))?;
        state.items.remove(pos);
        debug!(%id, "item deleted");
        Ok(())
    }
}

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};
use wardrobe_types::{ClothingItem, ClothingItemPatch, ItemId, NewClothingItem};

use crate::error::{StoreError, StoreResult};
use crate::file::JsonFileDocument;
use crate::memory::InMemoryDocument;
use crate::traits::Document;

/// Active records in document order, with their count.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActiveItems {
    pub items: Vec<ClothingItem>,
    pub count: usize,
}

/// CRUD with soft delete over a single item document.
///
/// Every operation is one load, mutate, save cycle over the whole
/// collection. The cycle runs under a store-wide lock, so two operations on
/// the same `RecordStore` never interleave and no update is lost. Records
/// are never physically removed.
pub struct RecordStore<D: Document> {
    document: D,
    cycle: Mutex<()>,
}

impl RecordStore<JsonFileDocument> {
    /// Store backed by a JSON file at `path`.
    pub fn open_file(path: impl Into<PathBuf>) -> Self {
        Self::new(JsonFileDocument::new(path))
    }
}

impl RecordStore<InMemoryDocument> {
    /// Store backed by an empty in-memory document.
    pub fn in_memory() -> Self {
        Self::new(InMemoryDocument::new())
    }
}

impl<D: Document> RecordStore<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            cycle: Mutex::new(()),
        }
    }

    /// The underlying document.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// All active records in document order, paired with their count.
    pub fn list_active(&self) -> StoreResult<ActiveItems> {
        let _guard = self.lock();
        let items: Vec<ClothingItem> = self
            .document
            .load()?
            .into_iter()
            .filter(ClothingItem::is_active)
            .collect();
        let count = items.len();
        debug!(count, "listed active items");
        Ok(ActiveItems { items, count })
    }

    /// The active record with `id`. Missing and soft-deleted records are
    /// both `NotFound`.
    pub fn get_active(&self, id: &ItemId) -> StoreResult<ClothingItem> {
        let _guard = self.lock();
        self.document
            .load()?
            .into_iter()
            .find(|item| item.id() == *id)
            .filter(ClothingItem::is_active)
            .ok_or(StoreError::NotFound(*id))
    }

    /// Append a new active record with a freshly generated id.
    pub fn create(&self, fields: NewClothingItem) -> StoreResult<ClothingItem> {
        let _guard = self.lock();
        let mut items = self.document.load()?;

        let taken: HashSet<ItemId> = items.iter().map(ClothingItem::id).collect();
        let id = loop {
            let candidate = ItemId::new();
            if !taken.contains(&candidate) {
                break candidate;
            }
            warn!(%candidate, "generated item id collided; regenerating");
        };

        let item = ClothingItem::create(id, fields);
        items.push(item.clone());
        self.document.save(&items)?;

        info!(%id, category = %item.category, "clothing item created");
        Ok(item)
    }

    /// Replace the record with `id` by its merge with `patch`, in place.
    ///
    /// `NotFound` if no record has `id`; `Rejected` if it is soft-deleted, in
    /// which case nothing is written.
    pub fn update(&self, id: &ItemId, patch: &ClothingItemPatch) -> StoreResult<ClothingItem> {
        let _guard = self.lock();
        let mut items = self.document.load()?;
        let index = position(&items, id)?;

        let existing = &items[index];
        if !existing.is_active() {
            return Err(StoreError::Rejected {
                id: *id,
                reason: "item is deleted".to_string(),
            });
        }

        let updated = existing.merged(patch);
        items[index] = updated.clone();
        self.document.save(&items)?;

        info!(%id, "clothing item updated");
        Ok(updated)
    }

    /// Mark the record with `id` deleted at the current time.
    ///
    /// `NotFound` if no record has `id`; `Rejected` if it is already deleted.
    pub fn soft_delete(&self, id: &ItemId) -> StoreResult<()> {
        let _guard = self.lock();
        let mut items = self.document.load()?;
        let index = position(&items, id)?;

        let existing = &items[index];
        if !existing.is_active() {
            return Err(StoreError::Rejected {
                id: *id,
                reason: "item is already deleted".to_string(),
            });
        }

        let deleted = existing.soft_deleted(Utc::now());
        items[index] = deleted;
        self.document.save(&items)?;

        info!(%id, "clothing item soft-deleted");
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        self.cycle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn position(items: &[ClothingItem], id: &ItemId) -> StoreResult<usize> {
    items
        .iter()
        .position(|item| item.id() == *id)
        .ok_or(StoreError::NotFound(*id))
}

impl<D: Document> std::fmt::Debug for RecordStore<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordStore")
            .field("document", &self.document.describe())
            .finish()
    }
}

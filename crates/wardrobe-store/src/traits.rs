use std::sync::Arc;

use wardrobe_types::ClothingItem;

use crate::error::StoreResult;

/// The medium holding the serialized item collection.
///
/// All implementations must satisfy these invariants:
/// - `load` returns the whole collection in document order, or an error.
///   There is no partial read.
/// - `save` replaces the whole collection. A concurrent `load` observes
///   either the old collection or the new one, never a mix.
/// - Decoding failures are `CorruptDocument`; medium failures are
///   `StorageUnavailable`. Neither is retried here.
pub trait Document: Send + Sync {
    /// Read and decode the entire collection.
    fn load(&self) -> StoreResult<Vec<ClothingItem>>;

    /// Encode and overwrite the entire collection.
    fn save(&self, items: &[ClothingItem]) -> StoreResult<()>;

    /// Human-readable location of the document, for logs.
    fn describe(&self) -> String;
}

impl<T: Document + ?Sized> Document for Box<T> {
    fn load(&self) -> StoreResult<Vec<ClothingItem>> {
        (**self).load()
    }

    fn save(&self, items: &[ClothingItem]) -> StoreResult<()> {
        (**self).save(items)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: Document + ?Sized> Document for Arc<T> {
    fn load(&self) -> StoreResult<Vec<ClothingItem>> {
        (**self).load()
    }

    fn save(&self, items: &[ClothingItem]) -> StoreResult<()> {
        (**self).save(items)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

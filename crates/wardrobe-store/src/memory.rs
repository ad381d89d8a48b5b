use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use wardrobe_types::ClothingItem;

use crate::codec;
use crate::error::StoreResult;
use crate::traits::Document;

/// In-memory document holding the encoded collection bytes.
///
/// Intended for tests and embedding. The bytes go through the same codec as
/// the file backend, so raw (possibly corrupt) content can be injected with
/// [`InMemoryDocument::from_bytes`] or [`InMemoryDocument::set_raw`].
pub struct InMemoryDocument {
    bytes: RwLock<Vec<u8>>,
    read_only: AtomicBool,
}

impl InMemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::from_bytes(b"[]".to_vec())
    }

    /// Create a document from raw encoded bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes: RwLock::new(bytes),
            read_only: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current encoded bytes.
    pub fn raw(&self) -> Vec<u8> {
        self.bytes.read().expect("lock poisoned").clone()
    }

    /// Replace the encoded bytes without going through the codec.
    pub fn set_raw(&self, bytes: Vec<u8>) {
        *self.bytes.write().expect("lock poisoned") = bytes;
    }

    /// When set, every `save` fails with `StorageUnavailable`.
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for InMemoryDocument {
    fn load(&self) -> StoreResult<Vec<ClothingItem>> {
        let bytes = self.bytes.read().expect("lock poisoned");
        codec::decode(&bytes)
    }

    fn save(&self, items: &[ClothingItem]) -> StoreResult<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "document is read-only").into());
        }
        let encoded = codec::encode(items)?;
        *self.bytes.write().expect("lock poisoned") = encoded;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

impl std::fmt::Debug for InMemoryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.bytes.read().expect("lock poisoned").len();
        f.debug_struct("InMemoryDocument")
            .field("byte_len", &size)
            .field("read_only", &self.read_only.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use chrono::{TimeZone, Utc};
    use wardrobe_types::{ClothingCategory, ItemId, NewClothingItem};

    fn make_item() -> ClothingItem {
        ClothingItem::create(
            ItemId::new(),
            NewClothingItem {
                category: ClothingCategory::Accessories,
                colour: "gold".into(),
                user_id: "user-2".into(),
                brand: "Shiny".into(),
                size: "one".into(),
                image_url: "https://img.example.com/ring.png".into(),
                purchase_date: Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
                purchase_price: 120.0,
            },
        )
    }

    #[test]
    fn new_document_is_empty() {
        let doc = InMemoryDocument::new();
        assert!(doc.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load() {
        let doc = InMemoryDocument::new();
        let items = vec![make_item(), make_item()];
        doc.save(&items).unwrap();
        assert_eq!(doc.load().unwrap(), items);
    }

    #[test]
    fn load_save_load_is_stable() {
        let doc = InMemoryDocument::new();
        doc.save(&[make_item()]).unwrap();
        let first = doc.load().unwrap();
        doc.save(&first).unwrap();
        assert_eq!(doc.load().unwrap(), first);
    }

    #[test]
    fn corrupt_bytes_fail_to_load() {
        let doc = InMemoryDocument::from_bytes(b"[{\"id\": 7}]".to_vec());
        assert!(matches!(doc.load(), Err(StoreError::CorruptDocument(_))));
    }

    #[test]
    fn read_only_rejects_save_and_keeps_content() {
        let doc = InMemoryDocument::new();
        doc.save(&[make_item()]).unwrap();
        let before = doc.raw();

        doc.set_read_only(true);
        let err = doc.save(&[]).unwrap_err();
        assert!(matches!(err, StoreError::StorageUnavailable(_)));
        assert_eq!(doc.raw(), before);

        doc.set_read_only(false);
        doc.save(&[]).unwrap();
        assert!(doc.load().unwrap().is_empty());
    }

    #[test]
    fn debug_format() {
        let doc = InMemoryDocument::new();
        let debug = format!("{doc:?}");
        assert!(debug.contains("InMemoryDocument"));
        assert!(debug.contains("byte_len"));
    }
}

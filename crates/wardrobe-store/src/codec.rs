//! JSON encoding of the item document.
//!
//! On-disk format: a pretty-printed JSON array, one object per record, in
//! document order:
//! ```text
//! [
//!   {
//!     "id": "<uuid>",
//!     "category": "tops",
//!     ...
//!     "purchase_date": "2024-03-01T12:00:00Z",
//!     "purchase_price": 25.0,
//!     "deleted_at": null
//!   }
//! ]
//! ```

use wardrobe_types::ClothingItem;

use crate::error::{StoreError, StoreResult};

/// Decode a full document. Empty or whitespace-only input is an empty
/// collection.
pub fn decode(bytes: &[u8]) -> StoreResult<Vec<ClothingItem>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(bytes).map_err(|e| StoreError::CorruptDocument(e.to_string()))
}

/// Encode a full collection.
///
/// JSON has no representation for non-finite numbers, so a record with a
/// non-finite price is `Unencodable` and nothing is produced.
pub fn encode(items: &[ClothingItem]) -> StoreResult<Vec<u8>> {
    if let Some(bad) = items.iter().find(|item| !item.purchase_price.is_finite()) {
        return Err(StoreError::Unencodable {
            id: bad.id(),
            reason: format!("purchase_price {} is not finite", bad.purchase_price),
        });
    }
    let mut bytes = serde_json::to_vec_pretty(items)
        .map_err(|e| StoreError::CorruptDocument(e.to_string()))?;
    bytes.push(b'\n');
    Ok(bytes)
}

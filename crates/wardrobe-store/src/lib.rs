//! Single-document record store for clothing items.
//!
//! The whole item collection lives in one serialized JSON document. Every
//! operation loads the full document, applies its change in memory, and
//! writes the full document back. On top of that cycle the store enforces
//! the item lifecycle: identity is assigned once, updates merge only the
//! supplied fields, and deletion is a one-way soft delete.
//!
//! # Backends
//!
//! All backends implement the [`Document`] trait:
//!
//! - [`JsonFileDocument`] -- a JSON file, replaced atomically on save
//! - [`InMemoryDocument`] -- encoded bytes in memory, for tests and embedding
//!
//! # Design Rules
//!
//! 1. Records are never physically removed; deletion sets `deleted_at`.
//! 2. Soft-deleted records are invisible to listing and lookup.
//! 3. Update and delete on a soft-deleted record are `Rejected`, not `NotFound`.
//! 4. The load, mutate, save cycle is serialized per store.
//! 5. All I/O and decode errors are propagated, never retried.

pub mod codec;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use file::JsonFileDocument;
pub use memory::InMemoryDocument;
pub use store::{ActiveItems, RecordStore};
pub use traits::Document;

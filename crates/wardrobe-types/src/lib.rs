//! Entity model for the wardrobe service.
//!
//! This crate provides the single resource type managed by the service, a
//! clothing item owned by a user, together with the value types used to
//! create and partially update it. Every other wardrobe crate depends on
//! `wardrobe-types`.
//!
//! # Key Types
//!
//! - [`ItemId`] -- Random (UUID v4) identifier assigned once at creation
//! - [`ClothingCategory`] -- Closed set of garment categories
//! - [`ClothingItem`] -- A stored record, active or soft-deleted
//! - [`NewClothingItem`] -- Caller-supplied fields for a create
//! - [`ClothingItemPatch`] -- Caller-supplied fields for a partial update

pub mod category;
pub mod error;
pub mod id;
pub mod item;

pub use category::ClothingCategory;
pub use error::TypeError;
pub use id::ItemId;
pub use item::{ClothingItem, ClothingItemPatch, NewClothingItem};

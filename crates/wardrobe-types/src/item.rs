use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::ClothingCategory;
use crate::id::ItemId;

/// A stored clothing item.
///
/// `id` and `deleted_at` are private: the id is fixed at creation and the
/// deletion timestamp only moves from `None` to `Some` through
/// [`ClothingItem::soft_deleted`]. Every other attribute is plain data.
/// Changes never mutate a record in place; [`ClothingItem::merged`] and
/// [`ClothingItem::soft_deleted`] build the replacement value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    id: ItemId,
    pub category: ClothingCategory,
    pub colour: String,
    pub user_id: String,
    pub brand: String,
    pub size: String,
    pub image_url: String,
    pub purchase_date: DateTime<Utc>,
    pub purchase_price: f64,
    #[serde(default)]
    deleted_at: Option<DateTime<Utc>>,
}

impl ClothingItem {
    /// Build a fresh, active record from caller-supplied fields.
    pub fn create(id: ItemId, fields: NewClothingItem) -> Self {
        Self {
            id,
            category: fields.category,
            colour: fields.colour,
            user_id: fields.user_id,
            brand: fields.brand,
            size: fields.size,
            image_url: fields.image_url,
            purchase_date: fields.purchase_date,
            purchase_price: fields.purchase_price,
            deleted_at: None,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// When the record was soft-deleted, or `None` while it is active.
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    /// Returns `true` if the record has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// The replacement record for a partial update.
    ///
    /// Fields present in `patch` override; all others, plus `id` and
    /// `deleted_at`, are carried over unchanged.
    pub fn merged(&self, patch: &ClothingItemPatch) -> Self {
        Self {
            id: self.id,
            category: patch.category.unwrap_or(self.category),
            colour: patch.colour.clone().unwrap_or_else(|| self.colour.clone()),
            user_id: patch.user_id.clone().unwrap_or_else(|| self.user_id.clone()),
            brand: patch.brand.clone().unwrap_or_else(|| self.brand.clone()),
            size: patch.size.clone().unwrap_or_else(|| self.size.clone()),
            image_url: patch
                .image_url
                .clone()
                .unwrap_or_else(|| self.image_url.clone()),
            purchase_date: patch.purchase_date.unwrap_or(self.purchase_date),
            purchase_price: patch.purchase_price.unwrap_or(self.purchase_price),
            deleted_at: self.deleted_at,
        }
    }

    /// The replacement record marking this one deleted at `at`.
    ///
    /// An already-deleted record keeps its original timestamp; callers decide
    /// whether a repeat delete is an error.
    pub fn soft_deleted(&self, at: DateTime<Utc>) -> Self {
        Self {
            deleted_at: Some(self.deleted_at.unwrap_or(at)),
            ..self.clone()
        }
    }
}

/// Fields supplied by a caller to create an item.
///
/// There is no `id` or `deleted_at` here: identity and deletion state are
/// always assigned by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewClothingItem {
    pub category: ClothingCategory,
    pub colour: String,
    pub user_id: String,
    pub brand: String,
    pub size: String,
    pub image_url: String,
    pub purchase_date: DateTime<Utc>,
    pub purchase_price: f64,
}

/// A partial update: each `Some` field replaces the stored value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClothingItemPatch {
    pub category: Option<ClothingCategory>,
    pub colour: Option<String>,
    pub user_id: Option<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub image_url: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_price: Option<f64>,
}

impl ClothingItemPatch {
    /// Returns `true` if no field is present.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.colour.is_none()
            && self.user_id.is_none()
            && self.brand.is_none()
            && self.size.is_none()
            && self.image_url.is_none()
            && self.purchase_date.is_none()
            && self.purchase_price.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn sample_fields() -> NewClothingItem {
        NewClothingItem {
            category: ClothingCategory::Tops,
            colour: "blue".into(),
            user_id: "user-1".into(),
            brand: "Acme".into(),
            size: "M".into(),
            image_url: "https://img.example.com/shirt.png".into(),
            purchase_date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            purchase_price: 25.0,
        }
    }

    #[test]
    fn create_is_active() {
        let id = ItemId::new();
        let item = ClothingItem::create(id, sample_fields());
        assert_eq!(item.id(), id);
        assert!(item.is_active());
        assert!(item.deleted_at().is_none());
        assert_eq!(item.brand, "Acme");
    }

    #[test]
    fn empty_patch_is_identity() {
        let item = ClothingItem::create(ItemId::new(), sample_fields());
        let patch = ClothingItemPatch::default();
        assert!(patch.is_empty());
        assert_eq!(item.merged(&patch), item);
    }

    #[test]
    fn patch_overrides_only_present_fields() {
        let item = ClothingItem::create(ItemId::new(), sample_fields());
        let patch = ClothingItemPatch {
            colour: Some("red".into()),
            purchase_price: Some(30.5),
            ..Default::default()
        };
        assert!(!patch.is_empty());

        let merged = item.merged(&patch);
        assert_eq!(merged.colour, "red");
        assert_eq!(merged.purchase_price, 30.5);
        assert_eq!(merged.brand, item.brand);
        assert_eq!(merged.size, item.size);
        assert_eq!(merged.category, item.category);
        assert_eq!(merged.id(), item.id());
    }

    #[test]
    fn merge_keeps_deletion_state() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let deleted = ClothingItem::create(ItemId::new(), sample_fields()).soft_deleted(at);
        let merged = deleted.merged(&ClothingItemPatch {
            brand: Some("Other".into()),
            ..Default::default()
        });
        assert_eq!(merged.deleted_at(), Some(at));
    }

    #[test]
    fn soft_delete_sets_timestamp_once() {
        let first = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let second = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let item = ClothingItem::create(ItemId::new(), sample_fields());

        let deleted = item.soft_deleted(first);
        assert!(!deleted.is_active());
        assert_eq!(deleted.deleted_at(), Some(first));

        let again = deleted.soft_deleted(second);
        assert_eq!(again.deleted_at(), Some(first));
    }

    #[test]
    fn deserialize_treats_missing_deleted_at_as_active() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "category": "shoes",
            "colour": "black",
            "user_id": "u",
            "brand": "b",
            "size": "42",
            "image_url": "https://x.test/a.png",
            "purchase_date": "2024-01-02T03:04:05Z",
            "purchase_price": 80
        }"#;
        let item: ClothingItem = serde_json::from_str(json).unwrap();
        assert!(item.is_active());
        assert_eq!(item.category, ClothingCategory::Shoes);
        assert_eq!(item.purchase_price, 80.0);
    }

    #[test]
    fn serialize_writes_null_deleted_at() {
        let item = ClothingItem::create(ItemId::new(), sample_fields());
        let value = serde_json::to_value(&item).unwrap();
        assert!(value["deleted_at"].is_null());
        assert_eq!(value["category"], "tops");
    }

    fn category_strategy() -> impl Strategy<Value = ClothingCategory> {
        prop::sample::select(ClothingCategory::ALL.to_vec())
    }

    fn patch_strategy() -> impl Strategy<Value = ClothingItemPatch> {
        (
            prop::option::of(category_strategy()),
            prop::option::of("[a-z]{1,8}"),
            prop::option::of("[a-z0-9-]{1,12}"),
            prop::option::of("[A-Za-z]{1,10}"),
            prop::option::of("[A-Z0-9]{1,3}"),
            prop::option::of(0.0f64..10_000.0),
        )
            .prop_map(|(category, colour, user_id, brand, size, purchase_price)| {
                ClothingItemPatch {
                    category,
                    colour,
                    user_id,
                    brand,
                    size,
                    purchase_price,
                    ..Default::default()
                }
            })
    }

    proptest! {
        #[test]
        fn merge_overrides_present_and_keeps_absent(patch in patch_strategy()) {
            let item = ClothingItem::create(ItemId::new(), sample_fields());
            let merged = item.merged(&patch);

            prop_assert_eq!(merged.id(), item.id());
            prop_assert_eq!(merged.deleted_at(), item.deleted_at());
            prop_assert_eq!(merged.category, patch.category.unwrap_or(item.category));
            prop_assert_eq!(&merged.colour, patch.colour.as_ref().unwrap_or(&item.colour));
            prop_assert_eq!(&merged.user_id, patch.user_id.as_ref().unwrap_or(&item.user_id));
            prop_assert_eq!(&merged.brand, patch.brand.as_ref().unwrap_or(&item.brand));
            prop_assert_eq!(&merged.size, patch.size.as_ref().unwrap_or(&item.size));
            prop_assert_eq!(&merged.image_url, &item.image_url);
            prop_assert_eq!(merged.purchase_date, item.purchase_date);
            prop_assert_eq!(merged.purchase_price, patch.purchase_price.unwrap_or(item.purchase_price));
        }
    }
}

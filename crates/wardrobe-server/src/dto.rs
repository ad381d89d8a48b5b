//! Wire shapes for clothing items.
//!
//! Stored records carry `deleted_at`; the wire never does, since only active
//! records are ever returned.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wardrobe_store::ActiveItems;
use wardrobe_types::{ClothingCategory, ClothingItem, ItemId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClothingItemDto {
    pub id: ItemId,
    pub category: ClothingCategory,
    pub colour: String,
    pub user_id: String,
    pub brand: String,
    pub size: String,
    pub image_url: String,
    pub purchase_date: DateTime<Utc>,
    pub purchase_price: f64,
}

impl From<&ClothingItem> for ClothingItemDto {
    fn from(item: &ClothingItem) -> Self {
        Self {
            id: item.id(),
            category: item.category,
            colour: item.colour.clone(),
            user_id: item.user_id.clone(),
            brand: item.brand.clone(),
            size: item.size.clone(),
            image_url: item.image_url.clone(),
            purchase_date: item.purchase_date,
            purchase_price: item.purchase_price,
        }
    }
}

/// `{ "data": [...], "count": n }`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClothingItemListDto {
    pub data: Vec<ClothingItemDto>,
    pub count: usize,
}

impl From<ActiveItems> for ClothingItemListDto {
    fn from(active: ActiveItems) -> Self {
        Self {
            data: active.items.iter().map(ClothingItemDto::from).collect(),
            count: active.count,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use wardrobe_types::NewClothingItem;

    fn item() -> ClothingItem {
        ClothingItem::create(
            ItemId::new(),
            NewClothingItem {
                category: ClothingCategory::Tops,
                colour: "white".into(),
                user_id: "user-5".into(),
                brand: "Basic".into(),
                size: "XL".into(),
                image_url: "https://img.example.com/tee.png".into(),
                purchase_date: Utc.with_ymd_and_hms(2024, 4, 4, 4, 4, 4).unwrap(),
                purchase_price: 9.5,
            },
        )
    }

    #[test]
    fn dto_omits_deleted_at() {
        let value = serde_json::to_value(ClothingItemDto::from(&item())).unwrap();
        assert!(value.get("deleted_at").is_none());
        assert_eq!(value["category"], "tops");
        assert_eq!(value["purchase_date"], "2024-04-04T04:04:04Z");
    }

    #[test]
    fn list_dto_keeps_order_and_count() {
        let items = vec![item(), item()];
        let dto = ClothingItemListDto::from(ActiveItems {
            count: items.len(),
            items: items.clone(),
        });
        assert_eq!(dto.count, 2);
        assert_eq!(dto.data[0].id, items[0].id());
        assert_eq!(dto.data[1].id, items[1].id());
    }

    #[test]
    fn health_defaults_to_ok() {
        assert_eq!(HealthResponse::default().status, "ok");
    }
}

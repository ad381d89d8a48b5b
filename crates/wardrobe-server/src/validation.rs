//! Request body validation.
//!
//! Bodies are deserialized loosely (every field optional, dates and
//! categories as text) so that all problems in a request are collected and
//! reported together. A body that passes becomes a [`NewClothingItem`] or a
//! [`ClothingItemPatch`]. Unknown fields, including `id` and `deleted_at`,
//! are ignored.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use wardrobe_types::{ClothingCategory, ClothingItemPatch, NewClothingItem};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CreateClothingItemRequest {
    pub category: Option<String>,
    pub colour: Option<String>,
    pub user_id: Option<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub image_url: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UpdateClothingItemRequest {
    pub category: Option<String>,
    pub colour: Option<String>,
    pub user_id: Option<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub image_url: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
}

impl CreateClothingItemRequest {
    /// Check every field; all are required.
    pub fn validate(&self) -> Result<NewClothingItem, Vec<String>> {
        let mut v = FieldValidator::default();
        let category = v.required("category", self.category.as_deref(), parse_category);
        let colour = v.required("colour", self.colour.as_deref(), parse_text);
        let user_id = v.required("user_id", self.user_id.as_deref(), parse_text);
        let brand = v.required("brand", self.brand.as_deref(), parse_text);
        let size = v.required("size", self.size.as_deref(), parse_text);
        let image_url = v.required("image_url", self.image_url.as_deref(), parse_url);
        let purchase_date = v.required("purchase_date", self.purchase_date.as_deref(), parse_date);
        let purchase_price = v.required("purchase_price", self.purchase_price, parse_price);

        match (category, colour, user_id, brand, size, image_url, purchase_date, purchase_price) {
            (
                Some(category),
                Some(colour),
                Some(user_id),
                Some(brand),
                Some(size),
                Some(image_url),
                Some(purchase_date),
                Some(purchase_price),
            ) if v.errors.is_empty() => Ok(NewClothingItem {
                category,
                colour,
                user_id,
                brand,
                size,
                image_url,
                purchase_date,
                purchase_price,
            }),
            _ => Err(v.errors),
        }
    }
}

impl UpdateClothingItemRequest {
    /// Check each present field with the same rules as a create.
    pub fn validate(&self) -> Result<ClothingItemPatch, Vec<String>> {
        let mut v = FieldValidator::default();
        let patch = ClothingItemPatch {
            category: v.optional("category", self.category.as_deref(), parse_category),
            colour: v.optional("colour", self.colour.as_deref(), parse_text),
            user_id: v.optional("user_id", self.user_id.as_deref(), parse_text),
            brand: v.optional("brand", self.brand.as_deref(), parse_text),
            size: v.optional("size", self.size.as_deref(), parse_text),
            image_url: v.optional("image_url", self.image_url.as_deref(), parse_url),
            purchase_date: v.optional("purchase_date", self.purchase_date.as_deref(), parse_date),
            purchase_price: v.optional("purchase_price", self.purchase_price, parse_price),
        };
        if v.errors.is_empty() {
            Ok(patch)
        } else {
            Err(v.errors)
        }
    }
}

#[derive(Default)]
struct FieldValidator {
    errors: Vec<String>,
}

impl FieldValidator {
    fn required<I, T>(&mut self, field: &str, input: Option<I>, parse: fn(I) -> Result<T, String>) -> Option<T> {
        match input {
            Some(value) => self.optional(field, Some(value), parse),
            None => {
                self.errors.push(format!("{field} is required"));
                None
            }
        }
    }

    fn optional<I, T>(&mut self, field: &str, input: Option<I>, parse: fn(I) -> Result<T, String>) -> Option<T> {
        match parse(input?) {
            Ok(value) => Some(value),
            Err(reason) => {
                self.errors.push(format!("{field} {reason}"));
                None
            }
        }
    }
}

fn parse_text(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("must not be empty".into());
    }
    Ok(s.to_string())
}

fn parse_category(s: &str) -> Result<ClothingCategory, String> {
    s.parse().map_err(|_| {
        let allowed: Vec<&str> = ClothingCategory::ALL.iter().map(|c| c.as_str()).collect();
        format!("must be one of: {}", allowed.join(", "))
    })
}

/// Absolute `http`/`https` URL with a non-empty host and no whitespace.
fn parse_url(s: &str) -> Result<String, String> {
    let invalid = || "must be an http or https URL".to_string();
    if s.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let url = Url::parse(s).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(s.to_string()),
        _ => Err(invalid()),
    }
}

/// RFC 3339 timestamp, or a bare `YYYY-MM-DD` date taken as midnight UTC.
fn parse_date(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| "must be an ISO 8601 date".to_string())
}

fn parse_price(price: f64) -> Result<f64, String> {
    if !price.is_finite() || price < 0.0 {
        return Err("must be a non-negative number".into());
    }
    Ok(price)
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Garment category. The set is closed: no other value is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl ClothingCategory {
    /// Every category, in declaration order.
    pub const ALL: [ClothingCategory; 6] = [
        Self::Tops,
        Self::Bottoms,
        Self::Dresses,
        Self::Outerwear,
        Self::Shoes,
        Self::Accessories,
    ];

    /// The lowercase name used on disk and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
            Self::Dresses => "dresses",
            Self::Outerwear => "outerwear",
            Self::Shoes => "shoes",
            Self::Accessories => "accessories",
        }
    }
}

impl fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothingCategory {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TypeError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse_agree() {
        for category in ClothingCategory::ALL {
            let parsed: ClothingCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Tops".parse::<ClothingCategory>().is_err());
    }

    #[test]
    fn unknown_category_rejected() {
        let err = "hats".parse::<ClothingCategory>().unwrap_err();
        assert_eq!(err, TypeError::UnknownCategory("hats".into()));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ClothingCategory::Outerwear).unwrap();
        assert_eq!(json, "\"outerwear\"");
        let parsed: ClothingCategory = serde_json::from_str("\"shoes\"").unwrap();
        assert_eq!(parsed, ClothingCategory::Shoes);
    }

    #[test]
    fn serde_rejects_unknown_name() {
        assert!(serde_json::from_str::<ClothingCategory>("\"socks\"").is_err());
    }
}

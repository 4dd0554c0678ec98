//! Drink Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Drink entity (catalog entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub id: i64,
    pub name: String,
    pub size_ml: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Offered to waitstaff
    pub is_active: bool,
    /// Sweet category (prepared at the Süßkram station)
    pub is_sweet: bool,
}

/// One record of the catalog seed file
///
/// ```json
/// { "name": "Cola", "size_ml": 330, "price": 2.5, "active": true, "suesskram": false }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkSeed {
    pub name: String,
    pub size_ml: i64,
    pub price: Decimal,
    #[serde(rename = "active", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "suesskram", default = "default_true")]
    pub is_sweet: bool,
}

fn default_true() -> bool {
    true
}

/// Result of replacing the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    /// Drinks now offered to waitstaff
    pub offered: u64,
    /// Drinks present before seeding that are no longer offered
    pub retired: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_seed_defaults() {
        let seed: DrinkSeed =
            serde_json::from_str(r#"{"name":"Radler","size_ml":500,"price":3.5}"#).unwrap();
        assert_eq!(seed.name, "Radler");
        assert_eq!(seed.price, Decimal::from_str("3.5").unwrap());
        assert!(seed.is_active);
        assert!(seed.is_sweet);
    }

    #[test]
    fn test_seed_explicit_flags() {
        let seed: DrinkSeed = serde_json::from_str(
            r#"{"name":"Cola","size_ml":330,"price":2.5,"active":false,"suesskram":false}"#,
        )
        .unwrap();
        assert!(!seed.is_active);
        assert!(!seed.is_sweet);
    }
}

//! Drink catalog seeding
//!
//! The catalog file is a JSON array of [`DrinkSeed`] and is the single source
//! of truth for what is offered. Seeding replaces the offered catalog at
//! startup; drinks missing from the file are retired, never deleted.

use std::path::Path;

use shared::models::{CatalogSummary, DrinkSeed};
use sqlx::SqlitePool;

use crate::db::repository::drink;
use crate::utils::validation::{MAX_DRINK_NAME_LEN, MAX_PRICE_CENTS, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Read and parse the seed file
pub fn load_seed_file(path: &Path) -> AppResult<Vec<DrinkSeed>> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::config(format!("Cannot read drink catalog {}: {e}", path.display()))
            .with_detail("path", path.display().to_string())
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        AppError::with_message(
            ErrorCode::CatalogInvalid,
            format!("Malformed drink catalog {}: {e}", path.display()),
        )
        .with_detail("path", path.display().to_string())
    })
}

/// Reject seeds the database would store in a broken state
pub fn validate_seeds(seeds: &[DrinkSeed]) -> AppResult<()> {
    for (index, seed) in seeds.iter().enumerate() {
        let invalid = |msg: String| {
            AppError::with_message(ErrorCode::CatalogInvalid, msg).with_detail("index", index)
        };

        validate_required_text(&seed.name, "name", MAX_DRINK_NAME_LEN)
            .map_err(|e| invalid(format!("Drink #{index}: {}", e.message)))?;

        if seed.size_ml <= 0 {
            return Err(invalid(format!(
                "{}: size must be positive, got {} ml",
                seed.name, seed.size_ml
            )));
        }

        let cents = drink::price_to_cents(seed.price)
            .ok_or_else(|| invalid(format!("{}: price out of range", seed.name)))?;
        if !(0..=MAX_PRICE_CENTS).contains(&cents) {
            return Err(invalid(format!(
                "{}: price must be between 0 and {}, got {}",
                seed.name,
                drink::cents_to_price(MAX_PRICE_CENTS),
                seed.price
            )));
        }
    }
    Ok(())
}

/// Load, validate and apply the catalog file
///
/// Nothing is written if the file is unreadable or any seed is invalid.
pub async fn seed_from_file(pool: &SqlitePool, path: &Path) -> AppResult<CatalogSummary> {
    let seeds = load_seed_file(path)?;
    validate_seeds(&seeds)?;

    if seeds.is_empty() {
        tracing::warn!(source = %path.display(), "Drink catalog is empty, nothing can be ordered");
    }

    let summary = drink::replace_catalog(pool, &seeds).await?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_catalog(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_defaults() {
        let file = write_catalog(r#"[{"name": "Cola", "size_ml": 330, "price": 2.5}]"#);
        let seeds = load_seed_file(file.path()).unwrap();
        assert_eq!(seeds.len(), 1);
        assert!(seeds[0].is_active);
        assert!(seeds[0].is_sweet);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = load_seed_file(Path::new("/nonexistent/drinks.json")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }

    #[test]
    fn test_malformed_file_is_catalog_error() {
        let file = write_catalog(r#"[{"name": "Cola""#);
        let err = load_seed_file(file.path()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogInvalid);
    }

    #[test]
    fn test_validate_rejects_bad_seeds() {
        let file = write_catalog(
            r#"[
                {"name": "Cola", "size_ml": 330, "price": 2.5},
                {"name": "Leer", "size_ml": 0, "price": 1.0}
            ]"#,
        );
        let seeds = load_seed_file(file.path()).unwrap();
        let err = validate_seeds(&seeds).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogInvalid);
        assert!(err.message.contains("Leer"));

        let file = write_catalog(r#"[{"name": "Cola", "size_ml": 330, "price": -1}]"#);
        assert!(validate_seeds(&load_seed_file(file.path()).unwrap()).is_err());

        let file = write_catalog(r#"[{"name": "  ", "size_ml": 330, "price": 1}]"#);
        assert!(validate_seeds(&load_seed_file(file.path()).unwrap()).is_err());
    }

    #[test]
    fn test_huge_price_is_catalog_error() {
        let file = write_catalog(
            r#"[{"name": "X", "size_ml": 1, "price": 70000000000000000000000000000}]"#,
        );
        let seeds = load_seed_file(file.path()).unwrap();
        let err = validate_seeds(&seeds).unwrap_err();
        assert_eq!(err.code, ErrorCode::CatalogInvalid);
        assert!(err.message.contains("out of range"));
    }

    #[tokio::test]
    async fn test_seed_from_file_applies_catalog() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let file = write_catalog(
            r#"[
                {"name": "Cola", "size_ml": 330, "price": 2.5, "suesskram": false},
                {"name": "Hugo", "size_ml": 200, "price": 5.0},
                {"name": "Eierlikör", "size_ml": 20, "price": 2.0, "active": false}
            ]"#,
        );

        let summary = seed_from_file(&pool, file.path()).await.unwrap();
        assert_eq!(summary, CatalogSummary { offered: 2, retired: 0 });

        let active = drink::find_active(&pool).await.unwrap();
        let names: Vec<&str> = active.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Cola", "Hugo"]);
    }

    #[tokio::test]
    async fn test_invalid_file_leaves_catalog_untouched() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let good = write_catalog(r#"[{"name": "Cola", "size_ml": 330, "price": 2.5}]"#);
        seed_from_file(&pool, good.path()).await.unwrap();

        let bad = write_catalog(r#"[{"name": "Cola", "size_ml": -1, "price": 2.5}]"#);
        assert!(seed_from_file(&pool, bad.path()).await.is_err());

        assert_eq!(drink::find_active(&pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_shipped_catalog_is_valid() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/drinks.json");
        let summary = seed_from_file(&pool, &path).await.unwrap();
        assert_eq!(summary.offered, 8);
    }
}

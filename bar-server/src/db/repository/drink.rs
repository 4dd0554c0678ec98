//! Drink Repository

use std::collections::HashSet;

use super::{RepoError, RepoResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use shared::models::{CatalogSummary, Drink, DrinkSeed};
use sqlx::SqlitePool;

const DRINK_COLUMNS: &str = "id, name, size_ml, price_cents, is_active, is_sweet";

#[derive(sqlx::FromRow)]
struct DrinkRow {
    id: i64,
    name: String,
    size_ml: i64,
    price_cents: i64,
    is_active: bool,
    is_sweet: bool,
}

impl From<DrinkRow> for Drink {
    fn from(row: DrinkRow) -> Self {
        Drink {
            id: row.id,
            name: row.name,
            size_ml: row.size_ml,
            price: cents_to_price(row.price_cents),
            is_active: row.is_active,
            is_sweet: row.is_sweet,
        }
    }
}

/// Price → integer cents, rounded half away from zero
///
/// `None` when the price does not fit (overflow while scaling or beyond i64).
pub fn price_to_cents(price: Decimal) -> Option<i64> {
    price
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

pub fn cents_to_price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Drinks offered to waitstaff
pub async fn find_active(pool: &SqlitePool) -> RepoResult<Vec<Drink>> {
    let rows = sqlx::query_as::<_, DrinkRow>(&format!(
        "SELECT {DRINK_COLUMNS} FROM drink WHERE is_active = 1 ORDER BY name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Drink::from).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Drink>> {
    let row = sqlx::query_as::<_, DrinkRow>(&format!(
        "SELECT {DRINK_COLUMNS} FROM drink WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Drink::from))
}

/// Replace the offered catalog with `seeds`
///
/// Every drink is deactivated, then each seed is upserted by name. Rows are
/// never deleted so existing order items keep resolving. Runs in one
/// transaction.
pub async fn replace_catalog(pool: &SqlitePool, seeds: &[DrinkSeed]) -> RepoResult<CatalogSummary> {
    let mut tx = pool.begin().await?;

    let previously_active: Vec<i64> =
        sqlx::query_scalar::<_, i64>("SELECT id FROM drink WHERE is_active = 1")
            .fetch_all(&mut *tx)
            .await?;

    sqlx::query("UPDATE drink SET is_active = 0")
        .execute(&mut *tx)
        .await?;

    for seed in seeds {
        let price_cents = price_to_cents(seed.price).ok_or_else(|| {
            RepoError::Validation(format!("Price of {} is out of range", seed.name))
        })?;
        sqlx::query(
            "INSERT INTO drink (name, size_ml, price_cents, is_active, is_sweet) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             ON CONFLICT (name) DO UPDATE SET \
                 size_ml = excluded.size_ml, \
                 price_cents = excluded.price_cents, \
                 is_active = excluded.is_active, \
                 is_sweet = excluded.is_sweet",
        )
        .bind(&seed.name)
        .bind(seed.size_ml)
        .bind(price_cents)
        .bind(seed.is_active)
        .bind(seed.is_sweet)
        .execute(&mut *tx)
        .await?;
    }

    let now_active: HashSet<i64> =
        sqlx::query_scalar::<_, i64>("SELECT id FROM drink WHERE is_active = 1")
            .fetch_all(&mut *tx)
            .await?
            .into_iter()
            .collect();

    tx.commit().await?;

    let retired = previously_active
        .iter()
        .filter(|id| !now_active.contains(*id))
        .count();

    Ok(CatalogSummary {
        offered: now_active.len() as u64,
        retired: retired as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use std::str::FromStr;

    fn seed(name: &str, price: &str, is_sweet: bool) -> DrinkSeed {
        DrinkSeed {
            name: name.to_string(),
            size_ml: 330,
            price: Decimal::from_str(price).unwrap(),
            is_active: true,
            is_sweet,
        }
    }

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    /// Every stored drink, retired ones included
    async fn stored_drinks(pool: &SqlitePool) -> Vec<Drink> {
        sqlx::query_as::<_, DrinkRow>(&format!("SELECT {DRINK_COLUMNS} FROM drink ORDER BY name"))
            .fetch_all(pool)
            .await
            .unwrap()
            .into_iter()
            .map(Drink::from)
            .collect()
    }

    #[test]
    fn test_price_cents_conversion() {
        assert_eq!(price_to_cents(Decimal::from_str("2.50").unwrap()), Some(250));
        assert_eq!(price_to_cents(Decimal::from_str("0.005").unwrap()), Some(1));
        assert_eq!(price_to_cents(Decimal::from_str("4").unwrap()), Some(400));
        assert_eq!(cents_to_price(750), Decimal::from_str("7.50").unwrap());
    }

    #[test]
    fn test_price_cents_overflow() {
        assert_eq!(price_to_cents(Decimal::MAX), None);
        assert_eq!(price_to_cents(Decimal::MIN), None);
    }

    #[tokio::test]
    async fn test_replace_catalog_inserts() {
        let pool = test_pool().await;
        let summary = replace_catalog(
            &pool,
            &[seed("Cola", "2.50", false), seed("Fanta", "2.50", true)],
        )
        .await
        .unwrap();

        assert_eq!(summary, CatalogSummary { offered: 2, retired: 0 });

        let drinks = find_active(&pool).await.unwrap();
        assert_eq!(drinks.len(), 2);
        assert_eq!(drinks[0].name, "Cola");
        assert_eq!(drinks[0].price, Decimal::from_str("2.50").unwrap());
        assert!(!drinks[0].is_sweet);
        assert!(drinks[1].is_sweet);
    }

    #[tokio::test]
    async fn test_reseed_soft_deletes_missing_drinks() {
        let pool = test_pool().await;
        replace_catalog(&pool, &[seed("Cola", "2.50", false), seed("Fanta", "2.50", true)])
            .await
            .unwrap();
        let cola_id = find_active(&pool).await.unwrap()[0].id;

        let summary = replace_catalog(&pool, &[seed("Fanta", "3.00", true)])
            .await
            .unwrap();
        assert_eq!(summary, CatalogSummary { offered: 1, retired: 1 });

        // Cola stays resolvable but is no longer offered
        let cola = find_by_id(&pool, cola_id).await.unwrap().unwrap();
        assert!(!cola.is_active);

        let active = find_active(&pool).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Fanta");
        assert_eq!(active[0].price, Decimal::from_str("3.00").unwrap());

        assert_eq!(stored_drinks(&pool).await.len(), 2);
    }

    #[tokio::test]
    async fn test_reseed_keeps_ids_stable() {
        let pool = test_pool().await;
        replace_catalog(&pool, &[seed("Cola", "2.50", false)]).await.unwrap();
        let before = stored_drinks(&pool).await[0].id;

        replace_catalog(&pool, &[seed("Cola", "2.80", false)]).await.unwrap();
        let after = stored_drinks(&pool).await;
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].id, before);
        assert_eq!(after[0].price, Decimal::from_str("2.80").unwrap());
    }

    #[tokio::test]
    async fn test_inactive_seed_is_stored_but_not_offered() {
        let pool = test_pool().await;
        let mut hidden = seed("Eierlikör", "2.00", true);
        hidden.is_active = false;

        let summary = replace_catalog(&pool, &[seed("Cola", "2.50", false), hidden])
            .await
            .unwrap();
        assert_eq!(summary.offered, 1);
        assert_eq!(stored_drinks(&pool).await.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_names_last_wins() {
        let pool = test_pool().await;
        replace_catalog(&pool, &[seed("Cola", "2.50", false), seed("Cola", "3.00", true)])
            .await
            .unwrap();
        let drinks = stored_drinks(&pool).await;
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].price, Decimal::from_str("3.00").unwrap());
        assert!(drinks[0].is_sweet);
    }
}

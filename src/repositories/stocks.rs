use sqlx::SqlitePool;

use crate::db::{is_unique_violation, DbError};
use crate::models::Stock;

/// CRUD over the stocks table. Symbols are unique, ids server-generated.
#[derive(Clone)]
pub struct StockRepository {
    pool: SqlitePool,
}

impl StockRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Stock>, DbError> {
        let stocks = sqlx::query_as("SELECT * FROM stocks ORDER BY symbol ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(stocks)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Stock>, DbError> {
        let stock = sqlx::query_as("SELECT * FROM stocks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(stock)
    }

    /// Returns the generated row id.
    pub async fn insert(
        &self,
        symbol: &str,
        company_name: &str,
        current_price: Option<f64>,
        target_price: Option<f64>,
        rating: Option<&str>,
        notes: Option<&str>,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO stocks (symbol, company_name, current_price, target_price, rating, notes)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(symbol)
        .bind(company_name)
        .bind(current_price)
        .bind(target_price)
        .bind(rating)
        .bind(notes)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DbError::Conflict("Stock symbol already exists".to_string())
            } else {
                e.into()
            }
        })?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(
        &self,
        id: i64,
        company_name: &str,
        current_price: Option<f64>,
        target_price: Option<f64>,
        rating: Option<&str>,
        notes: Option<&str>,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            "UPDATE stocks
             SET company_name = ?, current_price = ?, target_price = ?, rating = ?, notes = ?,
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = ?",
        )
        .bind(company_name)
        .bind(current_price)
        .bind(target_price)
        .bind(rating)
        .bind(notes)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Stock not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM stocks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Stock not found".to_string()));
        }
        Ok(())
    }
}

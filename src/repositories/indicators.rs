use sqlx::SqlitePool;

use crate::db::DbError;
use crate::models::Indicator;

/// CRUD over the indicators table.
#[derive(Clone)]
pub struct IndicatorRepository {
    pool: SqlitePool,
}

impl IndicatorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Indicator>, DbError> {
        let indicators = sqlx::query_as("SELECT * FROM indicators ORDER BY date DESC, name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(indicators)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Indicator>, DbError> {
        let indicator = sqlx::query_as("SELECT * FROM indicators WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(indicator)
    }

    /// Returns the generated row id.
    pub async fn insert(
        &self,
        name: &str,
        value: f64,
        unit: Option<&str>,
        date: &str,
        description: Option<&str>,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO indicators (name, value, unit, date, description)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(value)
        .bind(unit)
        .bind(date)
        .bind(description)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        value: f64,
        unit: Option<&str>,
        date: &str,
        description: Option<&str>,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            "UPDATE indicators
             SET name = ?, value = ?, unit = ?, date = ?, description = ?,
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = ?",
        )
        .bind(name)
        .bind(value)
        .bind(unit)
        .bind(date)
        .bind(description)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Indicator not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM indicators WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Indicator not found".to_string()));
        }
        Ok(())
    }
}

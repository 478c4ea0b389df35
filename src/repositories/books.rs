use sqlx::SqlitePool;

use crate::db::DbError;
use crate::models::Book;

/// CRUD over the books table.
#[derive(Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as("SELECT * FROM books ORDER BY title ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Book>, DbError> {
        let book = sqlx::query_as("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Returns the generated row id. A missing status falls back to the
    /// storage default ('read').
    pub async fn insert(
        &self,
        title: &str,
        author: &str,
        description: Option<&str>,
        cover_image: Option<&str>,
        rating: Option<i64>,
        status: Option<&str>,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO books (title, author, description, cover_image, rating, status)
             VALUES (?, ?, ?, ?, ?, COALESCE(?, 'read'))",
        )
        .bind(title)
        .bind(author)
        .bind(description)
        .bind(cover_image)
        .bind(rating)
        .bind(status)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn update(
        &self,
        id: i64,
        title: &str,
        author: &str,
        description: Option<&str>,
        cover_image: Option<&str>,
        rating: Option<i64>,
        status: Option<&str>,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            "UPDATE books
             SET title = ?, author = ?, description = ?, cover_image = ?, rating = ?, status = ?,
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = ?",
        )
        .bind(title)
        .bind(author)
        .bind(description)
        .bind(cover_image)
        .bind(rating)
        .bind(status)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }
}

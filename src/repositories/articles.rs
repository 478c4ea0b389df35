use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::db::{is_unique_violation, DbError};
use crate::models::{Article, ArticleRow};

/// CRUD over the articles table. Article ids are caller-supplied strings.
#[derive(Clone)]
pub struct ArticleRepository {
    pool: SqlitePool,
}

impl ArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List articles, newest first. `category` is an equality filter,
    /// `search` a case-insensitive substring match over title, content and
    /// the serialized tags; both combine with AND.
    pub async fn list(
        &self,
        category: Option<&str>,
        search: Option<&str>,
    ) -> Result<Vec<Article>, DbError> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM articles");

        let mut has_where = false;
        if let Some(category) = category {
            qb.push(" WHERE category = ").push_bind(category.to_string());
            has_where = true;
        }
        if let Some(search) = search {
            qb.push(if has_where { " AND " } else { " WHERE " });
            let pattern = format!("%{}%", search);
            qb.push("(title LIKE ")
                .push_bind(pattern.clone())
                .push(" OR content LIKE ")
                .push_bind(pattern.clone())
                .push(" OR tags LIKE ")
                .push_bind(pattern)
                .push(")");
        }
        qb.push(" ORDER BY date DESC");

        let rows: Vec<ArticleRow> = qb.build_query_as().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(Article::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Article>, DbError> {
        let row: Option<ArticleRow> = sqlx::query_as("SELECT * FROM articles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Article::from))
    }

    pub async fn insert(
        &self,
        id: &str,
        title: &str,
        category: &str,
        content: &str,
        date: &str,
        tags_json: &str,
    ) -> Result<(), DbError> {
        sqlx::query(
            "INSERT INTO articles (id, title, category, content, date, tags)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(title)
        .bind(category)
        .bind(content)
        .bind(date)
        .bind(tags_json)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DbError::Conflict("Article ID already exists".to_string())
            } else {
                e.into()
            }
        })?;
        Ok(())
    }

    /// Full replace; refreshes `updated_at`. Zero rows affected means the
    /// id does not exist.
    pub async fn update(
        &self,
        id: &str,
        title: &str,
        category: &str,
        content: &str,
        date: &str,
        tags_json: &str,
    ) -> Result<(), DbError> {
        let result = sqlx::query(
            "UPDATE articles
             SET title = ?, category = ?, content = ?, date = ?, tags = ?,
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = ?",
        )
        .bind(title)
        .bind(category)
        .bind(content)
        .bind(date)
        .bind(tags_json)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Article not found".to_string()));
        }
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Article not found".to_string()));
        }
        Ok(())
    }
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// An article row as stored: tags are a JSON-serialized string list.
#[derive(Debug, Clone, FromRow)]
pub struct ArticleRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub date: String,
    pub tags: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// An article as served: tags deserialized back to an ordered list.
/// A row with no tags yields an empty list, never null.
#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub category: String,
    pub content: String,
    pub date: String,
    pub tags: Vec<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        let tags = row
            .tags
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
            .unwrap_or_default();

        Self {
            id: row.id,
            title: row.title,
            category: row.category,
            content: row.content,
            date: row.date,
            tags,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateArticle {
    pub id: Option<String>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub category: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
    pub tags: Option<Vec<String>>,
}

fn require<'a>(field: &'a Option<String>) -> Result<&'a str, ApiError> {
    match field.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::bad_request("Missing required fields")),
    }
}

/// Tags as stored: JSON array text, `[]` when absent.
fn tags_json(tags: &Option<Vec<String>>) -> String {
    serde_json::to_string(tags.as_deref().unwrap_or_default())
        .unwrap_or_else(|_| "[]".to_string())
}

impl CreateArticle {
    /// Checks `id`, `title`, `category`, `content` and `date` are present
    /// and non-empty, returning the bind-ready values.
    pub fn validated(&self) -> Result<(&str, &str, &str, &str, &str, String), ApiError> {
        Ok((
            require(&self.id)?,
            require(&self.title)?,
            require(&self.category)?,
            require(&self.content)?,
            require(&self.date)?,
            tags_json(&self.tags),
        ))
    }
}

impl UpdateArticle {
    pub fn validated(&self) -> Result<(&str, &str, &str, &str, String), ApiError> {
        Ok((
            require(&self.title)?,
            require(&self.category)?,
            require(&self.content)?,
            require(&self.date)?,
            tags_json(&self.tags),
        ))
    }
}

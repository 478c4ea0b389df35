use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// A book on the reading list. `status` is one of read/reading/to-read,
/// defaulting to "read" at the storage layer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub rating: Option<i64>,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Shared create/update payload: both operations resend the full record.
#[derive(Debug, Deserialize)]
pub struct BookPayload {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub rating: Option<i64>,
    pub status: Option<String>,
}

impl BookPayload {
    pub fn validated(&self) -> Result<(&str, &str), ApiError> {
        match (self.title.as_deref(), self.author.as_deref()) {
            (Some(title), Some(author)) if !title.is_empty() && !author.is_empty() => {
                Ok((title, author))
            }
            _ => Err(ApiError::bad_request("Title and author are required")),
        }
    }
}

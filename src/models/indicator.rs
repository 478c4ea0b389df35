use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// An economic indicator measurement.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Indicator {
    pub id: i64,
    pub name: String,
    pub value: f64,
    pub unit: Option<String>,
    pub date: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Shared create/update payload: both operations resend the full record.
#[derive(Debug, Deserialize)]
pub struct IndicatorPayload {
    pub name: Option<String>,
    pub value: Option<f64>,
    pub unit: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

impl IndicatorPayload {
    /// `value` may legitimately be zero; only its absence is an error.
    pub fn validated(&self) -> Result<(&str, f64, &str), ApiError> {
        match (self.name.as_deref(), self.value, self.date.as_deref()) {
            (Some(name), Some(value), Some(date)) if !name.is_empty() && !date.is_empty() => {
                Ok((name, value, date))
            }
            _ => Err(ApiError::bad_request("Name, value, and date are required")),
        }
    }
}

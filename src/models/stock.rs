use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::ApiError;

/// A tracked stock. `rating` is free text, conventionally BUY/HOLD/SELL.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Stock {
    pub id: i64,
    pub symbol: String,
    pub company_name: String,
    pub current_price: Option<f64>,
    pub target_price: Option<f64>,
    pub rating: Option<String>,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateStock {
    pub symbol: Option<String>,
    pub company_name: Option<String>,
    pub current_price: Option<f64>,
    pub target_price: Option<f64>,
    pub rating: Option<String>,
    pub notes: Option<String>,
}

/// Update payload: the symbol is fixed at creation and not mutable.
#[derive(Debug, Deserialize)]
pub struct UpdateStock {
    pub company_name: Option<String>,
    pub current_price: Option<f64>,
    pub target_price: Option<f64>,
    pub rating: Option<String>,
    pub notes: Option<String>,
}

impl CreateStock {
    pub fn validated(&self) -> Result<(&str, &str), ApiError> {
        match (self.symbol.as_deref(), self.company_name.as_deref()) {
            (Some(symbol), Some(company)) if !symbol.is_empty() && !company.is_empty() => {
                Ok((symbol, company))
            }
            _ => Err(ApiError::bad_request("Symbol and company name are required")),
        }
    }
}

impl UpdateStock {
    pub fn validated(&self) -> Result<&str, ApiError> {
        match self.company_name.as_deref() {
            Some(company) if !company.is_empty() => Ok(company),
            _ => Err(ApiError::bad_request("Company name is required")),
        }
    }
}

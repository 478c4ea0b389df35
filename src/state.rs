use sqlx::SqlitePool;

use crate::repositories::{ArticleRepository, BookRepository, IndicatorRepository, StockRepository};

/// Shared application state: one repository per resource, constructed once
/// at startup and injected into handlers. The pool is also kept directly
/// for the health check.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub articles: ArticleRepository,
    pub stocks: StockRepository,
    pub indicators: IndicatorRepository,
    pub books: BookRepository,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            articles: ArticleRepository::new(pool.clone()),
            stocks: StockRepository::new(pool.clone()),
            indicators: IndicatorRepository::new(pool.clone()),
            books: BookRepository::new(pool.clone()),
            pool,
        }
    }
}

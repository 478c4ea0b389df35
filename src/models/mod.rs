pub mod article;
pub mod book;
pub mod indicator;
pub mod stock;

pub use article::{Article, ArticleRow, CreateArticle, UpdateArticle};
pub use book::{Book, BookPayload};
pub use indicator::{Indicator, IndicatorPayload};
pub use stock::{CreateStock, Stock, UpdateStock};

pub mod articles;
pub mod books;
pub mod indicators;
pub mod stocks;

pub use articles::ArticleRepository;
pub use books::BookRepository;
pub use indicators::IndicatorRepository;
pub use stocks::StockRepository;

//! Example content inserted the first time an empty store is seen.

use sqlx::SqlitePool;
use tracing::info;

use super::DbError;

/// Seed example rows when the store is empty. Idempotent: a non-empty
/// articles table skips the whole step. Rows are inserted one by one with
/// no surrounding transaction.
pub async fn seed_initial_data(pool: &SqlitePool) -> Result<(), DbError> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        info!("Database already contains data, skipping seed");
        return Ok(());
    }

    info!("Seeding initial data");

    for (id, title, category, content, date, tags) in sample_articles() {
        sqlx::query(
            "INSERT INTO articles (id, title, category, content, date, tags)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(title)
        .bind(category)
        .bind(content)
        .bind(date)
        .bind(tags)
        .execute(pool)
        .await?;
    }

    for (symbol, company_name, current_price, target_price, rating, notes) in sample_stocks() {
        sqlx::query(
            "INSERT INTO stocks (symbol, company_name, current_price, target_price, rating, notes)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(symbol)
        .bind(company_name)
        .bind(current_price)
        .bind(target_price)
        .bind(rating)
        .bind(notes)
        .execute(pool)
        .await?;
    }

    for (name, value, unit, date, description) in sample_indicators() {
        sqlx::query(
            "INSERT INTO indicators (name, value, unit, date, description)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(name)
        .bind(value)
        .bind(unit)
        .bind(date)
        .bind(description)
        .execute(pool)
        .await?;
    }

    for (title, author, description, cover_image, rating, status) in sample_books() {
        sqlx::query(
            "INSERT INTO books (title, author, description, cover_image, rating, status)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(author)
        .bind(description)
        .bind(cover_image)
        .bind(rating)
        .bind(status)
        .execute(pool)
        .await?;
    }

    info!("Initial data seeded");
    Ok(())
}

type ArticleSeed = (&'static str, &'static str, &'static str, &'static str, &'static str, &'static str);

fn sample_articles() -> Vec<ArticleSeed> {
    vec![
        (
            "mr001",
            "Tech Sector Valuation Metrics in 2024",
            "market-research",
            "# Tech Sector Valuation Metrics in 2024\n\n\
             ## Executive Summary\n\n\
             The technology sector continues to trade at elevated valuations despite recent market corrections. \
             This analysis examines key valuation metrics across major tech companies and identifies potential opportunities.\n\n\
             ## Key Findings\n\n\
             **Price-to-Earnings Analysis**\n\
             - Median P/E ratio for large-cap tech: 28.5x\n\
             - Historical average (10-year): 22.1x\n\
             - Current premium: 29% above historical average\n\n\
             ## Investment Implications\n\n\
             **Overweight Positions**\n\
             - Cloud infrastructure providers\n\
             - AI/ML platform companies\n\
             - Cybersecurity leaders",
            "2024-01-15",
            r#"["technology","valuation","P/E ratios"]"#,
        ),
        (
            "ei001",
            "Federal Reserve Policy Impact Analysis",
            "economic-indicators",
            "# Federal Reserve Policy Impact Analysis\n\n\
             ## Current Policy Stance\n\n\
             The Federal Reserve has maintained a hawkish stance with continued rate hikes to combat inflation. \
             This analysis examines the broader economic implications.\n\n\
             ## Key Metrics\n\n\
             **Interest Rates**\n\
             - Federal Funds Rate: 5.25-5.50%\n\
             - 10-Year Treasury: 4.85%\n\n\
             ## Market Implications\n\n\
             The current policy environment suggests continued pressure on growth stocks and a defensive positioning bias.",
            "2024-01-10",
            r#"["federal reserve","interest rates","inflation"]"#,
        ),
    ]
}

fn sample_stocks() -> Vec<(&'static str, &'static str, f64, f64, &'static str, &'static str)> {
    vec![
        ("AAPL", "Apple Inc.", 175.50, 200.00, "BUY", "Strong iPhone 15 cycle and services growth"),
        ("MSFT", "Microsoft Corporation", 380.25, 420.00, "BUY", "Azure growth and AI integration"),
        ("GOOGL", "Alphabet Inc.", 140.80, 160.00, "BUY", "Search dominance and cloud expansion"),
        ("AMZN", "Amazon.com Inc.", 155.30, 180.00, "BUY", "AWS leadership and retail recovery"),
    ]
}

fn sample_indicators() -> Vec<(&'static str, f64, &'static str, &'static str, &'static str)> {
    vec![
        ("GDP Growth Rate", 2.1, "%", "2024-01-15", "Quarterly GDP growth"),
        ("Unemployment Rate", 3.8, "%", "2024-01-15", "Monthly unemployment data"),
        ("CPI Inflation", 3.2, "%", "2024-01-15", "Consumer price index"),
        ("Federal Funds Rate", 5.375, "%", "2024-01-15", "Central bank interest rate"),
    ]
}

fn sample_books() -> Vec<(&'static str, &'static str, &'static str, &'static str, i64, &'static str)> {
    vec![
        (
            "The Intelligent Investor",
            "Benjamin Graham",
            "Classic value investing principles",
            "https://images-na.ssl-images-amazon.com/images/I/91+2lVB8Y2L.jpg",
            5,
            "read",
        ),
        (
            "A Random Walk Down Wall Street",
            "Burton Malkiel",
            "Efficient market hypothesis and index investing",
            "https://images-na.ssl-images-amazon.com/images/I/81Q+Qkm4sqL.jpg",
            4,
            "read",
        ),
        (
            "Security Analysis",
            "Benjamin Graham",
            "Fundamental analysis techniques",
            "https://images-na.ssl-images-amazon.com/images/I/91+2lVB8Y2L.jpg",
            5,
            "read",
        ),
    ]
}

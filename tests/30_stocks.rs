mod common;

use anyhow::Result;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn seeded_stocks_list_by_symbol() -> Result<()> {
    let app = common::seeded_app().await?;
    let (status, body) = common::request(&app, "GET", "/api/stocks", None, None).await?;

    assert_eq!(status, StatusCode::OK);
    let symbols: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|s| s["symbol"].as_str())
        .collect();
    assert_eq!(symbols, ["AAPL", "AMZN", "GOOGL", "MSFT"]);
    Ok(())
}

#[tokio::test]
async fn create_assigns_positive_integer_id() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::login(&app).await?;

    let (status, body) = common::request(
        &app,
        "POST",
        "/api/stocks",
        Some(&token),
        Some(json!({
            "symbol": "NVDA", "company_name": "NVIDIA Corporation",
            "current_price": 495.2, "target_price": 600.0,
            "rating": "BUY", "notes": "Datacenter demand"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().expect("integer id");
    assert!(id > 0);

    let (status, body) =
        common::request(&app, "GET", &format!("/api/stocks/{}", id), None, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["symbol"], "NVDA");
    assert_eq!(body["current_price"], 495.2);
    assert!(body["created_at"].as_str().is_some_and(|s| !s.is_empty()));
    Ok(())
}

#[tokio::test]
async fn duplicate_symbol_conflicts() -> Result<()> {
    let app = common::seeded_app().await?;
    let token = common::login(&app).await?;

    let payload = json!({ "symbol": "AAPL", "company_name": "Apple Inc." });
    let (status, body) =
        common::request(&app, "POST", "/api/stocks", Some(&token), Some(payload)).await?;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Stock symbol already exists");
    Ok(())
}

#[tokio::test]
async fn create_requires_symbol_and_company_name() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::login(&app).await?;

    for payload in [
        json!({ "company_name": "No Symbol Inc." }),
        json!({ "symbol": "NS" }),
        json!({ "symbol": "", "company_name": "Empty" }),
    ] {
        let (status, _) =
            common::request(&app, "POST", "/api/stocks", Some(&token), Some(payload)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
    Ok(())
}

#[tokio::test]
async fn update_replaces_mutable_fields() -> Result<()> {
    let app = common::seeded_app().await?;
    let token = common::login(&app).await?;

    // Seeded AAPL is id 1 (first insert).
    let (status, _) = common::request(
        &app,
        "PUT",
        "/api/stocks/1",
        Some(&token),
        Some(json!({
            "company_name": "Apple Inc.",
            "current_price": 180.0, "target_price": 210.0, "rating": "HOLD"
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = common::request(&app, "GET", "/api/stocks/1", None, None).await?;
    assert_eq!(body["rating"], "HOLD");
    // Notes were not resent: full replace nulls them.
    assert_eq!(body["notes"], json!(null));
    Ok(())
}

#[tokio::test]
async fn unknown_and_non_numeric_ids_yield_404() -> Result<()> {
    let app = common::test_app().await?;
    let token = common::login(&app).await?;
    let payload = json!({ "company_name": "Ghost Corp" });

    let (status, _) = common::request(&app, "GET", "/api/stocks/999", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::request(&app, "GET", "/api/stocks/abc", None, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
        common::request(&app, "PUT", "/api/stocks/999", Some(&token), Some(payload)).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::request(&app, "DELETE", "/api/stocks/999", Some(&token), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Assemble the full application router.
pub fn app(config: &AppConfig, state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(auth_routes())
        .merge(articles_routes())
        .merge(stocks_routes())
        .merge(indicators_routes())
        .merge(books_routes())
}

fn auth_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/verify", post(auth::verify))
        .route("/auth/logout", post(auth::logout))
}

fn articles_routes() -> Router<AppState> {
    use handlers::articles;

    Router::new()
        .route("/articles", get(articles::list).post(articles::create))
        .route(
            "/articles/:id",
            get(articles::get)
                .put(articles::update)
                .delete(articles::remove),
        )
}

fn stocks_routes() -> Router<AppState> {
    use handlers::stocks;

    Router::new()
        .route("/stocks", get(stocks::list).post(stocks::create))
        .route(
            "/stocks/:id",
            get(stocks::get).put(stocks::update).delete(stocks::remove),
        )
}

fn indicators_routes() -> Router<AppState> {
    use handlers::indicators;

    Router::new()
        .route("/indicators", get(indicators::list).post(indicators::create))
        .route(
            "/indicators/:id",
            get(indicators::get)
                .put(indicators::update)
                .delete(indicators::remove),
        )
}

fn books_routes() -> Router<AppState> {
    use handlers::books;

    Router::new()
        .route("/books", get(books::list).post(books::create))
        .route(
            "/books/:id",
            get(books::get).put(books::update).delete(books::remove),
        )
}

/// Permissive CORS when no origins are configured (development); otherwise
/// the explicit allow-list with credentials, as the deployed front end needs.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    if config.server.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

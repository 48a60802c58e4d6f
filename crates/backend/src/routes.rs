use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::state::AppState;

/// Конфигурация всех роутов приложения
///
/// Everything outside `/api` and `/health` is the SPA: known files from the
/// static dir, `index.html` for any other path so listing URLs like
/// `/cluj-napoca/tenis` load the app.
pub fn configure_routes(state: AppState, static_dir: &Path) -> Router {
    let index = static_dir.join("index.html");

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Listing
        .route("/api/listing", get(handlers::a001_facility::listing))
        .route("/api/url", get(handlers::a001_facility::url))
        .route("/api/seo", get(handlers::a004_seo_page::seo))
        // Catalog
        .route("/api/cities", get(handlers::a003_catalog::cities))
        .route("/api/sports", get(handlers::a003_catalog::sports))
        // Registration
        .route("/api/register", post(handlers::a002_registration::register))
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .with_state(state)
}

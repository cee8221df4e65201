use std::path::Path;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::application::{quote_service::QuoteService, todo_service::TodoService};
use crate::http::routes::{quotes, todos};

/// Both resource routers, unprefixed.
pub fn api<Q, T>(quote_service: Q, todo_service: T) -> Router
where
    Q: QuoteService + Clone + Send + Sync + 'static,
    T: TodoService + Clone + Send + Sync + 'static,
{
    quotes::router(quotes::QuotesState { service: quote_service })
        .merge(todos::router(todos::TodosState { service: todo_service }))
}

/// Mounts `api` under `/api` and serves `static_dir` for every other path,
/// answering with its `index.html` when no file matches.
pub fn app(api: Router, allowed_origins: &[HeaderValue], static_dir: &Path) -> Router {
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", Router::new().route("/health", get(health)).merge(api))
        .fallback_service(spa)
        .layer(cors(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> { Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() })) }

fn cors(allowed_origins: &[HeaderValue]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origins.iter().cloned())
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
}

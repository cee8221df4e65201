#![allow(dead_code)]

use api::application::{quote_service::QuoteServiceImpl, todo_service::TodoServiceImpl};
use api::http::routing;
use api::infrastructure::memory_repo::MemoryStore;
use axum::body::{to_bytes, Body};
use axum::http::HeaderValue;
use axum::Router;
use tempfile::TempDir;

pub const INDEX_HTML: &str = "<!doctype html><title>spa</title>";

/// Hold the whole value for the test's duration; dropping it deletes the static bundle.
pub struct TestApp {
    pub app: Router,
    pub store: MemoryStore,
    _static_dir: TempDir,
}

pub fn spawn_app() -> TestApp { spawn_app_with_origins(&[]) }

pub fn spawn_app_with_origins(origins: &[&str]) -> TestApp {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(static_dir.path().join("app.js"), "console.log('hi')").unwrap();

    let store = MemoryStore::new();
    let origins: Vec<HeaderValue> = origins.iter().map(|o| HeaderValue::from_str(o).unwrap()).collect();
    let api = routing::api(QuoteServiceImpl::new(store.clone()), TodoServiceImpl::new(store.clone()));
    let app = routing::app(api, &origins, static_dir.path());
    TestApp { app, store, _static_dir: static_dir }
}

pub async fn request(app: &Router, method: &str, path: &str, body: Option<serde_json::Value>) -> hyper::Response<Body> {
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    let req = Request::builder().method(Method::from_bytes(method.as_bytes()).unwrap()).uri(path);
    let req = match body {
        Some(json) => req.header("content-type", "application/json").body(Body::from(json.to_string())).unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(req).await.unwrap()
}

pub async fn json_body(res: hyper::Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&to_bytes(res.into_body(), 1024 * 1024).await.unwrap()).unwrap()
}

pub async fn text_body(res: hyper::Response<Body>) -> String {
    String::from_utf8(to_bytes(res.into_body(), 1024 * 1024).await.unwrap().to_vec()).unwrap()
}

mod common;

use common::{json_body, request, spawn_app, TestApp};
use serde_json::json;

#[tokio::test]
async fn acceptance_random_on_empty_then_single() {
    let TestApp { app, .. } = spawn_app();

    let res = request(&app, "GET", "/api/quotes/random", None).await;
    assert_eq!(res.status(), 404);
    assert_eq!(json_body(res).await["error"], "quote not found");

    let res = request(&app, "POST", "/api/quotes", Some(json!({ "text": " Simplicity is prerequisite for reliability. ", "author": "Dijkstra" }))).await;
    assert_eq!(res.status(), 201);
    let created = json_body(res).await;
    assert_eq!(created["text"], "Simplicity is prerequisite for reliability.");
    assert_eq!(created["author"], "Dijkstra");

    for _ in 0..5 {
        let res = request(&app, "GET", "/api/quotes/random", None).await;
        assert_eq!(res.status(), 200);
        assert_eq!(json_body(res).await, created);
    }
}

#[tokio::test]
async fn acceptance_batch_insert_creates_three() {
    let TestApp { app, store, .. } = spawn_app();
    let body = json!({ "quotes": [
        { "text": "first", "author": "A" },
        { "text": "second", "author": "B" },
        { "text": "third" },
    ]});
    let res = request(&app, "POST", "/api/quotes", Some(body)).await;
    assert_eq!(res.status(), 201);

    let created = json_body(res).await;
    let created = created.as_array().unwrap();
    assert_eq!(created.len(), 3);
    for quote in created {
        assert!(quote["_id"].is_string());
        assert!(quote["createdAt"].is_string());
        assert!(quote["updatedAt"].is_string());
    }
    assert_eq!(created[2]["author"], serde_json::Value::Null);
    assert_eq!(store.quote_count(), 3);
}

#[tokio::test]
async fn acceptance_blank_single_quote_creates_nothing() {
    let TestApp { app, store, .. } = spawn_app();
    for body in [json!({ "text": "   ", "author": "x" }), json!({ "author": "x" })] {
        let res = request(&app, "POST", "/api/quotes", Some(body)).await;
        assert_eq!(res.status(), 400);
    }
    assert_eq!(store.quote_count(), 0);
}

#[tokio::test]
async fn acceptance_invalid_batch_creates_nothing() {
    let TestApp { app, store, .. } = spawn_app();

    let res = request(&app, "POST", "/api/quotes", Some(json!({ "quotes": [{ "text": "ok" }, { "text": " " }] }))).await;
    assert_eq!(res.status(), 400);
    assert_eq!(json_body(res).await["error"], "quotes[1].text is required");

    let res = request(&app, "POST", "/api/quotes", Some(json!({ "quotes": [] }))).await;
    assert_eq!(res.status(), 400);

    assert_eq!(store.quote_count(), 0);
}

#[tokio::test]
async fn acceptance_wrong_body_shape_hides_type_details() {
    let TestApp { app, store, .. } = spawn_app();
    let res = request(&app, "POST", "/api/quotes", Some(json!([1, 2]))).await;
    assert_eq!(res.status(), 400);
    let body = json_body(res).await;
    assert_eq!(body, json!({ "error": "invalid request body" }));
    assert!(!body.to_string().contains("QuotePayload"));
    assert_eq!(store.quote_count(), 0);
}

#[tokio::test]
async fn acceptance_quote_ids_are_hex_strings() {
    let TestApp { app, .. } = spawn_app();
    let res = request(&app, "POST", "/api/quotes", Some(json!({ "text": "hex please" }))).await;
    let created = json_body(res).await;
    let id = created["_id"].as_str().unwrap();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
}

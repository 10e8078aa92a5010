use axum::{
    body::Body,
    http::{Request, Response},
};
use routine_api::logging::MemorySink;
use routine_api::AppState;
use serde_json::Value;
use std::sync::Arc;

/// Router wired to an in-memory sink the test can inspect
pub fn setup_test_app() -> (axum::Router, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let state = Arc::new(AppState::with_sink(sink.clone()));

    (routine_api::routes::create_router(state), sink)
}

/// POST a raw body to `uri` as JSON
pub fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub fn post_json(uri: &str, json: &Value) -> Request<Body> {
    post(uri, serde_json::to_vec(json).unwrap())
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

#[allow(dead_code)]
pub fn exercise(name: &str, description: &str) -> Value {
    serde_json::json!({
        "name": name,
        "region": "legs",
        "repetitions": 10,
        "description": description,
    })
}

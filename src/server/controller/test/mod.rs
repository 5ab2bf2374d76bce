//! HTTP-level tests driving the full router against an in-memory database.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


/// Builds the application router over a fresh catalog schema.
///
/// The returned connection shares the router's pool so tests can seed data with
/// factories.
async fn setup() -> (DatabaseConnection, Router) {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();
    let app = router().with_state(AppState::new(db.clone()));

    (db, app)
}

/// Sends one request and returns the status with the parsed JSON body.
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

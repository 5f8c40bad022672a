#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Every [`TestApp`] owns a private in-memory SQLite store with the real
//! schema applied, so tests never see each other's rows.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use plughub_kernel::{AppState, Config, routes};

/// Test application wrapper using the REAL kernel routes and state.
pub struct TestApp {
    router: Router,
    pub db: SqlitePool,
    pub state: AppState,
}

impl TestApp {
    /// Create a test application backed by a fresh in-memory store.
    pub async fn new() -> Self {
        Self::with_config(Config::in_memory()).await
    }

    /// Create a test application from an explicit configuration.
    pub async fn with_config(config: Config) -> Self {
        let state = AppState::new(&config)
            .await
            .expect("Failed to initialize AppState");

        let db = state.db().clone();

        let router = routes::router()
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .with_state(state.clone());

        Self { router, db, state }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET a path and return the status and JSON body.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .request(Request::get(uri).body(Body::empty()).unwrap())
            .await;
        let status = response.status();
        (status, response_json(response).await)
    }

    /// POST a JSON body and return the status and JSON body.
    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.post_raw(uri, &body.to_string()).await
    }

    /// POST a raw string as `application/json`.
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = self
            .request(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await;
        let status = response.status();
        (status, response_json(response).await)
    }

    /// Create a plugin through the API and return its id.
    pub async fn create_plugin(&self, body: &Value) -> i64 {
        let (status, json) = self.post_json("/api/plugins", body).await;
        assert_eq!(status, StatusCode::CREATED, "plugin creation failed: {json}");
        json["pluginId"].as_i64().expect("pluginId missing")
    }

    /// Count rows in a table.
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.db)
            .await
            .expect("Failed to count rows")
    }
}

/// Read a response body as JSON (`Value::Null` when empty or not JSON).
pub async fn response_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

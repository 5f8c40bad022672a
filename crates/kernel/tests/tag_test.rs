#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Tag resolver, linker, and tag listing tests.

use axum::http::StatusCode;

use plughub_kernel::models::{CreatePlugin, Plugin};
use plughub_kernel::tagging::{LinkOutcome, Resolution, link, resolve_tag};
use plughub_test_utils::{assert, test_plugin};

mod common;
use common::TestApp;

async fn insert_plugin(app: &TestApp, name: &str) -> i64 {
    let input = CreatePlugin {
        name: Some(name.to_string()),
        author: Some("tester".to_string()),
        version: Some("0.1.0".to_string()),
        rating: Some(2.5),
        tags: None,
    }
    .validate()
    .unwrap();

    let mut conn = app.db.acquire().await.unwrap();
    Plugin::insert(&mut conn, &input).await.unwrap()
}

#[tokio::test]
async fn resolve_creates_then_reuses() {
    let app = TestApp::new().await;
    let mut conn = app.db.acquire().await.unwrap();

    let first = resolve_tag(&mut conn, "debug").await.unwrap();
    let Resolution::Created(id) = first else {
        panic!("expected a new tag, got {first:?}");
    };

    let second = resolve_tag(&mut conn, "  debug  ").await.unwrap();
    assert_eq!(second, Resolution::Existing(id));
}

#[tokio::test]
async fn resolve_skips_blank_names() {
    let app = TestApp::new().await;
    let mut conn = app.db.acquire().await.unwrap();

    assert_eq!(resolve_tag(&mut conn, "   ").await.unwrap(), Resolution::Skipped);
    drop(conn);

    assert_eq!(app.count("tags").await, 0);
}

#[tokio::test]
async fn link_is_idempotent() {
    let app = TestApp::new().await;
    let plugin_id = insert_plugin(&app, "Linked").await;

    let mut conn = app.db.acquire().await.unwrap();
    let tag_id = resolve_tag(&mut conn, "ui").await.unwrap().tag_id().unwrap();

    assert_eq!(
        link(&mut conn, plugin_id, tag_id).await.unwrap(),
        LinkOutcome::Linked
    );
    assert_eq!(
        link(&mut conn, plugin_id, tag_id).await.unwrap(),
        LinkOutcome::AlreadyLinked
    );
    drop(conn);

    assert_eq!(app.count("plugin_tags").await, 1);
}

#[tokio::test]
async fn link_to_missing_plugin_fails() {
    let app = TestApp::new().await;
    let mut conn = app.db.acquire().await.unwrap();

    let tag_id = resolve_tag(&mut conn, "orphan").await.unwrap().tag_id().unwrap();

    assert!(link(&mut conn, 12345, tag_id).await.is_err());
}

#[tokio::test]
async fn list_tags_orders_by_name() {
    let app = TestApp::new().await;

    app.create_plugin(
        &test_plugin("Tagged")
            .with_tags(&["zeta", "alpha", "mid"])
            .to_json(),
    )
    .await;

    let (status, body) = app.get_json("/api/tags").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        assert::field_values(&body, "name"),
        vec!["alpha", "mid", "zeta"]
    );
    assert!(body[0]["id"].as_i64().is_some());
}

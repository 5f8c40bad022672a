#![allow(clippy::unwrap_used, clippy::expect_used)]
//! FAQ endpoint integration tests.

use axum::http::StatusCode;
use serde_json::json;

use plughub_test_utils::{assert, test_faq};

mod common;
use common::TestApp;

#[tokio::test]
async fn created_faq_appears_in_listing() {
    let app = TestApp::new().await;

    let (status, created) = app
        .post_json(
            "/api/faqs",
            &test_faq("How do I install a plugin?", "Upload it from the dashboard."),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();

    let (status, body) = app.get_json("/api/faqs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{
            "id": id,
            "question": "How do I install a plugin?",
            "answer": "Upload it from the dashboard."
        }])
    );
}

#[tokio::test]
async fn listing_is_in_insertion_order() {
    let app = TestApp::new().await;

    for question in ["Q1", "Q2", "Q3"] {
        app.post_json("/api/faqs", &test_faq(question, "A")).await;
    }

    let (_, body) = app.get_json("/api/faqs").await;
    assert_eq!(assert::field_values(&body, "question"), vec!["Q1", "Q2", "Q3"]);
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = TestApp::new().await;

    for body in [
        json!({ "question": "Only a question" }),
        json!({ "answer": "Only an answer" }),
        json!({ "question": " ", "answer": "Blank question" }),
    ] {
        let (status, response) = app.post_json("/api/faqs", &body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert::is_error(&response);
    }

    assert_eq!(app.count("faqs").await, 0);
}

//! Plughub test utilities.
//!
//! Request-body builders for the plugin, issue, and FAQ endpoints, plus
//! assertion helpers for JSON responses.

use serde_json::{Map, Value as JsonValue, json};

/// Create a plugin-creation request with valid defaults.
pub fn test_plugin(name: &str) -> TestPlugin {
    TestPlugin {
        name: Some(name.to_string()),
        author: Some("test author".to_string()),
        version: Some("1.0.0".to_string()),
        rating: Some(json!(4.0)),
        tags: None,
    }
}

/// A plugin-creation request builder.
///
/// Fields set to `None` are left out of the JSON body entirely.
#[derive(Debug, Clone)]
pub struct TestPlugin {
    pub name: Option<String>,
    pub author: Option<String>,
    pub version: Option<String>,
    pub rating: Option<JsonValue>,
    pub tags: Option<Vec<String>>,
}

impl TestPlugin {
    /// Set the author.
    pub fn with_author(mut self, author: &str) -> Self {
        self.author = Some(author.to_string());
        self
    }

    /// Set a numeric rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(json!(rating));
        self
    }

    /// Set the rating to an arbitrary JSON value.
    pub fn with_raw_rating(mut self, rating: JsonValue) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the tag list.
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Leave a field out of the body.
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "name" => self.name = None,
            "author" => self.author = None,
            "version" => self.version = None,
            "rating" => self.rating = None,
            "tags" => self.tags = None,
            _ => {}
        }
        self
    }

    /// Render the JSON request body.
    pub fn to_json(&self) -> JsonValue {
        let mut body = Map::new();
        if let Some(ref name) = self.name {
            body.insert("name".to_string(), json!(name));
        }
        if let Some(ref author) = self.author {
            body.insert("author".to_string(), json!(author));
        }
        if let Some(ref version) = self.version {
            body.insert("version".to_string(), json!(version));
        }
        if let Some(ref rating) = self.rating {
            body.insert("rating".to_string(), rating.clone());
        }
        if let Some(ref tags) = self.tags {
            body.insert("tags".to_string(), json!(tags));
        }
        JsonValue::Object(body)
    }
}

/// Create an issue-creation request body.
pub fn test_issue(title: &str, severity: Option<&str>, status: Option<&str>) -> JsonValue {
    let mut body = json!({ "title": title });
    if let Some(severity) = severity {
        body["severity"] = json!(severity);
    }
    if let Some(status) = status {
        body["status"] = json!(status);
    }
    body
}

/// Create a FAQ-creation request body.
pub fn test_faq(question: &str, answer: &str) -> JsonValue {
    json!({ "question": question, "answer": answer })
}

/// Assertion helpers for JSON content.
pub mod assert {
    use serde_json::Value;

    /// Assert that a JSON value has a specific key.
    pub fn has_key(value: &Value, key: &str) {
        assert!(
            value.get(key).is_some(),
            "Expected JSON to have key '{key}', got: {value}"
        );
    }

    /// Assert that a JSON body is an error object carrying a message.
    pub fn is_error(value: &Value) {
        assert!(
            value.get("error").and_then(Value::as_str).is_some(),
            "Expected an {{\"error\": ...}} body, got: {value}"
        );
    }

    /// Collect a string field from every element of a JSON array.
    pub fn field_values(value: &Value, field: &str) -> Vec<String> {
        value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get(field).and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

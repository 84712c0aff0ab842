//! Response envelope encoding.
//!
//! # Responsibilities
//! - Collect result fields in insertion order
//! - Serialize them to a JSON body with `Content-Type: application/json`
//! - Fall back to the serializer's error text as a plain body
//!
//! # Design Decisions
//! - Encoding never fails the request; a broken value degrades the body
//! - The fallback is not logged anywhere beyond the body itself

use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered string-keyed result fields.
///
/// Action endpoints set `success`, and `error` only when `success` is false.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResponseEnvelope {
    fields: Map<String, Value>,
}

impl ResponseEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Envelope pre-filled with `success`.
    pub fn success(success: bool) -> Self {
        let mut envelope = Self::new();
        envelope.insert("success", success);
        envelope
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        encode(&self).into_response()
    }
}

/// Encoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedBody {
    /// Serialized JSON.
    Json(Vec<u8>),
    /// Serializer error text, sent as an unstructured body.
    Fallback(String),
}

impl EncodedBody {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            EncodedBody::Json(bytes) => bytes,
            EncodedBody::Fallback(text) => text.as_bytes(),
        }
    }
}

/// Serialize `value` to JSON, degrading to the error text on failure.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> EncodedBody {
    match serde_json::to_vec(value) {
        Ok(bytes) => EncodedBody::Json(bytes),
        Err(e) => EncodedBody::Fallback(e.to_string()),
    }
}

impl IntoResponse for EncodedBody {
    fn into_response(self) -> Response {
        match self {
            EncodedBody::Json(bytes) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
                bytes,
            )
                .into_response(),
            EncodedBody::Fallback(text) => text.into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::collections::BTreeMap;

    #[test]
    fn keeps_insertion_order() {
        let mut envelope = ResponseEnvelope::new();
        envelope
            .insert("running", true)
            .insert("fetch_lock", false)
            .insert("sort_lock", false);

        assert_eq!(
            envelope.keys().collect::<Vec<_>>(),
            vec!["running", "fetch_lock", "sort_lock"]
        );
        assert_eq!(
            encode(&envelope).as_bytes(),
            br#"{"running":true,"fetch_lock":false,"sort_lock":false}"#
        );
    }

    #[test]
    fn mixed_value_types() {
        let mut envelope = ResponseEnvelope::success(true);
        envelope
            .insert("log", vec!["a".to_string(), "b".to_string()])
            .insert("count", 2);

        let value: Value = serde_json::from_slice(encode(&envelope).as_bytes()).unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "log": ["a", "b"], "count": 2}));
    }

    #[test]
    fn non_serializable_value_falls_back_to_error_text() {
        // JSON object keys must be strings.
        let mut broken = BTreeMap::new();
        broken.insert((1, 2), true);

        match encode(&broken) {
            EncodedBody::Fallback(text) => assert!(text.contains("key must be a string")),
            EncodedBody::Json(_) => panic!("tuple keys should not serialize"),
        }
    }

    #[test]
    fn json_response_has_content_type() {
        let response = ResponseEnvelope::success(true).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn fallback_response_is_plain_text() {
        let response = EncodedBody::Fallback("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
    }
}

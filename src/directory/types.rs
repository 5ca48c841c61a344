//! Wire types and error definitions for the content service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the content service.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The configured base URL cannot carry an item path.
    #[error("invalid content service URL '{0}'")]
    InvalidUrl(String),

    /// Network, DNS or connection failure.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON envelope.
    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The outbound body could not be encoded.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type for content service operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// The `{ "data": ... }` envelope every response is wrapped in.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Body of a message creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewMessage {
    #[serde(rename = "for")]
    pub scope: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_single_envelope_tolerates_null_data() {
        let envelope: Envelope<Option<Value>> =
            serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_list_envelope_requires_data() {
        let result = serde_json::from_value::<Envelope<Vec<Value>>>(json!({ "errors": [] }));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_message_wire_shape() {
        let body = NewMessage {
            scope: "Jaar 1 / Team Bliss".into(),
            from: Some("Sam".into()),
            text: Some("hello".into()),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "for": "Jaar 1 / Team Bliss", "from": "Sam", "text": "hello" })
        );

        let anonymous = NewMessage {
            scope: "Jaar 1 / Team Bliss".into(),
            from: None,
            text: Some("hi".into()),
        };
        assert_eq!(
            serde_json::to_value(&anonymous).unwrap(),
            json!({ "for": "Jaar 1 / Team Bliss", "text": "hi" })
        );
    }

    #[test]
    fn test_error_display() {
        let err = DirectoryError::Status {
            url: "https://fdnd.directus.app/items/person/42".into(),
            status: 403,
        };
        assert_eq!(
            err.to_string(),
            "https://fdnd.directus.app/items/person/42 returned status 403"
        );
    }
}

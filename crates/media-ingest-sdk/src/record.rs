//! The media record written by the handler
//!
//! A record comes either from a JSON request body or from a fixed fallback.
//! Field values are stored as text: `year` becomes a numeric attribute in the
//! table, but the handler never checks that it actually is a number.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::error::HandlerError;

/// Year written when the request carries no body
pub const DEFAULT_YEAR: &str = "2012";

/// Title written when the request carries no body
pub const DEFAULT_TITLE: &str = "The Amazing Spider-Man 2";

/// One row in the media table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Partition key
    pub id: String,
    /// Release year, as number text
    pub year: String,
    pub title: String,
}

impl MediaRecord {
    /// Build a record from a parsed JSON body.
    ///
    /// `id`, `year` and `title` must all be present. Strings are taken
    /// verbatim; any other value, `null` included, uses its JSON text.
    ///
    /// # Example
    /// ```ignore
    /// let body = json!({"id": 7, "year": "1999", "title": "The Matrix"});
    /// let record = MediaRecord::from_json(&body)?;
    /// assert_eq!(record.id, "7");
    /// ```
    pub fn from_json(body: &JsonValue) -> Result<Self, HandlerError> {
        let object = body.as_object().ok_or_else(|| {
            HandlerError::MalformedInput("Request body must be a JSON object".into())
        })?;

        let field = |name: &str| -> Result<String, HandlerError> {
            match object.get(name) {
                None => Err(HandlerError::MalformedInput(format!(
                    "Missing required field: {}",
                    name
                ))),
                Some(value) => Ok(coerce_to_string(value)),
            }
        };

        Ok(Self {
            year: field("year")?,
            title: field("title")?,
            id: field("id")?,
        })
    }

    /// The fallback record with a freshly generated id
    pub fn fallback() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            year: DEFAULT_YEAR.to_string(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

/// Text form of a JSON value: raw contents for strings, JSON text otherwise
/// (`null`, `true`, `2012.5`, ...)
pub fn coerce_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The `id` member of a body, if it has one. Only used for logging.
pub fn peek_id(body: &JsonValue) -> Option<String> {
    body.get("id").map(coerce_to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_coerces_fields() {
        let record = MediaRecord::from_json(&json!({
            "id": 42,
            "year": 2014,
            "title": "Interstellar"
        }))
        .unwrap();

        assert_eq!(record.id, "42");
        assert_eq!(record.year, "2014");
        assert_eq!(record.title, "Interstellar");
    }

    #[test]
    fn test_from_json_keeps_strings_verbatim() {
        let record = MediaRecord::from_json(&json!({
            "id": "abc-123",
            "year": "1999",
            "title": "The Matrix",
            "director": "ignored"
        }))
        .unwrap();

        assert_eq!(record.id, "abc-123");
        assert_eq!(record.year, "1999");
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let err = MediaRecord::from_json(&json!({"id": "1", "year": 2000})).unwrap_err();
        assert_eq!(err.kind(), "MalformedInput");
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_null_and_bool_fields_use_json_text() {
        let record =
            MediaRecord::from_json(&json!({"id": true, "year": 2000, "title": null})).unwrap();
        assert_eq!(record.id, "true");
        assert_eq!(record.title, "null");
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        let err = MediaRecord::from_json(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(err.kind(), "MalformedInput");
    }

    #[test]
    fn test_fallback_record() {
        let a = MediaRecord::fallback();
        let b = MediaRecord::fallback();

        assert_eq!(a.year, "2012");
        assert_eq!(a.title, "The Amazing Spider-Man 2");
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_peek_id() {
        assert_eq!(peek_id(&json!({"id": 5})), Some("5".to_string()));
        assert_eq!(peek_id(&json!({"id": null})), Some("null".to_string()));
        assert_eq!(peek_id(&json!({"title": "x"})), None);
        assert_eq!(peek_id(&json!("string body")), None);
    }
}

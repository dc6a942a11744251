//! HTTP Response returned to the API gateway

use std::collections::HashMap;

use aws_lambda_events::encodings::Body;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

pub use aws_lambda_events::event::apigw::ApiGatewayProxyResponse;

/// Body message returned when a record was written.
pub const SUCCESS_MESSAGE: &str = "Successfully inserted data!";

/// Body message returned for every failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Represents an outgoing HTTP response.
///
/// Built by the handler, then converted into [`ApiGatewayProxyResponse`] for
/// the function runtime.
///
/// | Method | Status | Use Case |
/// |--------|--------|----------|
/// | `ok(body)` | 200 | Record written |
/// | `internal_error(msg)` | 500 | Any failure behind the fault barrier |
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code
    pub status_code: u16,

    /// Response headers
    pub headers: HashMap<String, String>,

    /// Response body, already serialized
    pub body: Option<String>,
}

impl Response {
    /// Create a JSON response with a custom status code.
    ///
    /// Always carries `Content-Type: application/json`.
    pub fn json<T: Serialize>(status_code: u16, body: T) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Self {
            status_code,
            headers,
            body: serde_json::to_string(&body).ok(),
        }
    }

    /// Create a 200 OK response with JSON body.
    ///
    /// # Example
    /// ```ignore
    /// Response::ok(json!({"message": SUCCESS_MESSAGE}))
    /// ```
    pub fn ok<T: Serialize>(body: T) -> Self {
        Self::json(200, body)
    }

    /// Create a 500 Internal Server Error response with a `message` body.
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::json(500, serde_json::json!({"message": message.into()}))
    }

    /// Parse the body back into JSON. Mostly useful for assertions.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

impl From<Response> for ApiGatewayProxyResponse {
    fn from(response: Response) -> Self {
        // Invalid header names or values are dropped; every header set in
        // this crate is static ASCII.
        let headers: HeaderMap = response
            .headers
            .iter()
            .filter_map(|(key, value)| {
                let name = HeaderName::from_bytes(key.as_bytes()).ok()?;
                let value = HeaderValue::from_str(value).ok()?;
                Some((name, value))
            })
            .collect();

        let mut proxy = ApiGatewayProxyResponse::default();
        proxy.status_code = i64::from(response.status_code);
        proxy.headers = headers;
        proxy.body = response.body.map(Body::Text);
        proxy
    }
}

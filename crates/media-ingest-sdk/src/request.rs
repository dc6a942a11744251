//! Helpers over the API gateway proxy event
//!
//! Handlers receive [`ApiGatewayProxyRequest`] straight from the function
//! runtime. [`GatewayRequestExt`] adds the two lookups the handler needs.

use base64::Engine;

pub use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;

use crate::error::HandlerError;

/// Source IP reported when the gateway did not supply one.
pub const UNKNOWN_SOURCE_IP: &str = "unknown";

/// Extension methods for [`ApiGatewayProxyRequest`]
pub trait GatewayRequestExt {
    /// Caller IP from `requestContext.identity.sourceIp`, or `"unknown"`.
    fn source_ip(&self) -> &str;

    /// The body as text, decoding base64 if the gateway flagged it.
    ///
    /// Returns `Ok(None)` when the body is absent or empty, so callers can
    /// treat both the same way.
    ///
    /// # Example
    /// ```ignore
    /// match req.body_text()? {
    ///     Some(body) => { /* parse */ }
    ///     None => { /* fallback */ }
    /// }
    /// ```
    fn body_text(&self) -> Result<Option<String>, HandlerError>;
}

impl GatewayRequestExt for ApiGatewayProxyRequest {
    fn source_ip(&self) -> &str {
        self.request_context
            .identity
            .source_ip
            .as_deref()
            .unwrap_or(UNKNOWN_SOURCE_IP)
    }

    fn body_text(&self) -> Result<Option<String>, HandlerError> {
        let body = match self.body.as_deref() {
            Some(body) if !body.is_empty() => body,
            _ => return Ok(None),
        };

        if !self.is_base64_encoded {
            return Ok(Some(body.to_string()));
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(body)
            .map_err(|e| HandlerError::MalformedInput(format!("Invalid base64 body: {}", e)))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| HandlerError::MalformedInput(format!("Body is not UTF-8: {}", e)))?;

        Ok(if text.is_empty() { None } else { Some(text) })
    }
}

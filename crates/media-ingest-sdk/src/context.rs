//! Invocation context passed to handlers

use serde::{Deserialize, Serialize};

/// Per-invocation metadata supplied by the function runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// Runtime-assigned request identifier, used to correlate log lines
    pub request_id: String,
}

impl Context {
    /// Create a context for the given request id
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.request_id)
    }
}

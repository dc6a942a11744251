//! Error types for the media ingest handler

use thiserror::Error;

/// Errors raised by a [`RecordStore`](crate::storage::RecordStore) backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Injected store failure: {0}")]
    Injected(String),
}

/// Errors that can occur while handling a request.
///
/// Both variants collapse to the same opaque 500 response; the detail is
/// only ever written to the log.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Store write failed: {0}")]
    StoreWriteFailure(#[from] StoreError),
}

impl HandlerError {
    /// Name of the variant, used as the `error_kind` log field
    pub fn kind(&self) -> &'static str {
        match self {
            HandlerError::MalformedInput(_) => "MalformedInput",
            HandlerError::StoreWriteFailure(_) => "StoreWriteFailure",
        }
    }

    /// Convert the error to an HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MalformedInput(_) | HandlerError::StoreWriteFailure(_) => 500,
        }
    }

    /// Convert to a Response. The body never carries error detail.
    pub fn to_response(&self) -> crate::Response {
        crate::Response::internal_error(crate::response::INTERNAL_ERROR_MESSAGE)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::MalformedInput(format!("Invalid JSON: {}", err))
    }
}

impl From<HandlerError> for crate::Response {
    fn from(err: HandlerError) -> Self {
        err.to_response()
    }
}

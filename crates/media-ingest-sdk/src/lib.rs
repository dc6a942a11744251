//! Media Ingest SDK - Types and utilities for the media ingest handler
//!
//! This crate provides helpers over the API gateway proxy event, the response
//! handed back to it, the record written per invocation, and the store the
//! record is written to.

pub mod context;
pub mod error;
pub mod record;
pub mod request;
pub mod response;
pub mod storage;

pub mod prelude {
    //! Common imports for handlers
    pub use crate::context::Context;
    pub use crate::error::{HandlerError, StoreError};
    pub use crate::record::MediaRecord;
    pub use crate::request::{ApiGatewayProxyRequest, GatewayRequestExt};
    pub use crate::response::{ApiGatewayProxyResponse, Response};
    pub use crate::storage::{DynamoStore, RecordStore};
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use context::Context;
pub use error::{HandlerError, StoreError};
pub use record::MediaRecord;
pub use request::{ApiGatewayProxyRequest, GatewayRequestExt};
pub use response::{ApiGatewayProxyResponse, Response};
pub use storage::{DynamoStore, MemoryStore, RecordStore};

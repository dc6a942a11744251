//! Record store abstraction
//!
//! Provides a single upsert operation over two backends:
//! - [`DynamoStore`]: a DynamoDB table via the AWS SDK
//! - [`MemoryStore`]: in-process tables, with failure injection for tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;

use crate::error::StoreError;
use crate::record::MediaRecord;

/// A key-value table that accepts media records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert `record`, replacing any existing row with the same `id`
    async fn put_record(&self, table: &str, record: &MediaRecord) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: RecordStore + ?Sized> RecordStore for Arc<S> {
    async fn put_record(&self, table: &str, record: &MediaRecord) -> Result<(), StoreError> {
        (**self).put_record(table, record).await
    }
}

/// DynamoDB-backed store
#[derive(Clone, Debug)]
pub struct DynamoStore {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoStore {
    /// Wrap an already configured client. The client pools its own
    /// connections and is cheap to clone.
    pub fn new(client: aws_sdk_dynamodb::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordStore for DynamoStore {
    #[tracing::instrument(
        name = "dynamodb.put_item",
        skip(self, table, record),
        fields(table = %table, item_id = %record.id)
    )]
    async fn put_record(&self, table: &str, record: &MediaRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(|e| StoreError::Backend(DisplayErrorContext(&e).to_string()))?;

        tracing::debug!("PutItem completed");
        Ok(())
    }
}

/// DynamoDB attribute map for a record: `id` and `title` as strings, `year`
/// as a number
pub fn to_item(record: &MediaRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("year".to_string(), AttributeValue::N(record.year.clone())),
        ("title".to_string(), AttributeValue::S(record.title.clone())),
        ("id".to_string(), AttributeValue::S(record.id.clone())),
    ])
}

#[derive(Default)]
struct MemoryState {
    tables: HashMap<String, HashMap<String, MediaRecord>>,
    writes: usize,
    failure: Option<String>,
}

/// In-memory store. Cloning shares the underlying tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make every subsequent write fail with `message`
    pub fn fail_writes(&self, message: impl Into<String>) {
        self.lock().failure = Some(message.into());
    }

    /// Stop injecting failures
    pub fn heal(&self) {
        self.lock().failure = None;
    }

    /// Number of successful writes across all tables
    pub fn write_count(&self) -> usize {
        self.lock().writes
    }

    /// Look up a record by id
    pub fn get(&self, table: &str, id: &str) -> Option<MediaRecord> {
        self.lock().tables.get(table)?.get(id).cloned()
    }

    /// All records currently in `table`
    pub fn records(&self, table: &str) -> Vec<MediaRecord> {
        self.lock()
            .tables
            .get(table)
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("MemoryStore")
            .field("tables", &state.tables.len())
            .field("writes", &state.writes)
            .field("failing", &state.failure.is_some())
            .finish()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn put_record(&self, table: &str, record: &MediaRecord) -> Result<(), StoreError> {
        let mut state = self.lock();
        if let Some(message) = &state.failure {
            return Err(StoreError::Injected(message.clone()));
        }

        state
            .tables
            .entry(table.to_string())
            .or_default()
            .insert(record.id.clone(), record.clone());
        state.writes += 1;
        Ok(())
    }
}

//! In-memory storage implementation for user records.
//!
//! A `RecordStorage` backend holding records in a HashMap behind an async
//! RwLock. Suited to tests and embedded use; nothing survives process
//! exit.
//!
//! # Performance Characteristics
//!
//! * PUT/GET/DELETE: O(1) average case
//! * UPDATE: O(1) lookup plus O(k) for k assigned fields
//!
//! # Example Usage
//!
//! ```rust
//! use user_store::storage::{InMemoryStorage, RecordStorage};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorage::new();
//!
//! let stored = storage
//!     .put(json!({"id": "user123", "name": "John Doe"}))
//!     .await?;
//! println!("Stored: {}", stored);
//!
//! let retrieved = storage.get("user123").await?;
//! assert!(retrieved.is_some());
//!
//! let was_deleted = storage.delete("user123").await?;
//! assert!(was_deleted);
//! # Ok(())
//! # }
//! ```

use crate::mutation::UpdateExpression;
use crate::storage::{RecordStorage, StorageError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory storage implementation.
///
/// Records are keyed by their `id` attribute. All operations are async and
/// thread-safe using tokio's RwLock: reads run concurrently, and each
/// mutation holds the write lock for its full duration, so an update's
/// assignments never become visible partially.
///
/// Cloning is cheap and every clone shares the same underlying map.
#[derive(Debug, Clone)]
pub struct InMemoryStorage {
    records: Arc<RwLock<HashMap<String, Value>>>,
}

impl InMemoryStorage {
    /// Create a new empty in-memory storage instance.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently stored.
    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Remove all records. Primarily intended for tests.
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStorage for InMemoryStorage {
    type Error = StorageError;

    async fn put(&self, record: Value) -> Result<Value, Self::Error> {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| StorageError::invalid_data("record is missing a string 'id'"))?
            .to_string();

        let mut records = self.records.write().await;
        records.insert(id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<Value>, Self::Error> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn update(&self, expression: &UpdateExpression) -> Result<Option<Value>, Self::Error> {
        let mut records = self.records.write().await;
        let Some(stored) = records.get_mut(expression.target()) else {
            return Ok(None);
        };
        let Some(object) = stored.as_object_mut() else {
            return Err(StorageError::data_corruption(
                expression.target(),
                "stored record is not a JSON object",
            ));
        };
        for (field, value) in expression.resolved_assignments() {
            object.insert(field.to_string(), value.clone());
        }
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, Self::Error> {
        let mut records = self.records.write().await;
        Ok(records.remove(id).is_some())
    }
}

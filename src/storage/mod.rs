//! Storage abstraction layer for user records.
//!
//! This module provides a clean separation between storage concerns and
//! record business logic. The `RecordStorage` trait defines pure data
//! operations keyed by record identifier, allowing pluggable backends
//! while validation, transformation, and response formatting stay in the
//! layers above.
//!
//! # Architecture
//!
//! The storage layer is responsible for:
//! - Atomic PUT/GET/UPDATE/DELETE operations on JSON records
//! - Applying update expressions to exactly the fields they name
//! - Data persistence and retrieval
//!
//! The storage layer is NOT responsible for:
//! - Field validation rules
//! - Password digesting or timestamp generation
//! - Response formatting or status codes
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
//! let record = json!({
//!     "id": "123",
//!     "name": "Ada",
//!     "email": "ada@example.com"
//! });
//! let stored = storage.put(record).await?;
//!
//! let retrieved = storage.get("123").await?;
//! assert!(retrieved.is_some());
//!
//! let was_deleted = storage.delete("123").await?;
//! assert!(was_deleted);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod in_memory;

pub use errors::StorageError;
pub use in_memory::InMemoryStorage;

use crate::mutation::UpdateExpression;
use serde_json::Value;
use std::future::Future;

/// Core trait for storage backends holding user records keyed by id.
///
/// Implementations persist opaque JSON records and apply update
/// expressions without interpreting field semantics. All operations are
/// async and fallible; absence is modelled in the return types
/// (`Option`/`bool`) rather than as an error, so backends reserve their
/// error type for genuine faults.
///
/// # Key Design Decisions
///
/// - **PUT returns stored data**: callers get back exactly what a
///   subsequent `get` would return, without a second round trip.
/// - **UPDATE returns the post-update record**: the caller sees the
///   complete new state after the expression's assignments are applied,
///   or `None` when the target does not exist.
/// - **DELETE returns a boolean**: whether a record was removed, which is
///   what status-code selection needs.
/// - **Record-level atomicity**: an update's assignments must become
///   visible together, never partially.
pub trait RecordStorage: Send + Sync {
    /// The error type returned by storage operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Store a complete record, replacing any record with the same id.
    ///
    /// # Arguments
    /// * `record` - The JSON record to store; must carry a string `id`
    ///
    /// # Returns
    /// The data that was actually stored.
    ///
    /// # Behavior
    /// - An existing record under the same id is completely replaced
    /// - No validation is performed on the record's fields
    fn put(&self, record: Value) -> impl Future<Output = Result<Value, Self::Error>> + Send;

    /// Retrieve a record by id.
    ///
    /// # Returns
    /// `Some(record)` if it exists, `None` if it doesn't.
    fn get(&self, id: &str) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;

    /// Apply an update expression to the record it targets.
    ///
    /// # Arguments
    /// * `expression` - The mutation instruction; carries the target id
    ///
    /// # Returns
    /// `Some(record)` with the complete post-update state, `None` if the
    /// target does not exist.
    ///
    /// # Behavior
    /// - Exactly the fields the expression assigns change; every other
    ///   attribute keeps its stored value
    /// - The assignments become visible atomically at the record level
    fn update(
        &self,
        expression: &UpdateExpression,
    ) -> impl Future<Output = Result<Option<Value>, Self::Error>> + Send;

    /// Delete a record by id.
    ///
    /// # Returns
    /// `true` if a record was deleted, `false` if none existed.
    fn delete(&self, id: &str) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}

//! User record store library for Rust.
//!
//! Provides type-safe, async-first CRUD handling for user records over a
//! pluggable key-value storage backend, built around a partial-update
//! engine that mutates only the fields a request names.
//!
//! # Core Components
//!
//! - [`UserStore`] - Business-logic layer for the five record operations
//! - [`UserOperationHandler`] - Transport-agnostic operation dispatcher
//! - [`RecordStorage`] - Trait for implementing storage backends
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use user_store::{UserOperationHandler, UserStore};
//! use user_store::storage::InMemoryStorage;
//!
//! # async fn example() {
//! let storage = InMemoryStorage::new();
//! let store = UserStore::new(storage);
//! let handler = UserOperationHandler::new(store);
//! # let _ = handler;
//! # }
//! ```

pub mod error;
pub mod fields;
pub mod handlers;
pub mod mutation;
pub mod record;
pub mod storage;
pub mod store;
pub mod transform;

// Re-export commonly used types for convenience
pub use error::{UserStoreError, UserStoreResult};
pub use fields::UserField;
pub use record::{RecordId, RequestContext, UserRecord};
pub use store::UserStore;

// Re-export additional types needed by embedders and advanced usage
pub use handlers::{ApiResponse, OperationRequest, OperationType, UserOperationHandler};
pub use mutation::{MutationRequest, NormalizedFields, UpdateExpression};
pub use storage::{InMemoryStorage, RecordStorage, StorageError};

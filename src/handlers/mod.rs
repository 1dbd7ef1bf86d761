//! Transport-agnostic user operation handling.
//!
//! This module provides structured request/response handling for the five
//! user-record operations without tying them to any transport layer (HTTP,
//! message queue, test harness).
//!
//! # Key Types
//!
//! - [`UserOperationHandler`] - Main handler for dispatching operations
//! - [`OperationRequest`] - Structured request wrapper with builder constructors
//! - [`ApiResponse`] - HTTP-like response with status code, JSON body, and headers
//!
//! # Examples
//!
//! ```rust
//! use user_store::UserStore;
//! use user_store::handlers::{OperationRequest, UserOperationHandler};
//! use user_store::storage::InMemoryStorage;
//! use serde_json::json;
//!
//! # async fn example() {
//! let store = UserStore::new(InMemoryStorage::new());
//! let handler = UserOperationHandler::new(store);
//!
//! let request = OperationRequest::create(json!({
//!     "email": "john.doe@example.com",
//!     "password": "correct!horse1"
//! }));
//! let response = handler.handle_operation(request).await;
//! assert_eq!(response.status_code, 201);
//! # }
//! ```

mod core;
mod crud;
mod response;

// Re-export all public types and functions
pub use core::{OperationRequest, OperationType, UserOperationHandler};

// Re-export the per-operation entry points for callers that route themselves
pub use crud::{handle_create, handle_delete, handle_patch, handle_read, handle_update};

// Re-export response utilities
pub use response::{ApiResponse, error_response};

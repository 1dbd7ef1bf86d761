//! Core operation handler infrastructure
//!
//! This module contains the foundational types and main dispatcher logic for
//! user-record operations. It provides the central handler struct and the
//! operation dispatch that the per-operation handlers plug into.

use crate::UserStore;
use crate::record::RequestContext;
use crate::storage::RecordStorage;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::response::ApiResponse;

/// Framework-agnostic handler for user-record operations
///
/// Dispatches structured requests to the per-operation handlers and turns
/// every outcome, success or failure, into an [`ApiResponse`]. Nothing
/// here assumes a transport; HTTP adapters and test harnesses drive it the
/// same way.
pub struct UserOperationHandler<S: RecordStorage> {
    pub(super) store: UserStore<S>,
}

/// Structured request for user-record operations
///
/// Carries the operation type plus whichever of record id, payload, and
/// request id the operation needs. Built via the constructor methods or as
/// a plain struct literal.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    /// The type of operation to perform
    pub operation: OperationType,
    /// Record ID for operations that target a specific record
    pub record_id: Option<String>,
    /// Data payload for create/update/patch operations
    pub data: Option<Value>,
    /// Request ID for tracing and correlation
    pub request_id: Option<String>,
}

/// Types of operations supported by the handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationType {
    /// Create a new record
    Create,
    /// Get a specific record by ID
    Read,
    /// Replace every updatable field of an existing record
    Update,
    /// Apply a partial update to an existing record
    Patch,
    /// Delete a record
    Delete,
}

impl OperationRequest {
    /// Create a new create operation request.
    pub fn create(data: Value) -> Self {
        Self {
            operation: OperationType::Create,
            record_id: None,
            data: Some(data),
            request_id: None,
        }
    }

    /// Create a new read operation request.
    pub fn read(record_id: impl Into<String>) -> Self {
        Self {
            operation: OperationType::Read,
            record_id: Some(record_id.into()),
            data: None,
            request_id: None,
        }
    }

    /// Create a new full-replace update operation request.
    pub fn update(record_id: impl Into<String>, data: Value) -> Self {
        Self {
            operation: OperationType::Update,
            record_id: Some(record_id.into()),
            data: Some(data),
            request_id: None,
        }
    }

    /// Create a new partial-update operation request.
    pub fn patch(record_id: impl Into<String>, data: Value) -> Self {
        Self {
            operation: OperationType::Patch,
            record_id: Some(record_id.into()),
            data: Some(data),
            request_id: None,
        }
    }

    /// Create a new delete operation request.
    pub fn delete(record_id: impl Into<String>) -> Self {
        Self {
            operation: OperationType::Delete,
            record_id: Some(record_id.into()),
            data: None,
            request_id: None,
        }
    }

    /// Add a request ID to the request.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

impl<S: RecordStorage> UserOperationHandler<S> {
    /// Create a new operation handler over the given store.
    pub fn new(store: UserStore<S>) -> Self {
        Self { store }
    }

    /// Handle a structured operation request.
    ///
    /// This is the main entry point that dispatches to specific operation
    /// handlers based on the operation type. Failures never escape as
    /// errors; they come back as the matching error response.
    pub async fn handle_operation(&self, request: OperationRequest) -> ApiResponse {
        let request_id = request
            .request_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        info!(
            "User operation handler processing {:?} (request: '{}')",
            request.operation, request_id
        );

        let context = RequestContext::new(request_id.clone());

        let result = match request.operation {
            OperationType::Create => super::crud::handle_create(self, request, &context).await,
            OperationType::Read => super::crud::handle_read(self, request, &context).await,
            OperationType::Update => super::crud::handle_update(self, request, &context).await,
            OperationType::Patch => super::crud::handle_patch(self, request, &context).await,
            OperationType::Delete => super::crud::handle_delete(self, request, &context).await,
        };

        match &result {
            Ok(response) => {
                debug!(
                    "User operation handler completed with status {} (request: '{}')",
                    response.status_code, request_id
                );
            }
            Err(e) => {
                warn!(
                    "User operation handler failed: {} (request: '{}')",
                    e, request_id
                );
            }
        }

        result.unwrap_or_else(super::response::error_response)
    }

    /// Get access to the underlying store.
    pub(super) fn store(&self) -> &UserStore<S> {
        &self.store
    }
}

//! Per-operation handlers
//!
//! This module contains the handlers for the create, read, update, patch,
//! and delete operations. Each one unpacks its request, drives the store,
//! and maps the outcome into the structured response shape.

use crate::error::{UserStoreError, UserStoreResult};
use crate::handlers::core::{OperationRequest, UserOperationHandler};
use crate::handlers::response::ApiResponse;
use crate::mutation::MutationRequest;
use crate::record::{RecordId, RequestContext};
use crate::storage::RecordStorage;

/// Handle create operations.
pub async fn handle_create<S: RecordStorage>(
    handler: &UserOperationHandler<S>,
    request: OperationRequest,
    context: &RequestContext,
) -> UserStoreResult<ApiResponse> {
    let data = request
        .data
        .ok_or_else(|| UserStoreError::malformed("Missing data for create operation"))?;

    let record = handler.store().create(data, context).await?;
    Ok(ApiResponse::created(&record))
}

/// Handle read operations.
pub async fn handle_read<S: RecordStorage>(
    handler: &UserOperationHandler<S>,
    request: OperationRequest,
    context: &RequestContext,
) -> UserStoreResult<ApiResponse> {
    let record_id = request
        .record_id
        .ok_or_else(|| UserStoreError::malformed("Missing record id for read operation"))?;
    let id = RecordId::new(record_id)?;

    let record = handler.store().fetch(&id, context).await?;
    ApiResponse::ok_record(&record)
}

/// Handle full-replace update operations.
pub async fn handle_update<S: RecordStorage>(
    handler: &UserOperationHandler<S>,
    request: OperationRequest,
    context: &RequestContext,
) -> UserStoreResult<ApiResponse> {
    let record_id = request
        .record_id
        .ok_or_else(|| UserStoreError::malformed("Missing record id for update operation"))?;
    let data = request
        .data
        .ok_or_else(|| UserStoreError::malformed("Missing data for update operation"))?;

    let target = RecordId::new(record_id)?;
    let mutation = MutationRequest::from_payload(target, data)?;
    let record = handler.store().replace(mutation, context).await?;
    ApiResponse::ok_record(&record)
}

/// Handle partial-update operations.
pub async fn handle_patch<S: RecordStorage>(
    handler: &UserOperationHandler<S>,
    request: OperationRequest,
    context: &RequestContext,
) -> UserStoreResult<ApiResponse> {
    let record_id = request
        .record_id
        .ok_or_else(|| UserStoreError::malformed("Missing record id for patch operation"))?;
    let data = request
        .data
        .ok_or_else(|| UserStoreError::malformed("Missing data for patch operation"))?;

    let target = RecordId::new(record_id)?;
    let mutation = MutationRequest::from_payload(target, data)?;
    let record = handler.store().patch(mutation, context).await?;
    ApiResponse::ok_record(&record)
}

/// Handle delete operations.
pub async fn handle_delete<S: RecordStorage>(
    handler: &UserOperationHandler<S>,
    request: OperationRequest,
    context: &RequestContext,
) -> UserStoreResult<ApiResponse> {
    let record_id = request
        .record_id
        .ok_or_else(|| UserStoreError::malformed("Missing record id for delete operation"))?;
    let id = RecordId::new(record_id)?;

    handler.store().remove(&id, context).await?;
    Ok(ApiResponse::deleted(&id))
}

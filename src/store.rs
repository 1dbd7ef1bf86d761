//! User store with pluggable record storage.
//!
//! This module provides the business-logic layer of the crate. The
//! [`UserStore`] validates and normalizes incoming payloads, assembles
//! complete records on create, and drives partial updates through the
//! update-expression pipeline, while delegating all persistence to a
//! [`RecordStorage`] implementation.
//!
//! # Features
//!
//! * Pluggable storage backends through the `RecordStorage` trait
//! * Whitelist-based field validation with collected error reporting
//! * Password hashing before anything reaches storage
//! * Partial updates that touch only the fields a request names
//! * Timestamp maintenance (`createdAt` on create, `updatedAt` on every write)
//!
//! # Example Usage
//!
//! ```rust
//! use user_store::UserStore;
//! use user_store::record::RequestContext;
//! use user_store::storage::InMemoryStorage;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = UserStore::new(InMemoryStorage::new());
//! let context = RequestContext::with_generated_id();
//!
//! let created = store
//!     .create(
//!         json!({
//!             "name": "John Doe",
//!             "email": "john.doe@example.com",
//!             "password": "correct!horse1"
//!         }),
//!         &context,
//!     )
//!     .await?;
//! assert_eq!(created.name, "John Doe");
//! # Ok(())
//! # }
//! ```

use crate::error::{UserStoreError, UserStoreResult};
use crate::fields::UserField;
use crate::mutation::request::value_kind;
use crate::mutation::{MutationRequest, UpdateExpression, validate_create, validate_patch};
use crate::record::{RecordId, RequestContext, UserRecord};
use crate::storage::RecordStorage;
use crate::transform::current_timestamp;
use log::{debug, info};
use serde_json::Value;

/// Business-logic layer over a pluggable storage backend.
///
/// The store owns no protocol concerns. It accepts JSON payloads, applies
/// the validation and normalization rules, and returns typed records or a
/// [`UserStoreError`] describing exactly what went wrong.
#[derive(Debug, Clone)]
pub struct UserStore<S: RecordStorage> {
    storage: S,
}

impl<S: RecordStorage> UserStore<S> {
    /// Create a new store with the given storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Create a new user record from a client payload.
    ///
    /// The payload must be a JSON object carrying at least a valid `email`
    /// and a strong `password`. Optional `name` and `address` default to
    /// empty strings. The record is assigned a generated identifier and
    /// both timestamps before it is persisted, and the stored state is
    /// returned.
    pub async fn create(
        &self,
        payload: Value,
        context: &RequestContext,
    ) -> UserStoreResult<UserRecord> {
        info!("Creating user record (request: '{}')", context.request_id);

        let Some(fields) = payload.as_object() else {
            return Err(UserStoreError::malformed(format!(
                "Request body must be a JSON object, got {}",
                value_kind(&payload)
            )));
        };
        let mut normalized = validate_create(fields)?;

        let record = UserRecord::new(
            RecordId::generate().into_string(),
            normalized.remove(UserField::Name).unwrap_or_default(),
            normalized.remove(UserField::Email).unwrap_or_default(),
            normalized.remove(UserField::Password).unwrap_or_default(),
            normalized.remove(UserField::Address).unwrap_or_default(),
            current_timestamp(),
        );

        let stored = self
            .storage
            .put(record.to_value()?)
            .await
            .map_err(|e| UserStoreError::internal(format!("Storage error during create: {}", e)))?;
        UserRecord::from_value(stored)
    }

    /// Fetch a single record by identifier.
    pub async fn fetch(
        &self,
        id: &RecordId,
        context: &RequestContext,
    ) -> UserStoreResult<UserRecord> {
        debug!(
            "Reading user record '{}' (request: '{}')",
            id, context.request_id
        );

        let stored = self
            .storage
            .get(id.as_str())
            .await
            .map_err(|e| UserStoreError::internal(format!("Storage error during read: {}", e)))?;
        match stored {
            Some(value) => UserRecord::from_value(value),
            None => {
                debug!("User record '{}' not found", id);
                Err(UserStoreError::not_found(id.as_str()))
            }
        }
    }

    /// Replace every updatable field of an existing record.
    ///
    /// The payload is held to the same rules as [`create`](Self::create),
    /// so `email` and `password` are required, but the record keeps its
    /// identifier and `createdAt`. Returns the complete post-update state.
    pub async fn replace(
        &self,
        request: MutationRequest,
        context: &RequestContext,
    ) -> UserStoreResult<UserRecord> {
        info!(
            "Replacing user record '{}' (request: '{}')",
            request.target(),
            context.request_id
        );

        let (target, fields) = request.into_parts();
        let normalized = validate_create(&fields)?;
        let expression = UpdateExpression::build(target.as_str(), &normalized)?;
        self.apply_update(&target, &expression, "replace").await
    }

    /// Apply a partial update to an existing record.
    ///
    /// Only the fields named in the request are validated and written.
    /// Everything else, `createdAt` included, is left untouched;
    /// `updatedAt` is refreshed. Returns the complete post-update state.
    pub async fn patch(
        &self,
        request: MutationRequest,
        context: &RequestContext,
    ) -> UserStoreResult<UserRecord> {
        info!(
            "Patching user record '{}' (request: '{}')",
            request.target(),
            context.request_id
        );

        let (target, fields) = request.into_parts();
        let normalized = validate_patch(&fields)?;
        let expression = UpdateExpression::build(target.as_str(), &normalized)?;
        self.apply_update(&target, &expression, "patch").await
    }

    /// Delete a record by identifier.
    ///
    /// The record is read first so a missing identifier surfaces as
    /// [`UserStoreError::NotFound`] rather than a silent no-op.
    pub async fn remove(&self, id: &RecordId, context: &RequestContext) -> UserStoreResult<()> {
        info!(
            "Deleting user record '{}' (request: '{}')",
            id, context.request_id
        );

        let existing = self
            .storage
            .get(id.as_str())
            .await
            .map_err(|e| UserStoreError::internal(format!("Storage error during delete: {}", e)))?;
        if existing.is_none() {
            debug!("User record '{}' not found", id);
            return Err(UserStoreError::not_found(id.as_str()));
        }

        self.storage
            .delete(id.as_str())
            .await
            .map_err(|e| UserStoreError::internal(format!("Storage error during delete: {}", e)))?;
        Ok(())
    }

    async fn apply_update(
        &self,
        target: &RecordId,
        expression: &UpdateExpression,
        operation: &str,
    ) -> UserStoreResult<UserRecord> {
        let updated = self.storage.update(expression).await.map_err(|e| {
            UserStoreError::internal(format!("Storage error during {}: {}", operation, e))
        })?;
        match updated {
            Some(value) => UserRecord::from_value(value),
            None => {
                debug!("User record '{}' not found", target);
                Err(UserStoreError::not_found(target.as_str()))
            }
        }
    }
}

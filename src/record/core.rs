//! Core user record structure.

use crate::error::{UserStoreError, UserStoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The persisted user entity.
///
/// Field names serialize in camelCase to match the wire format; the
/// password digest serializes under the wire name `password` (the plaintext
/// never reaches this struct). `id` and `created_at` are set once at
/// creation and never change; `updated_at` is refreshed on every accepted
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// System-assigned identifier, immutable after creation
    pub id: String,
    /// Display name, empty string when never supplied
    pub name: String,
    /// Validated email address
    pub email: String,
    /// Password digest (PHC string), wire name `password`
    #[serde(rename = "password")]
    pub password_digest: String,
    /// Postal address, empty string when never supplied
    pub address: String,
    /// Creation timestamp, immutable
    pub created_at: String,
    /// Last accepted mutation timestamp
    pub updated_at: String,
}

impl UserRecord {
    /// Assemble a fresh record at creation time.
    ///
    /// Both timestamps are set to `timestamp`, so a never-mutated record
    /// has `created_at == updated_at`.
    pub fn new(
        id: String,
        name: String,
        email: String,
        password_digest: String,
        address: String,
        timestamp: String,
    ) -> Self {
        Self {
            id,
            name,
            email,
            password_digest,
            address,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        }
    }

    /// Deserialize a record from its stored JSON representation.
    pub fn from_value(value: Value) -> UserStoreResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| UserStoreError::internal(format!("Stored record is malformed: {}", e)))
    }

    /// Serialize this record to its stored JSON representation.
    pub fn to_value(&self) -> UserStoreResult<Value> {
        serde_json::to_value(self)
            .map_err(|e| UserStoreError::internal(format!("Failed to serialize record: {}", e)))
    }
}

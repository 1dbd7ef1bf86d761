//! RecordId value object for user record identifiers.
//!
//! This module provides a type-safe wrapper around record IDs with built-in
//! validation. Identifiers are assigned by the system at creation time and
//! never accepted from callers for new records.

use crate::error::{UserStoreError, UserStoreResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// A validated user record identifier.
///
/// RecordId enforces validation at construction time, so only non-blank
/// identifiers can exist in the system. New identifiers come from
/// [`RecordId::generate`], which draws a 128-bit random UUID; identifiers
/// arriving on the request path go through [`RecordId::new`].
///
/// ## Examples
///
/// ```rust
/// use user_store::record::RecordId;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let generated = RecordId::generate();
///     assert!(!generated.as_str().is_empty());
///
///     let parsed = RecordId::new("2819c223-7f76-453a-919d-413861904646".to_string())?;
///     println!("Record ID: {}", parsed.as_str());
///
///     let invalid = RecordId::new("".to_string());
///     assert!(invalid.is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new RecordId with validation.
    ///
    /// # Arguments
    ///
    /// * `value` - The string value to validate and wrap
    ///
    /// # Returns
    ///
    /// * `Ok(RecordId)` - If the value is valid
    /// * `Err(UserStoreError)` - If the value is empty or whitespace-only
    pub fn new(value: String) -> UserStoreResult<Self> {
        Self::validate_format(&value)?;
        Ok(Self(value))
    }

    /// Generate a fresh random identifier.
    ///
    /// Produces a UUID v4 in canonical hyphenated form. Never derived from
    /// input; collision probability is negligible.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string representation of the RecordId.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the owned string value of the RecordId.
    pub fn into_string(self) -> String {
        self.0
    }

    fn validate_format(value: &str) -> UserStoreResult<()> {
        if value.trim().is_empty() {
            return Err(UserStoreError::malformed(
                "Record identifier cannot be empty",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Convert from String to RecordId with validation.
impl TryFrom<String> for RecordId {
    type Error = UserStoreError;

    fn try_from(value: String) -> UserStoreResult<Self> {
        Self::new(value)
    }
}

/// Convert from &str to RecordId with validation.
impl TryFrom<&str> for RecordId {
    type Error = UserStoreError;

    fn try_from(value: &str) -> UserStoreResult<Self> {
        Self::new(value.to_string())
    }
}

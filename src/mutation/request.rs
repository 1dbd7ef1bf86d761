//! Mutation request: a sparse field map bound to a target record.

use crate::error::{UserStoreError, UserStoreResult};
use crate::record::RecordId;
use serde_json::{Map, Value};

/// A caller's intent to change specific fields of one record.
///
/// Constructed from an inbound payload, validated, then consumed once to
/// build a storage instruction. The field map holds raw, unvalidated
/// values; only the validation pipeline turns it into something storage
/// may see.
#[derive(Debug, Clone)]
pub struct MutationRequest {
    target: RecordId,
    fields: Map<String, Value>,
}

impl MutationRequest {
    /// Create a mutation request from an already-shaped field map.
    pub fn new(target: RecordId, fields: Map<String, Value>) -> Self {
        Self { target, fields }
    }

    /// Create a mutation request from a raw payload value.
    ///
    /// # Returns
    ///
    /// * `Ok(MutationRequest)` - If the payload is a JSON object
    /// * `Err(UserStoreError::MalformedRequest)` - For any other JSON shape
    pub fn from_payload(target: RecordId, payload: Value) -> UserStoreResult<Self> {
        match payload {
            Value::Object(fields) => Ok(Self::new(target, fields)),
            other => Err(UserStoreError::malformed(format!(
                "Request body must be a JSON object, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// The record this mutation targets.
    pub fn target(&self) -> &RecordId {
        &self.target
    }

    /// The raw field map as supplied by the caller.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Split the request into its target and field map.
    pub fn into_parts(self) -> (RecordId, Map<String, Value>) {
        (self.target, self.fields)
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Request validation pipeline.
//!
//! The pipeline walks whichever fields a payload supplies, runs the
//! matching validators, and either accepts the whole request or rejects it
//! with the complete list of violations. Accept-all-or-reject-all is the
//! contract: storage is never touched by a request with any failing field,
//! and a caller always sees every violated rule in one response.
//!
//! Accepted passwords leave the pipeline as digests; no plaintext survives
//! normalization.

use crate::error::{UserStoreError, UserStoreResult};
use crate::fields::{UserField, is_system_key, validate_email, validate_password};
use crate::transform::hash_password;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Which rule set applies to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Email and password are mandatory; name and address may be empty
    Create,
    /// All fields optional; supplied name and address must be non-empty
    Patch,
}

/// The accepted, normalized output of the validation pipeline.
///
/// Holds only whitelisted fields with validated values, passwords already
/// replaced by their digests. Iteration order is the canonical field
/// order, which keeps built expressions deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFields(BTreeMap<UserField, String>);

impl NormalizedFields {
    /// Create an empty field map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field's normalized value.
    pub fn insert(&mut self, field: UserField, value: String) {
        self.0.insert(field, value);
    }

    /// Get a field's normalized value.
    pub fn get(&self, field: UserField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Remove and return a field's normalized value.
    pub fn remove(&mut self, field: UserField) -> Option<String> {
        self.0.remove(&field)
    }

    /// Whether no fields were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of supplied fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate fields in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (UserField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

/// Validate a create payload: email and password are mandatory.
pub fn validate_create(payload: &Map<String, Value>) -> UserStoreResult<NormalizedFields> {
    validate_fields(payload, ValidationMode::Create)
}

/// Validate a patch payload: every field is optional, present ones must pass.
pub fn validate_patch(payload: &Map<String, Value>) -> UserStoreResult<NormalizedFields> {
    validate_fields(payload, ValidationMode::Patch)
}

/// Run the validation pipeline over a payload.
///
/// # Behavior
///
/// 1. Every payload key is classified: system-managed keys (`id`,
///    `createdAt`, `updatedAt`) are immutable, keys outside the whitelist
///    are unrecognized, recognized keys must carry string values.
/// 2. Mode rules run over the present fields (and, in create mode, over
///    the mandatory absent ones).
/// 3. Checking never short-circuits: the error list covers every field.
/// 4. Only when the list is empty are passwords digested and the
///    normalized map returned.
pub fn validate_fields(
    payload: &Map<String, Value>,
    mode: ValidationMode,
) -> UserStoreResult<NormalizedFields> {
    let mut errors = Vec::new();
    let mut accepted: BTreeMap<UserField, String> = BTreeMap::new();

    for (key, value) in payload {
        if is_system_key(key) {
            errors.push(format!("Field '{}' is immutable and cannot be updated", key));
            continue;
        }
        let Some(field) = UserField::parse(key) else {
            errors.push(format!("Unrecognized field '{}'", key));
            continue;
        };
        match value.as_str() {
            Some(text) => {
                accepted.insert(field, text.to_string());
            }
            None => errors.push(format!("Field '{}' must be a string", key)),
        }
    }

    match mode {
        ValidationMode::Create => {
            // One message covers both the absent and the malformed case,
            // but a non-string email already reported a type error above.
            match accepted.get(&UserField::Email) {
                Some(email) if validate_email(email) => {}
                Some(_) => errors.push("Invalid or missing email".to_string()),
                None if !payload.contains_key(UserField::Email.as_str()) => {
                    errors.push("Invalid or missing email".to_string())
                }
                None => {}
            }
            match accepted.get(&UserField::Password) {
                Some(password) if validate_password(password) => {}
                Some(_) => errors.push(
                    "Password must have at least 8 characters and one special character"
                        .to_string(),
                ),
                None if !payload.contains_key(UserField::Password.as_str()) => {
                    errors.push("Password is missing".to_string())
                }
                None => {}
            }
        }
        ValidationMode::Patch => {
            if let Some(email) = accepted.get(&UserField::Email) {
                if !validate_email(email) {
                    errors.push("Invalid email format".to_string());
                }
            }
            if let Some(password) = accepted.get(&UserField::Password) {
                if !validate_password(password) {
                    errors.push(
                        "Password must have at least 8 characters and one special character"
                            .to_string(),
                    );
                }
            }
            if let Some(name) = accepted.get(&UserField::Name) {
                if name.trim().is_empty() {
                    errors.push("Name cannot be empty".to_string());
                }
            }
            if let Some(address) = accepted.get(&UserField::Address) {
                if address.trim().is_empty() {
                    errors.push("Address cannot be empty".to_string());
                }
            }
        }
    }

    if !errors.is_empty() {
        return Err(UserStoreError::validation(errors));
    }

    let mut fields = NormalizedFields(accepted);
    if let Some(plaintext) = fields.remove(UserField::Password) {
        fields.insert(UserField::Password, hash_password(&plaintext)?);
    }
    Ok(fields)
}

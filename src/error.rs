//! Error types for user-store operations.
//!
//! One taxonomy covers the validation pipeline, the storage layer, and the
//! operation handlers; each variant maps to a single caller-visible
//! failure class.

/// Main error type for user-store operations.
///
/// Each variant corresponds to one caller-visible failure class: the
/// operation handlers map these onto status codes (400, 404, 500) when
/// formatting a response.
#[derive(Debug, thiserror::Error)]
pub enum UserStoreError {
    /// One or more field-level rule violations.
    ///
    /// Always carries the complete list of violated rules, never just the
    /// first. User-correctable.
    #[error("Validation failed: {}", errors.join("; "))]
    Validation {
        /// Every violated rule, in the order the fields were checked
        errors: Vec<String>,
    },

    /// No record exists for the requested identifier
    #[error("Record not found: {id}")]
    NotFound {
        /// The identifier that had no record
        id: String,
    },

    /// The request payload is not a field map at all
    #[error("Malformed request: {message}")]
    MalformedRequest {
        /// What was wrong with the payload shape
        message: String,
    },

    /// Collaborator failure or unexpected fault
    #[error("Internal error: {message}")]
    Internal {
        /// Sanitized description; never a backtrace
        message: String,
    },
}

// Convenience methods for creating common errors
impl UserStoreError {
    /// Create a validation error from an accumulated rule list
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// Create a not-found error for an identifier
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a malformed-request error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The rule list for validation errors, empty for every other variant
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Self::Validation { errors } => errors,
            _ => &[],
        }
    }
}

/// Result type alias for user-store operations
pub type UserStoreResult<T> = Result<T, UserStoreError>;

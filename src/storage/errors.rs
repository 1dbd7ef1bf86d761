//! Storage-specific error types for pure data operations.
//!
//! These errors represent failures in the storage layer and carry no
//! knowledge of validation rules or response formatting. The store layer
//! converts them into the crate error before they reach a caller.

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Data handed to storage cannot be persisted as given
    #[error("Invalid data: {message}")]
    InvalidData {
        /// What made the data unstorable
        message: String,
    },

    /// Stored data no longer has the expected shape
    #[error("Data corruption in record {id}: {details}")]
    DataCorruption {
        /// The record whose stored form is unusable
        id: String,
        /// What was wrong with it
        details: String,
    },

    /// Storage backend is temporarily unavailable
    #[error("Storage unavailable: {message}")]
    Unavailable {
        /// Backend-reported reason
        message: String,
    },

    /// Generic internal storage error
    #[error("Internal storage error: {message}")]
    Internal {
        /// Backend-reported reason
        message: String,
    },
}

impl StorageError {
    /// Create a new InvalidData error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a new DataCorruption error.
    pub fn data_corruption(id: impl Into<String>, details: impl Into<String>) -> Self {
        Self::DataCorruption {
            id: id.into(),
            details: details.into(),
        }
    }

    /// Create a new Unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a new Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error indicates a temporary failure that might
    /// succeed on retry.
    pub fn is_temporary(&self) -> bool {
        matches!(self, StorageError::Unavailable { .. })
    }
}

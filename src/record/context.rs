//! Request context for user-store operations.
//!
//! Provides request tracking for logging and auditing purposes.

use uuid::Uuid;

/// Request context carried through every operation.
///
/// The request id appears in every log line an operation emits, which is
/// what makes interleaved logs attributable to their requests.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request
    pub request_id: String,
}

impl RequestContext {
    /// Create a new request context with a specific request ID.
    pub fn new(request_id: String) -> Self {
        Self { request_id }
    }

    /// Create a new request context with a generated request ID.
    pub fn with_generated_id() -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_generated_id()
    }
}

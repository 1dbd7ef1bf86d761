//! Response formatting for operation handlers
//!
//! This module contains the structured response type and the shared
//! error-to-response mapping used across all operation handlers. Status
//! codes follow HTTP conventions so a transport adapter can pass them
//! through unchanged.

use crate::error::{UserStoreError, UserStoreResult};
use crate::record::{RecordId, UserRecord};
use serde_json::{Value, json};
use std::collections::HashMap;

/// Structured response from user-record operations
///
/// This type provides a consistent response format across all operation
/// types and transport layers.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP-equivalent status code
    pub status_code: u16,
    /// JSON response body
    pub body: Value,
    /// Response headers
    pub headers: HashMap<String, String>,
}

impl ApiResponse {
    /// Create a response with the given status code and body.
    ///
    /// Every response carries a `Content-Type: application/json` header.
    pub fn new(status_code: u16, body: Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            status_code,
            body,
            headers,
        }
    }

    /// 200 response carrying a complete record.
    pub fn ok_record(record: &UserRecord) -> UserStoreResult<Self> {
        Ok(Self::new(200, record.to_value()?))
    }

    /// 201 response for a successful create.
    pub fn created(record: &UserRecord) -> Self {
        Self::new(
            201,
            json!({"id": record.id, "message": "User created successfully"}),
        )
    }

    /// 200 response for a successful delete.
    pub fn deleted(id: &RecordId) -> Self {
        Self::new(200, json!({"message": format!("User ID {} deleted", id)}))
    }

    /// Serialize the body for a transport that wants a wire string.
    pub fn body_string(&self) -> String {
        self.body.to_string()
    }
}

/// Map an error to its response shape.
///
/// Validation failures enumerate every violated rule; everything else
/// carries a single human-readable message. Internal failures expose the
/// error's display string as `details`, never a backtrace.
pub fn error_response(error: UserStoreError) -> ApiResponse {
    match error {
        UserStoreError::Validation { errors } => ApiResponse::new(400, json!({"errors": errors})),
        UserStoreError::NotFound { .. } => {
            ApiResponse::new(404, json!({"message": "User not found"}))
        }
        UserStoreError::MalformedRequest { message } => {
            ApiResponse::new(400, json!({"message": message}))
        }
        UserStoreError::Internal { message } => ApiResponse::new(
            500,
            json!({"message": "Internal server error", "details": message}),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::current_timestamp;

    fn sample_record() -> UserRecord {
        UserRecord::new(
            "rec-1".to_string(),
            "Ada Lovelace".to_string(),
            "ada@example.com".to_string(),
            "$argon2id$stub".to_string(),
            "12 St James's Square".to_string(),
            current_timestamp(),
        )
    }

    #[test]
    fn test_every_response_is_json() {
        let response = ApiResponse::new(200, json!({"message": "ok"}));
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_ok_record_response() {
        let record = sample_record();
        let response = ApiResponse::ok_record(&record).unwrap();

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body.get("id"), Some(&json!("rec-1")));
        assert_eq!(response.body.get("password"), Some(&json!("$argon2id$stub")));
        assert!(response.body.get("password_digest").is_none());
    }

    #[test]
    fn test_created_response() {
        let response = ApiResponse::created(&sample_record());
        assert_eq!(response.status_code, 201);
        assert_eq!(
            response.body,
            json!({"id": "rec-1", "message": "User created successfully"})
        );
    }

    #[test]
    fn test_deleted_response() {
        let id = RecordId::new("rec-9".to_string()).unwrap();
        let response = ApiResponse::deleted(&id);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, json!({"message": "User ID rec-9 deleted"}));
    }

    #[test]
    fn test_validation_error_response() {
        let error = UserStoreError::validation(vec![
            "Invalid email format".to_string(),
            "Name cannot be empty".to_string(),
        ]);
        let response = error_response(error);

        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body,
            json!({"errors": ["Invalid email format", "Name cannot be empty"]})
        );
    }

    #[test]
    fn test_not_found_response() {
        let response = error_response(UserStoreError::not_found("rec-1"));
        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, json!({"message": "User not found"}));
    }

    #[test]
    fn test_malformed_request_response() {
        let response = error_response(UserStoreError::malformed(
            "Request body must be a JSON object, got an array",
        ));
        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.body,
            json!({"message": "Request body must be a JSON object, got an array"})
        );
    }

    #[test]
    fn test_internal_error_response() {
        let response = error_response(UserStoreError::internal("storage unavailable"));
        assert_eq!(response.status_code, 500);
        assert_eq!(
            response.body,
            json!({"message": "Internal server error", "details": "storage unavailable"})
        );
    }

    #[test]
    fn test_body_string_is_serialized_json() {
        let response = ApiResponse::new(200, json!({"message": "ok"}));
        assert_eq!(response.body_string(), r#"{"message":"ok"}"#);
    }
}

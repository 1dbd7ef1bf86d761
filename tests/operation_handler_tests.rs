//! End-to-end tests for the user operation handler.
//!
//! These tests drive the transport-agnostic dispatcher against the bundled
//! in-memory storage, covering the full record lifecycle and the response
//! contract for every failure class.

use serde_json::{Value, json};
use user_store::UserStore;
use user_store::handlers::{OperationRequest, UserOperationHandler};
use user_store::storage::InMemoryStorage;

fn handler() -> UserOperationHandler<InMemoryStorage> {
    UserOperationHandler::new(UserStore::new(InMemoryStorage::new()))
}

fn sample_create_payload() -> Value {
    json!({
        "name": "John Doe",
        "email": "john.doe@example.com",
        "password": "correct!horse1",
        "address": "1 Main St"
    })
}

async fn create_user(handler: &UserOperationHandler<InMemoryStorage>) -> String {
    let response = handler
        .handle_operation(OperationRequest::create(sample_create_payload()))
        .await;
    assert_eq!(response.status_code, 201);
    response.body["id"]
        .as_str()
        .expect("create response carries an id")
        .to_string()
}

async fn read_user(handler: &UserOperationHandler<InMemoryStorage>, id: &str) -> Value {
    let response = handler.handle_operation(OperationRequest::read(id)).await;
    assert_eq!(response.status_code, 200);
    response.body
}

#[tokio::test]
async fn test_create_returns_fresh_id_and_message() {
    let handler = handler();

    let response = handler
        .handle_operation(OperationRequest::create(sample_create_payload()))
        .await;

    assert_eq!(response.status_code, 201);
    assert_eq!(response.body["message"], json!("User created successfully"));
    assert!(!response.body["id"].as_str().unwrap().is_empty());
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_create_stores_digested_password_with_equal_timestamps() {
    let handler = handler();

    // Name and address are optional on create
    let response = handler
        .handle_operation(OperationRequest::create(json!({
            "email": "minimal@example.com",
            "password": "minimal!pass"
        })))
        .await;
    assert_eq!(response.status_code, 201);
    let id = response.body["id"].as_str().unwrap().to_string();

    let stored = read_user(&handler, &id).await;
    assert_eq!(stored["email"], json!("minimal@example.com"));
    assert_eq!(stored["name"], json!(""));
    assert_eq!(stored["address"], json!(""));
    assert_eq!(stored["createdAt"], stored["updatedAt"]);

    let digest = stored["password"].as_str().unwrap();
    assert!(digest.starts_with("$argon2"));
    assert_ne!(digest, "minimal!pass");
}

#[tokio::test]
async fn test_create_collects_every_validation_error() {
    let handler = handler();

    let response = handler
        .handle_operation(OperationRequest::create(json!({
            "email": "bad",
            "password": "short"
        })))
        .await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body,
        json!({"errors": [
            "Invalid or missing email",
            "Password must have at least 8 characters and one special character"
        ]})
    );
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn test_create_rejects_non_object_body() {
    let handler = handler();

    let response = handler
        .handle_operation(OperationRequest::create(json!([1, 2, 3])))
        .await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body,
        json!({"message": "Request body must be a JSON object, got an array"})
    );
}

#[tokio::test]
async fn test_read_missing_user() {
    let handler = handler();

    let response = handler
        .handle_operation(OperationRequest::read("ghost"))
        .await;

    assert_eq!(response.status_code, 404);
    assert_eq!(response.body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn test_patch_updates_only_named_fields() {
    let handler = handler();
    let id = create_user(&handler).await;
    let before = read_user(&handler, &id).await;

    let response = handler
        .handle_operation(OperationRequest::patch(
            id.clone(),
            json!({"address": "221B Baker Street"}),
        ))
        .await;
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body["address"], json!("221B Baker Street"));

    let after = read_user(&handler, &id).await;
    assert_eq!(after["id"], before["id"]);
    assert_eq!(after["name"], before["name"]);
    assert_eq!(after["email"], before["email"]);
    assert_eq!(after["password"], before["password"]);
    assert_eq!(after["createdAt"], before["createdAt"]);
    assert_eq!(after["address"], json!("221B Baker Street"));
    assert!(after["updatedAt"].as_str().unwrap() > before["updatedAt"].as_str().unwrap());
}

#[tokio::test]
async fn test_patch_reports_missing_user() {
    let handler = handler();

    let response = handler
        .handle_operation(OperationRequest::patch("ghost", json!({"name": "Nobody"})))
        .await;

    assert_eq!(response.status_code, 404);
    assert_eq!(response.body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn test_patch_rejects_empty_payload() {
    let handler = handler();
    let id = create_user(&handler).await;

    let response = handler
        .handle_operation(OperationRequest::patch(id, json!({})))
        .await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body,
        json!({"errors": ["Update payload must include at least one updatable field"]})
    );
}

#[tokio::test]
async fn test_patch_rejects_immutable_and_unknown_keys() {
    let handler = handler();
    let id = create_user(&handler).await;

    let response = handler
        .handle_operation(OperationRequest::patch(
            id,
            json!({"createdAt": "2020-01-01T00:00:00Z", "role": "admin"}),
        ))
        .await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body,
        json!({"errors": [
            "Field 'createdAt' is immutable and cannot be updated",
            "Unrecognized field 'role'"
        ]})
    );
}

#[tokio::test]
async fn test_patch_validates_only_present_fields() {
    let handler = handler();
    let id = create_user(&handler).await;

    let response = handler
        .handle_operation(OperationRequest::patch(
            id.clone(),
            json!({"email": "not-an-email"}),
        ))
        .await;
    assert_eq!(response.status_code, 400);
    assert_eq!(response.body, json!({"errors": ["Invalid email format"]}));

    let response = handler
        .handle_operation(OperationRequest::patch(
            id.clone(),
            json!({"name": "   ", "address": ""}),
        ))
        .await;
    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body,
        json!({"errors": ["Name cannot be empty", "Address cannot be empty"]})
    );

    // The rejected patches left the record untouched
    let stored = read_user(&handler, &id).await;
    assert_eq!(stored["email"], json!("john.doe@example.com"));
    assert_eq!(stored["name"], json!("John Doe"));
}

#[tokio::test]
async fn test_patch_hashes_new_password() {
    let handler = handler();
    let id = create_user(&handler).await;
    let before = read_user(&handler, &id).await;

    let response = handler
        .handle_operation(OperationRequest::patch(
            id,
            json!({"password": "new!password9"}),
        ))
        .await;
    assert_eq!(response.status_code, 200);

    let digest = response.body["password"].as_str().unwrap();
    assert!(digest.starts_with("$argon2"));
    assert_ne!(digest, "new!password9");
    assert_ne!(response.body["password"], before["password"]);
}

#[tokio::test]
async fn test_update_replaces_all_fields_and_keeps_identity() {
    let handler = handler();
    let id = create_user(&handler).await;
    let before = read_user(&handler, &id).await;

    let response = handler
        .handle_operation(OperationRequest::update(
            id.clone(),
            json!({
                "name": "Jane Doe",
                "email": "jane.doe@example.com",
                "password": "different!horse2",
                "address": "2 Main St"
            }),
        ))
        .await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body["id"], before["id"]);
    assert_eq!(response.body["createdAt"], before["createdAt"]);
    assert_eq!(response.body["name"], json!("Jane Doe"));
    assert_eq!(response.body["email"], json!("jane.doe@example.com"));
    assert_eq!(response.body["address"], json!("2 Main St"));
    assert_ne!(response.body["password"], before["password"]);
    assert!(
        response.body["updatedAt"].as_str().unwrap() > before["updatedAt"].as_str().unwrap()
    );
}

#[tokio::test]
async fn test_update_requires_mandatory_fields() {
    let handler = handler();
    let id = create_user(&handler).await;

    let response = handler
        .handle_operation(OperationRequest::update(id, json!({"name": "Jane Doe"})))
        .await;

    assert_eq!(response.status_code, 400);
    assert_eq!(
        response.body,
        json!({"errors": ["Invalid or missing email", "Password is missing"]})
    );
}

#[tokio::test]
async fn test_delete_then_read() {
    let handler = handler();
    let id = create_user(&handler).await;

    let response = handler
        .handle_operation(OperationRequest::delete(id.clone()))
        .await;
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body,
        json!({"message": format!("User ID {} deleted", id)})
    );

    let response = handler
        .handle_operation(OperationRequest::read(id.clone()))
        .await;
    assert_eq!(response.status_code, 404);

    // A second delete reports the record as gone
    let response = handler.handle_operation(OperationRequest::delete(id)).await;
    assert_eq!(response.status_code, 404);
    assert_eq!(response.body, json!({"message": "User not found"}));
}

#[tokio::test]
async fn test_concurrent_patches_to_different_fields_both_land() {
    let handler = handler();
    let id = create_user(&handler).await;

    let patches = vec![
        handler.handle_operation(OperationRequest::patch(
            id.clone(),
            json!({"name": "Left Writer"}),
        )),
        handler.handle_operation(OperationRequest::patch(
            id.clone(),
            json!({"address": "Right Street"}),
        )),
    ];
    let results = futures::future::join_all(patches).await;

    for response in &results {
        assert_eq!(response.status_code, 200);
    }

    let stored = read_user(&handler, &id).await;
    assert_eq!(stored["name"], json!("Left Writer"));
    assert_eq!(stored["address"], json!("Right Street"));
}

#[tokio::test]
async fn test_request_id_is_accepted_for_correlation() {
    let handler = handler();

    let response = handler
        .handle_operation(
            OperationRequest::create(sample_create_payload()).with_request_id("req-e2e-1"),
        )
        .await;

    assert_eq!(response.status_code, 201);
}

#[tokio::test]
async fn test_full_lifecycle() {
    let handler = handler();

    // Create
    let id = create_user(&handler).await;

    // Read
    let stored = read_user(&handler, &id).await;
    assert_eq!(stored["name"], json!("John Doe"));

    // Patch
    let response = handler
        .handle_operation(OperationRequest::patch(
            id.clone(),
            json!({"name": "John Q. Doe"}),
        ))
        .await;
    assert_eq!(response.status_code, 200);

    // Replace
    let response = handler
        .handle_operation(OperationRequest::update(
            id.clone(),
            json!({
                "name": "John Q. Doe",
                "email": "john.q.doe@example.com",
                "password": "rotated!pass3",
                "address": "3 Main St"
            }),
        ))
        .await;
    assert_eq!(response.status_code, 200);

    // Delete
    let response = handler
        .handle_operation(OperationRequest::delete(id.clone()))
        .await;
    assert_eq!(response.status_code, 200);

    let response = handler.handle_operation(OperationRequest::read(id)).await;
    assert_eq!(response.status_code, 404);
}

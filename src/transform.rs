//! Field transformers: password digests and timestamp generation.
//!
//! Transformers derive the storage-safe representation of sensitive or
//! system-managed fields. They run only after validation has accepted a
//! request, so inputs here are already known to be well-formed.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};

use crate::error::{UserStoreError, UserStoreResult};

/// Hash a password into its storage digest using argon2id.
///
/// The salt is derived from the plaintext itself (SHA-256, truncated to 16
/// bytes), so equal plaintexts always produce equal digests while distinct
/// plaintexts get distinct salts. Re-submitting the same password is
/// therefore idempotent at the storage layer. Output is a PHC-format
/// string.
pub fn hash_password(plaintext: &str) -> UserStoreResult<String> {
    let salt = derive_salt(plaintext)?;
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| UserStoreError::internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a candidate password against a stored digest.
pub fn verify_password(plaintext: &str, digest: &str) -> UserStoreResult<bool> {
    let parsed = PasswordHash::new(digest)
        .map_err(|e| UserStoreError::internal(format!("Invalid password digest: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok())
}

/// Current UTC wall-clock time as RFC 3339 with microsecond resolution.
///
/// Lexicographic order on these strings matches chronological order, which
/// keeps `createdAt`/`updatedAt` comparable as plain text.
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

// The salt is the first 16 bytes of SHA-256(plaintext), keeping the digest
// deterministic per plaintext.
fn derive_salt(plaintext: &str) -> UserStoreResult<SaltString> {
    let digest = Sha256::digest(plaintext.as_bytes());
    SaltString::encode_b64(&digest[..16])
        .map_err(|e| UserStoreError::internal(format!("Failed to derive salt: {}", e)))
}

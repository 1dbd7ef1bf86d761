//! User record model: the persisted entity and its identity.
//!
//! This module provides the record abstraction shared by the validation
//! pipeline, the storage layer, and the operation handlers.
//!
//! # Key Components
//!
//! * [`UserRecord`] - The persisted user entity with camelCase wire names
//! * [`RecordId`] - Validated record identifier with random generation
//! * [`RequestContext`] - Request tracking for logging and auditing

pub mod context;
pub mod core;
pub mod id;

pub use context::RequestContext;
pub use core::UserRecord;
pub use id::RecordId;

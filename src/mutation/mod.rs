//! The partial-update engine: validation pipeline and expression builder.
//!
//! This module is the core of the crate. It reconciles sparse caller input
//! with whole-record storage: a request names only the fields it wants to
//! change, the pipeline validates exactly those fields (collecting every
//! violation, not just the first), and the expression builder turns the
//! accepted map into a storage instruction that touches nothing else.
//!
//! # Key Components
//!
//! * [`MutationRequest`] - A sparse field map bound to a target identifier
//! * [`ValidationMode`] - Create-mode (mandatory fields) vs patch-mode rules
//! * [`NormalizedFields`] - The accepted, transformed output of validation
//! * [`UpdateExpression`] - The placeholder-indirected mutation instruction
//!
//! # Flow
//!
//! ```text
//! payload -> validate_fields -> NormalizedFields -> UpdateExpression::build
//! ```
//!
//! Validation never touches storage; the expression builder never
//! re-validates. A rejected request reports every violated rule in one
//! response.

pub mod expression;
pub mod pipeline;
pub mod request;

pub use expression::{ExpressionError, UpdateExpression};
pub use pipeline::{NormalizedFields, ValidationMode, validate_create, validate_fields, validate_patch};
pub use request::MutationRequest;

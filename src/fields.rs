//! Field vocabulary and validators for user records.
//!
//! This module defines the closed set of caller-mutable fields and the pure
//! predicate functions used by the validation pipeline. The predicates are
//! total: they never fail, they only answer whether a present value is
//! acceptable.

use std::fmt;

/// Punctuation set a password must draw at least one character from.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Record attributes a caller is allowed to set or change.
///
/// This is the whitelist consulted by the validation pipeline: payload keys
/// outside this set are rejected rather than silently written through, and
/// the system-managed attributes (`id`, `createdAt`, `updatedAt`) are never
/// assignable at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    /// Display name (optional, must be non-empty when supplied)
    Name,
    /// Email address (syntax-validated)
    Email,
    /// Password (stored as a digest, never plaintext)
    Password,
    /// Postal address (optional, must be non-empty when supplied)
    Address,
}

impl UserField {
    /// All mutable fields, in canonical order.
    pub const ALL: [UserField; 4] = [
        UserField::Name,
        UserField::Email,
        UserField::Password,
        UserField::Address,
    ];

    /// The wire name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Password => "password",
            UserField::Address => "address",
        }
    }

    /// Parse a payload key into a mutable field, if it is one.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name" => Some(UserField::Name),
            "email" => Some(UserField::Email),
            "password" => Some(UserField::Password),
            "address" => Some(UserField::Address),
            _ => None,
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a payload key names a system-managed attribute.
///
/// These exist on every stored record but are assigned exclusively by the
/// store; a payload that tries to supply one is rejected with an
/// immutable-field error rather than treated as merely unrecognized.
pub fn is_system_key(key: &str) -> bool {
    matches!(key, "id" | "createdAt" | "updatedAt")
}

/// Validate email syntax: `local@host.tld`.
///
/// The local part is one or more of letters, digits, `_`, `.`, `+`, `-`;
/// the host is one or more of letters, digits, `-`; the trailing segment is
/// a dot followed by one or more of letters, digits, `-`, `.`. Purely
/// syntactic, no length cap, no DNS resolution.
pub fn validate_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.split_once('.') else {
        return false;
    };
    !local.is_empty()
        && local.chars().all(is_local_char)
        && !host.is_empty()
        && host.chars().all(is_host_char)
        && !tld.is_empty()
        && tld.chars().all(is_tld_char)
}

/// Validate password strength: at least 8 characters and at least one
/// character from [`PASSWORD_SPECIAL_CHARS`]. No case or digit classes.
pub fn validate_password(value: &str) -> bool {
    value.chars().count() >= 8 && value.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c))
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-')
}

fn is_host_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_tld_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '.'
}

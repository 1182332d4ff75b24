//! Field-level validation for create requests.
//!
//! Request payloads are checked by explicit functions before any domain
//! value is built. Every rule runs and all violations are reported together
//! rather than stopping at the first failure.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    field: &'static str,
    reason: &'static str,
}

impl FieldViolation {
    /// Creates a violation for the named wire field.
    #[must_use]
    pub const fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }

    /// Returns the wire name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the human-readable constraint description.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// One or more failed field constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join_violations(.0))]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    /// Returns the collected violations in rule order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// Returns `true` when the named field has at least one violation.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|violation| violation.field == field)
    }

    /// Converts a list of collected violations into a result.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrors`] when `violations` is non-empty.
    pub fn check(violations: Vec<FieldViolation>) -> Result<(), Self> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Self(violations))
        }
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reason reported for missing or zero-length required fields.
pub const MUST_NOT_BE_EMPTY: &str = "must not be empty";

/// Records a violation when `value` is missing or has zero length.
///
/// Whitespace-only values pass: the constraint is "not empty", not "not
/// blank".
pub fn require_non_empty(
    field: &'static str,
    value: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) {
    if value.is_none_or(str::is_empty) {
        violations.push(FieldViolation::new(field, MUST_NOT_BE_EMPTY));
    }
}

//! Scan diagnostics.

use blockvar_core::{BlockId, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single finding from a scan.
///
/// Diagnostics are advisory data returned to the caller; the registry
/// never raises them as fatal errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Block the finding refers to.
    pub source_block: BlockId,
    /// Human-readable message.
    pub message: String,
    /// Severity.
    pub severity: Severity,
}

impl Diagnostic {
    /// An error-severity diagnostic.
    pub fn error(source_block: impl Into<BlockId>, message: impl Into<String>) -> Self {
        Self {
            source_block: source_block.into(),
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// A warning-severity diagnostic.
    pub fn warning(source_block: impl Into<BlockId>, message: impl Into<String>) -> Self {
        Self {
            source_block: source_block.into(),
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// A second declaration of an already-registered name.
    pub fn already_declared(source_block: impl Into<BlockId>, name: &str) -> Self {
        Self::error(
            source_block,
            format!("Variable '{}' is already declared", name),
        )
    }

    /// A read site whose expected type conflicts with the registered type.
    pub fn read_mismatch(
        source_block: impl Into<BlockId>,
        name: &str,
        expected: &TypeDescriptor,
        registered: &TypeDescriptor,
    ) -> Self {
        Self::error(
            source_block,
            format!(
                "Type mismatch: variable '{}' has type {} but the read expects {}",
                name, registered, expected
            ),
        )
    }

    /// A write assigning a type that conflicts with the registered type.
    pub fn write_mismatch(
        source_block: impl Into<BlockId>,
        name: &str,
        registered: &TypeDescriptor,
        assigned: &TypeDescriptor,
    ) -> Self {
        Self::error(
            source_block,
            format!(
                "Type mismatch: cannot assign {} to variable '{}' of type {}",
                assigned, name, registered
            ),
        )
    }

    /// Check whether this diagnostic is an error.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_declared_message() {
        // GIVEN / WHEN
        let diag = Diagnostic::already_declared("b1", "counter");

        // THEN
        assert!(diag.message.contains("already declared"));
        assert!(diag.message.contains("counter"));
        assert!(diag.is_error());
    }

    #[test]
    fn test_mismatch_messages_name_both_types() {
        // GIVEN
        let registered = TypeDescriptor::named("number");
        let assigned = TypeDescriptor::named("string");

        // WHEN
        let diag = Diagnostic::write_mismatch("b2", "counter", &registered, &assigned);

        // THEN
        assert!(diag.message.contains("Type mismatch"));
        assert!(diag.message.contains("number"));
        assert!(diag.message.contains("string"));
        assert!(diag.message.contains("counter"));
    }
}

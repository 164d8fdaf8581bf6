//! Variable records.

use blockvar_core::{Scope, TypeDescriptor};
use serde::{Deserialize, Serialize};

/// What the registry knows about one declared variable.
///
/// A record is created on the first successful declaration of a name and
/// never mutated afterwards; it only disappears through
/// [`TypeRegistry::reset`](crate::TypeRegistry::reset) or wholesale
/// replacement on import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableRecord {
    /// Declared type.
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    /// Declaration scope.
    pub scope: Scope,
    /// Whether the variable has been declared. Always true for records
    /// created by a scan; carried for round-trip fidelity with imported
    /// state.
    pub declared: bool,
}

impl VariableRecord {
    pub fn new(ty: TypeDescriptor, scope: Scope) -> Self {
        Self {
            ty,
            scope,
            declared: true,
        }
    }
}

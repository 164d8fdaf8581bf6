//! Block descriptors supplied by the host editor.
//!
//! The registry sees blocks as a flat, ordered list of descriptors. Each
//! descriptor carries an identifier and a kind discriminant with the
//! fields type checking needs; everything else about a block stays on the
//! editor's side.

use crate::TypeDescriptor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a block in the host editor's workspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        BlockId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        BlockId::new(id)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        BlockId(id)
    }
}

impl std::borrow::Borrow<str> for BlockId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// What a block does, as far as type checking is concerned.
///
/// Four kinds are recognized; every other block maps to `Other` and is
/// ignored by the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Declares a workspace-visible variable.
    GlobalDeclaration {
        name: String,
        declared: TypeDescriptor,
    },
    /// Declares a procedure-local variable.
    LocalDeclaration {
        name: String,
        declared: TypeDescriptor,
    },
    /// Reads a variable, expecting a type at the read site.
    VariableGet {
        name: String,
        expected: TypeDescriptor,
    },
    /// Assigns a value of some type to a variable.
    VariableSet {
        name: String,
        assigned: TypeDescriptor,
    },
    /// Any block kind the registry does not recognize.
    Other,
}

/// A single block as supplied to a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDescriptor {
    /// Identifier used for metadata lookups and diagnostic references.
    pub id: BlockId,
    /// Kind discriminant with the fields the scan needs.
    pub kind: BlockKind,
}

impl BlockDescriptor {
    /// A global variable declaration block.
    pub fn global_declaration(
        id: impl Into<BlockId>,
        name: impl Into<String>,
        declared: impl Into<TypeDescriptor>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: BlockKind::GlobalDeclaration {
                name: name.into(),
                declared: declared.into(),
            },
        }
    }

    /// A local variable declaration block.
    pub fn local_declaration(
        id: impl Into<BlockId>,
        name: impl Into<String>,
        declared: impl Into<TypeDescriptor>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: BlockKind::LocalDeclaration {
                name: name.into(),
                declared: declared.into(),
            },
        }
    }

    /// A variable read block.
    pub fn variable_get(
        id: impl Into<BlockId>,
        name: impl Into<String>,
        expected: impl Into<TypeDescriptor>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: BlockKind::VariableGet {
                name: name.into(),
                expected: expected.into(),
            },
        }
    }

    /// A variable write block.
    pub fn variable_set(
        id: impl Into<BlockId>,
        name: impl Into<String>,
        assigned: impl Into<TypeDescriptor>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: BlockKind::VariableSet {
                name: name.into(),
                assigned: assigned.into(),
            },
        }
    }

    /// A block of a kind the registry does not recognize.
    pub fn other(id: impl Into<BlockId>) -> Self {
        Self {
            id: id.into(),
            kind: BlockKind::Other,
        }
    }
}

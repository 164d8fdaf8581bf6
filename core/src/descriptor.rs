//! Type descriptors and the compatibility predicate.
//!
//! Types are drawn from an open vocabulary of textual identifiers with a
//! suffix convention for composites: `[]` marks an array and `*` marks a
//! pointer. Suffixes bind right-to-left, so `"int*[]"` is an array of
//! pointers to `int`.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The wildcard type name, compatible with every type.
pub const ANY_TYPE: &str = "any";

/// Base type names that are mutually compatible regardless of spelling.
/// This set is closed; it is not extended by callers.
const NUMERIC_TYPES: [&str; 4] = ["number", "int", "float", "double"];

/// A variable's static type.
///
/// Base identifiers are not validated against a fixed list; compatibility
/// is computed structurally via [`is_compatible_with`].
///
/// [`is_compatible_with`]: TypeDescriptor::is_compatible_with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A named base type ("number", "string", "Robot", ...).
    Named(String),
    /// An array of the element type (`T[]`).
    Array(Box<TypeDescriptor>),
    /// A pointer to the pointee type (`T*`).
    Pointer(Box<TypeDescriptor>),
}

impl TypeDescriptor {
    /// Create a named base type.
    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor::Named(name.into())
    }

    /// Create an array of the given element type.
    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    /// Create a pointer to the given pointee type.
    pub fn pointer(pointee: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer(Box::new(pointee))
    }

    /// Parse a descriptor from its textual form.
    ///
    /// Never fails: any identifier without a recognized suffix is taken
    /// as a named base type.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if let Some(element) = text.strip_suffix("[]") {
            TypeDescriptor::array(Self::parse(element))
        } else if let Some(pointee) = text.strip_suffix('*') {
            TypeDescriptor::pointer(Self::parse(pointee))
        } else {
            TypeDescriptor::Named(text.to_string())
        }
    }

    /// Check whether this is the wildcard type.
    pub fn is_any(&self) -> bool {
        matches!(self, TypeDescriptor::Named(name) if name == ANY_TYPE)
    }

    /// Check whether this is a member of the closed numeric set.
    pub fn is_numeric(&self) -> bool {
        matches!(self, TypeDescriptor::Named(name) if NUMERIC_TYPES.contains(&name.as_str()))
    }

    /// Get the innermost named type.
    pub fn base(&self) -> &str {
        match self {
            TypeDescriptor::Named(name) => name,
            TypeDescriptor::Array(inner) | TypeDescriptor::Pointer(inner) => inner.base(),
        }
    }

    /// Check whether a value of type `source` may be used where `self` is
    /// expected.
    ///
    /// Rules are applied in order, first match wins:
    /// 1. either side is `any`
    /// 2. the sides are identical
    /// 3. both sides are in the closed numeric set
    /// 4. both sides are arrays with compatible element types
    /// 5. both sides are pointers with compatible pointee types
    ///
    /// Every rule is symmetric, so the (target, source) direction carries
    /// no meaning today; the signature keeps it for call-site clarity.
    pub fn is_compatible_with(&self, source: &TypeDescriptor) -> bool {
        if self.is_any() || source.is_any() {
            return true;
        }
        if self == source {
            return true;
        }
        if self.is_numeric() && source.is_numeric() {
            return true;
        }
        match (self, source) {
            (TypeDescriptor::Array(target), TypeDescriptor::Array(source)) => {
                target.is_compatible_with(source)
            }
            (TypeDescriptor::Pointer(target), TypeDescriptor::Pointer(source)) => {
                target.is_compatible_with(source)
            }
            _ => false,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Named(name) => write!(f, "{}", name),
            TypeDescriptor::Array(inner) => write!(f, "{}[]", inner),
            TypeDescriptor::Pointer(inner) => write!(f, "{}*", inner),
        }
    }
}

impl From<&str> for TypeDescriptor {
    fn from(text: &str) -> Self {
        TypeDescriptor::parse(text)
    }
}

impl From<String> for TypeDescriptor {
    fn from(text: String) -> Self {
        TypeDescriptor::parse(&text)
    }
}

// Descriptors serialize as their textual form so exported documents keep
// the suffix convention ("int[]", "int*") rather than a nested tree.

impl Serialize for TypeDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TypeDescriptor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DescriptorVisitor;

        impl Visitor<'_> for DescriptorVisitor {
            type Value = TypeDescriptor;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a type descriptor string")
            }

            fn visit_str<E: de::Error>(self, text: &str) -> Result<TypeDescriptor, E> {
                Ok(TypeDescriptor::parse(text))
            }
        }

        deserializer.deserialize_str(DescriptorVisitor)
    }
}

//! Blockvar Registry
//!
//! Variable type registry and compatibility checking for block
//! workspaces. The registry records declared variables with their types
//! and scopes, validates variable reads and writes against those
//! declarations, stores opaque per-block type metadata, and serializes
//! the accumulated type state.

mod diagnostic;
mod error;
mod export;
mod record;
mod registry;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{RegistryError, RegistryResult};
pub use record::VariableRecord;
pub use registry::TypeRegistry;

//! The TypeRegistry - variable types, block metadata, and the scan.
//!
//! One registry instance owns three collections: the variable map, the
//! block-metadata map, and the diagnostics from the most recent scan. It
//! is a plain value with no binding to the host editor; the caller
//! constructs it, feeds block lists into
//! [`check_type_errors`](TypeRegistry::check_type_errors), and tears it
//! down.
//!
//! Known limitation: variable names form a single namespace regardless of
//! scope, so a local variable cannot shadow a global of the same name. A
//! redeclaration under either scope is reported as already declared.

use crate::export::TypeInfoDocument;
use crate::{Diagnostic, RegistryError, RegistryResult, VariableRecord};
use blockvar_core::{BlockDescriptor, BlockId, BlockKind, Scope, TypeDescriptor, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Registry of variable types and per-block type metadata.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    /// Declared variables by name. One namespace across both scopes.
    variables: HashMap<String, VariableRecord>,
    /// Opaque type info by block id. Independent of the variable map.
    block_types: HashMap<BlockId, Value>,
    /// Findings from the most recent scan.
    diagnostics: Vec<Diagnostic>,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Variables ====================

    /// Register a variable, overwriting any existing record for the name.
    ///
    /// Callers that must not clobber an existing declaration check
    /// [`is_variable_declared`](TypeRegistry::is_variable_declared)
    /// first; the scan does.
    pub fn register_variable(
        &mut self,
        name: impl Into<String>,
        ty: TypeDescriptor,
        scope: Scope,
    ) {
        let name = name.into();
        debug!(name = %name, ty = %ty, scope = %scope, "register variable");
        self.variables.insert(name, VariableRecord::new(ty, scope));
    }

    /// Register a procedure-local variable.
    pub fn register_local(&mut self, name: impl Into<String>, ty: TypeDescriptor) {
        self.register_variable(name, ty, Scope::Local);
    }

    /// Register a workspace-global variable.
    pub fn register_global(&mut self, name: impl Into<String>, ty: TypeDescriptor) {
        self.register_variable(name, ty, Scope::Global);
    }

    /// Get the registered type of a variable.
    pub fn get_variable_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.variables.get(name).map(|record| &record.ty)
    }

    /// Check whether a variable is declared.
    pub fn is_variable_declared(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Snapshot of the whole variable map. Not a live view: later
    /// registrations do not show up in a summary taken earlier.
    pub fn variable_type_summary(&self) -> HashMap<String, VariableRecord> {
        self.variables.clone()
    }

    /// Number of declared variables.
    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    // ==================== Block metadata ====================

    /// Store opaque type info for a block.
    pub fn register_block_type(&mut self, id: impl Into<BlockId>, info: impl Into<Value>) {
        self.block_types.insert(id.into(), info.into());
    }

    /// Get the stored type info for a block.
    pub fn get_block_type(&self, id: &str) -> Option<&Value> {
        self.block_types.get(id)
    }

    /// Number of blocks with stored type info.
    pub fn block_type_count(&self) -> usize {
        self.block_types.len()
    }

    // ==================== Compatibility ====================

    /// Check whether a value of type `source` may be used where `target`
    /// is expected. See [`TypeDescriptor::is_compatible_with`] for the
    /// rules.
    pub fn are_types_compatible(&self, target: &TypeDescriptor, source: &TypeDescriptor) -> bool {
        target.is_compatible_with(source)
    }

    // ==================== Scan ====================

    /// Rebuild the diagnostic list from one ordered pass over `blocks`.
    ///
    /// Declarations register as they are encountered; reads and writes
    /// validate against whatever is registered at that point in the pass.
    /// A use ordered before its declaration finds no record and is
    /// skipped, not reported.
    pub fn check_type_errors(&mut self, blocks: &[BlockDescriptor]) -> &[Diagnostic] {
        self.diagnostics.clear();
        debug!(blocks = blocks.len(), "type scan started");

        for block in blocks {
            match &block.kind {
                BlockKind::GlobalDeclaration { name, declared } => {
                    self.scan_declaration(&block.id, name, declared, Scope::Global);
                }
                BlockKind::LocalDeclaration { name, declared } => {
                    self.scan_declaration(&block.id, name, declared, Scope::Local);
                }
                BlockKind::VariableGet { name, expected } => {
                    if let Some(registered) = self.variables.get(name).map(|r| &r.ty) {
                        if !expected.is_compatible_with(registered) {
                            warn!(
                                name = %name,
                                expected = %expected,
                                registered = %registered,
                                "read type mismatch"
                            );
                            let diag = Diagnostic::read_mismatch(
                                block.id.clone(),
                                name,
                                expected,
                                registered,
                            );
                            self.diagnostics.push(diag);
                        }
                    }
                }
                BlockKind::VariableSet { name, assigned } => {
                    if let Some(registered) = self.variables.get(name).map(|r| &r.ty) {
                        if !registered.is_compatible_with(assigned) {
                            warn!(
                                name = %name,
                                registered = %registered,
                                assigned = %assigned,
                                "write type mismatch"
                            );
                            let diag = Diagnostic::write_mismatch(
                                block.id.clone(),
                                name,
                                registered,
                                assigned,
                            );
                            self.diagnostics.push(diag);
                        }
                    }
                }
                BlockKind::Other => {}
            }
        }

        debug!(diagnostics = self.diagnostics.len(), "type scan finished");
        &self.diagnostics
    }

    /// Process one declaration block. The original record wins on a
    /// duplicate name.
    fn scan_declaration(
        &mut self,
        id: &BlockId,
        name: &str,
        declared: &TypeDescriptor,
        scope: Scope,
    ) {
        if self.is_variable_declared(name) {
            warn!(name = %name, "duplicate declaration");
            self.diagnostics
                .push(Diagnostic::already_declared(id.clone(), name));
        } else {
            self.register_variable(name, declared.clone(), scope);
        }
    }

    // ==================== Diagnostics ====================

    /// Findings from the most recent scan.
    pub fn type_errors(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Check whether the most recent scan produced any findings.
    pub fn has_type_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Clear the diagnostic list without rescanning.
    pub fn clear_type_errors(&mut self) {
        self.diagnostics.clear();
    }

    /// Return the registry to its just-constructed state.
    pub fn reset(&mut self) {
        self.variables.clear();
        self.block_types.clear();
        self.diagnostics.clear();
    }

    // ==================== Export / import ====================

    /// Serialize the variable map, block metadata, and diagnostics to a
    /// JSON document.
    pub fn export_type_info(&self) -> RegistryResult<String> {
        let doc = TypeInfoDocument {
            variables: self.variables.clone(),
            block_types: self.block_types.clone(),
            diagnostics: self.diagnostics.clone(),
        };
        serde_json::to_string_pretty(&doc).map_err(RegistryError::ExportFailed)
    }

    /// Replace the registry state with a previously exported document.
    ///
    /// The payload is parsed in full before any state changes, so a
    /// malformed document leaves the registry untouched. Missing
    /// top-level fields default to empty.
    pub fn import_type_info(&mut self, serialized: &str) -> RegistryResult<()> {
        let doc: TypeInfoDocument = serde_json::from_str(serialized).map_err(|err| {
            warn!(error = %err, "type info import failed");
            RegistryError::ImportFailed(err)
        })?;

        self.variables = doc.variables;
        self.block_types = doc.block_types;
        self.diagnostics = doc.diagnostics;
        debug!(
            variables = self.variables.len(),
            block_types = self.block_types.len(),
            "type info imported"
        );
        Ok(())
    }
}

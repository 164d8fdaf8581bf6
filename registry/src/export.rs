//! Serialized form of the registry state.

use crate::{Diagnostic, VariableRecord};
use blockvar_core::{BlockId, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The export document: three top-level fields mirroring the registry's
/// three collections. Each field defaults to empty when absent on import.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TypeInfoDocument {
    #[serde(default)]
    pub(crate) variables: HashMap<String, VariableRecord>,
    #[serde(default)]
    pub(crate) block_types: HashMap<BlockId, Value>,
    #[serde(default)]
    pub(crate) diagnostics: Vec<Diagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockvar_core::{Scope, TypeDescriptor};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_serializes_descriptors_as_strings() {
        // GIVEN
        let mut variables = HashMap::new();
        variables.insert(
            "items".to_string(),
            VariableRecord::new(TypeDescriptor::parse("number[]"), Scope::Global),
        );
        let doc = TypeInfoDocument {
            variables,
            block_types: HashMap::new(),
            diagnostics: Vec::new(),
        };

        // WHEN
        let json = serde_json::to_string(&doc).unwrap();

        // THEN - the textual suffix convention survives serialization
        assert!(json.contains("\"number[]\""));
        assert!(json.contains("\"global\""));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        // GIVEN a document with only the variables field
        let json = r#"{"variables":{"x":{"type":"int","scope":"local","declared":true}}}"#;

        // WHEN
        let doc: TypeInfoDocument = serde_json::from_str(json).unwrap();

        // THEN
        assert_eq!(doc.variables.len(), 1);
        assert!(doc.block_types.is_empty());
        assert!(doc.diagnostics.is_empty());
    }

    #[test]
    fn test_empty_document_parses() {
        let doc: TypeInfoDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.variables.is_empty());
        assert!(doc.block_types.is_empty());
        assert!(doc.diagnostics.is_empty());
    }
}

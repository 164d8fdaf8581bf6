//! End-to-end workflow tests for the type registry.
//!
//! These tests drive the registry the way a host editor would: build a
//! flat block list, scan it, inspect diagnostics, persist state, and
//! restore it into a fresh registry.

use blockvar_core::{BlockDescriptor, Scope, TypeDescriptor, Value};
use blockvar_registry::{Severity, TypeRegistry};
use pretty_assertions::assert_eq;

fn workspace_blocks() -> Vec<BlockDescriptor> {
    vec![
        BlockDescriptor::global_declaration("decl-items", "items", "number[]"),
        BlockDescriptor::local_declaration("decl-count", "count", "int"),
        BlockDescriptor::other("comment-1"),
        BlockDescriptor::variable_set("set-count", "count", "number"),
        BlockDescriptor::variable_get("get-items", "items", "number[]"),
        BlockDescriptor::variable_get("get-count", "count", "string"),
        BlockDescriptor::local_declaration("decl-dup", "items", "string[]"),
    ]
}

#[test]
fn test_full_scan_reports_expected_findings() {
    // GIVEN a workspace with one bad read and one duplicate declaration
    let mut registry = TypeRegistry::new();

    // WHEN
    let diagnostics = registry.check_type_errors(&workspace_blocks()).to_vec();

    // THEN - exactly those two findings, in block order
    assert_eq!(diagnostics.len(), 2);
    assert!(diagnostics[0].message.contains("Type mismatch"));
    assert_eq!(diagnostics[0].source_block.as_str(), "get-count");
    assert!(diagnostics[1].message.contains("already declared"));
    assert_eq!(diagnostics[1].source_block.as_str(), "decl-dup");
    assert!(diagnostics.iter().all(|d| d.severity == Severity::Error));

    // AND the first declaration of items survived the duplicate
    assert_eq!(
        registry.get_variable_type("items"),
        Some(&TypeDescriptor::parse("number[]"))
    );
    assert_eq!(
        registry.variable_type_summary()["items"].scope,
        Scope::Global
    );
}

#[test]
fn test_rescan_after_fixing_the_workspace() {
    // GIVEN a registry that has seen the broken workspace
    let mut registry = TypeRegistry::new();
    registry.check_type_errors(&workspace_blocks());
    assert!(registry.has_type_errors());

    // WHEN the editor fixes the blocks and rescans from a fresh registry
    registry.reset();
    let fixed = vec![
        BlockDescriptor::global_declaration("decl-items", "items", "number[]"),
        BlockDescriptor::local_declaration("decl-count", "count", "int"),
        BlockDescriptor::variable_set("set-count", "count", "number"),
        BlockDescriptor::variable_get("get-items", "items", "number[]"),
        BlockDescriptor::variable_get("get-count", "count", "any"),
    ];
    let diagnostics = registry.check_type_errors(&fixed);

    // THEN
    assert!(diagnostics.is_empty());
    assert_eq!(registry.variable_count(), 2);
}

#[test]
fn test_persist_and_restore_workspace_state() {
    // GIVEN a scanned workspace with block metadata attached
    let mut registry = TypeRegistry::new();
    registry.register_block_type("decl-items", Value::String("list column".into()));
    registry.register_block_type("set-count", Value::Int(1));
    registry.check_type_errors(&workspace_blocks());

    // WHEN state is exported and imported into a fresh registry
    let exported = registry.export_type_info().unwrap();
    let mut restored = TypeRegistry::new();
    restored.import_type_info(&exported).unwrap();

    // THEN the three collections round-trip
    assert_eq!(
        restored.variable_type_summary(),
        registry.variable_type_summary()
    );
    assert_eq!(
        restored.get_block_type("decl-items"),
        registry.get_block_type("decl-items")
    );
    assert_eq!(
        restored.get_block_type("set-count"),
        registry.get_block_type("set-count")
    );
    assert_eq!(restored.type_errors(), registry.type_errors());

    // AND a failed import on top of restored state changes nothing
    assert!(restored.import_type_info("{ truncated").is_err());
    assert_eq!(
        restored.variable_type_summary(),
        registry.variable_type_summary()
    );
}

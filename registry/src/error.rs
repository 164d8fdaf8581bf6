//! Registry error types.

use thiserror::Error;

/// Errors that can occur while serializing or restoring registry state.
///
/// Scan findings never surface here; they accumulate as
/// [`Diagnostic`](crate::Diagnostic) values on the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The serialized payload could not be parsed.
    #[error("Failed to import type info: {0}")]
    ImportFailed(#[source] serde_json::Error),

    /// Registry state could not be serialized.
    #[error("Failed to export type info: {0}")]
    ExportFailed(#[source] serde_json::Error),
}

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

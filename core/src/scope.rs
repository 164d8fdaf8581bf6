//! Variable declaration scope.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declaration visibility of a variable.
///
/// Scope is a tag only: global and local variables share one namespace,
/// so the scope of a declaration never affects name lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Visible across the whole workspace.
    Global,
    /// Visible within the declaring procedure.
    Local,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Local => "local",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

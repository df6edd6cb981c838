//! manifest.json parsing and schema.
//!
//! The manifest declares a project's dependency constraints. Constraints are
//! kept as uninterpreted JSON; interpreting them is the solver's job.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::errors::WorkspaceError;
use crate::core::ProjectRoot;

/// File name of the manifest at a project root.
pub const MANIFEST_NAME: &str = "manifest.json";

/// An opaque dependency constraint, round-tripped verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Constraint(Value);

impl Constraint {
    /// Wrap a raw constraint value.
    pub fn new(value: Value) -> Self {
        Constraint(value)
    }

    /// The raw constraint value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// The parsed manifest.json.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Declared dependencies
    #[serde(default)]
    pub dependencies: BTreeMap<ProjectRoot, Constraint>,

    /// Constraints that replace whatever the dependency graph asks for
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub overrides: BTreeMap<ProjectRoot, Constraint>,

    /// Import paths excluded from analysis
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,

    /// Fields this version does not know about, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self, WorkspaceError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| WorkspaceError::ManifestUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&content, path)
    }

    /// Parse manifest content. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, WorkspaceError> {
        serde_json::from_str(content).map_err(|source| WorkspaceError::ManifestSyntax {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the manifest as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), WorkspaceError> {
        let mut content =
            serde_json::to_string_pretty(self).map_err(|source| WorkspaceError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        content.push('\n');

        std::fs::write(path, content).map_err(|source| WorkspaceError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Look up the constraint declared for a dependency.
    pub fn dependency(&self, root: &ProjectRoot) -> Option<&Constraint> {
        self.dependencies.get(root)
    }

    /// Check whether the manifest declares any dependencies.
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}

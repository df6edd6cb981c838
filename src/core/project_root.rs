//! Canonical project identifiers.
//!
//! A [`ProjectRoot`] is the workspace-independent name of a project, such as
//! `github.com/pkg/errors`. It maps onto `<workspace>/src/<root>` but is never
//! itself a filesystem path.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::WorkspaceError;

/// Separator between segments of a project root.
pub const SEPARATOR: char = '/';

/// A canonical, slash-separated project identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectRoot(String);

impl ProjectRoot {
    /// Create a project root, validating its shape.
    pub fn new(root: impl Into<String>) -> Result<Self, WorkspaceError> {
        let root = root.into();
        validate(&root)?;
        Ok(ProjectRoot(root))
    }

    /// Build a project root from relative path components.
    ///
    /// Every component must be a plain name; `.`, `..`, prefixes and
    /// non-UTF-8 names are rejected.
    pub(crate) fn from_relative_path(rel: &Path) -> Option<Self> {
        let mut segments = Vec::new();
        for component in rel.components() {
            match component {
                std::path::Component::Normal(name) => segments.push(name.to_str()?),
                _ => return None,
            }
        }
        ProjectRoot::new(segments.join("/")).ok()
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the slash-separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR)
    }

    /// Append the segments of this root to a base directory.
    pub fn to_path_under(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        path.extend(self.segments());
        path
    }
}

fn validate(root: &str) -> Result<(), WorkspaceError> {
    let invalid = |reason: &str| WorkspaceError::InvalidProjectRoot {
        root: root.to_string(),
        reason: reason.to_string(),
    };

    if root.is_empty() {
        return Err(invalid("project root is empty"));
    }
    if root.starts_with(SEPARATOR) || root.ends_with(SEPARATOR) {
        return Err(invalid("leading or trailing separator"));
    }
    if root.contains('\\') {
        return Err(invalid("backslash separator"));
    }
    for segment in root.split(SEPARATOR) {
        match segment {
            "" => return Err(invalid("empty path segment")),
            "." | ".." => return Err(invalid("relative path segment")),
            _ => {}
        }
    }
    Ok(())
}

impl fmt::Display for ProjectRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectRoot {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectRoot::new(s)
    }
}

impl TryFrom<String> for ProjectRoot {
    type Error = WorkspaceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ProjectRoot::new(value)
    }
}

impl From<ProjectRoot> for String {
    fn from(root: ProjectRoot) -> Self {
        root.0
    }
}

impl AsRef<str> for ProjectRoot {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProjectRoot {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProjectRoot {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

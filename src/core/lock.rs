//! lock.json encoding and decoding.
//!
//! The lock records the concrete versions a previous solve selected, plus a
//! memo digest of the inputs that produced it. The memo is carried as opaque
//! bytes; checking it against a manifest is left to the solver.

use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::errors::WorkspaceError;
use crate::core::{ProjectRoot, Revision, Version};

/// File name of the lock at a project root.
pub const LOCK_NAME: &str = "lock.json";

/// Digest of the solver inputs that produced a lock. Stored as hex text.
///
/// The text is kept as written so the memo is shown and saved unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Memo {
    bytes: Vec<u8>,
    text: String,
}

impl Memo {
    /// Decode a memo from its hex representation.
    pub fn from_hex(text: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(text)?;
        Ok(Memo {
            bytes,
            text: text.to_string(),
        })
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The hex text as it appeared in the lock.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The digest as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Check whether the memo is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for Memo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Memo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for Memo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Memo::from_hex(&text)
            .map_err(|e| de::Error::custom(format!("invalid hash digest in memo: {e}")))
    }
}

/// A locked project entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLockedProject", into = "RawLockedProject")]
pub struct LockedProject {
    /// Project root of the dependency
    pub name: ProjectRoot,

    /// Alternate source URL, when the project is not fetched from its name
    pub source: Option<String>,

    /// Resolved version, always bound to a revision
    pub version: Version,

    /// Packages within the project that are in use
    pub packages: Vec<String>,

    /// Fields this version does not know about
    pub extra: Map<String, Value>,
}

impl LockedProject {
    /// The revision this entry is locked to.
    pub fn revision(&self) -> Option<&Revision> {
        self.version.underlying_revision()
    }
}

/// Locked project as it appears on disk.
#[derive(Debug, Serialize, Deserialize)]
struct RawLockedProject {
    name: ProjectRoot,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    repo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    branch: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    version: Option<String>,

    #[serde(default)]
    revision: Option<String>,

    #[serde(default)]
    packages: Vec<String>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawLockedProject> for LockedProject {
    type Error = String;

    fn try_from(raw: RawLockedProject) -> Result<Self, Self::Error> {
        let revision = match raw.revision {
            Some(rev) if !rev.is_empty() => Revision::new(rev),
            _ => return Err(format!("locked project `{}` has no revision", raw.name)),
        };

        let version = match (raw.branch, raw.version) {
            (Some(_), Some(_)) => {
                return Err(format!(
                    "locked project `{}` names both a branch and a version",
                    raw.name
                ))
            }
            (Some(branch), None) => Version::branch(branch).is(revision),
            (None, Some(tag)) => Version::tag(tag).is(revision),
            (None, None) => Version::Revision(revision),
        };

        Ok(LockedProject {
            name: raw.name,
            source: raw.repo,
            version,
            packages: raw.packages,
            extra: raw.extra,
        })
    }
}

impl From<LockedProject> for RawLockedProject {
    fn from(project: LockedProject) -> Self {
        let (branch, version, revision) = match project.version {
            Version::Revision(rev) => (None, None, Some(rev)),
            Version::Branch { name, revision } => (Some(name), None, revision),
            Version::Tag { name, revision } => (None, Some(name), revision),
        };

        RawLockedProject {
            name: project.name,
            repo: project.source,
            branch,
            version,
            revision: revision.map(|r| r.as_str().to_string()),
            packages: project.packages,
            extra: project.extra,
        }
    }
}

/// The parsed lock.json.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lock {
    /// Digest of the inputs that produced this lock
    #[serde(default)]
    pub memo: Memo,

    /// Locked projects, in file order
    #[serde(default)]
    pub projects: Vec<LockedProject>,

    /// Fields this version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Lock {
    /// Load a lock from a file path.
    pub fn load(path: &Path) -> Result<Self, WorkspaceError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| WorkspaceError::LockUnreadable {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(&content, path)
    }

    /// Parse lock content. `path` is only used for error reporting.
    pub fn parse(content: &str, path: &Path) -> Result<Self, WorkspaceError> {
        serde_json::from_str(content).map_err(|source| WorkspaceError::LockSyntax {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the lock as pretty-printed JSON.
    ///
    /// Every locked project must be bound to a revision; an unbound branch
    /// or tag could not be loaded back.
    pub fn save(&self, path: &Path) -> Result<(), WorkspaceError> {
        if let Some(unbound) = self.projects.iter().find(|p| p.revision().is_none()) {
            return Err(WorkspaceError::UnboundLockedProject {
                path: path.to_path_buf(),
                name: unbound.name.to_string(),
            });
        }

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

    /// Find the entry for a project root.
    pub fn project(&self, root: &ProjectRoot) -> Option<&LockedProject> {
        self.projects.iter().find(|p| &p.name == root)
    }
}

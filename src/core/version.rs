//! Versions as seen by the dependency model.
//!
//! A [`Version`] is either a bare [`Revision`], or a symbolic name (branch or
//! tag) that may be bound to the revision it currently resolves to.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An immutable version-control identifier, such as a commit hash.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    /// Create a revision from its textual identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Revision(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Revision {
    fn from(id: &str) -> Self {
        Revision::new(id)
    }
}

impl From<String> for Revision {
    fn from(id: String) -> Self {
        Revision(id)
    }
}

/// Which kind of version a [`Version`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionKind {
    Revision,
    Branch,
    Tag,
}

impl fmt::Display for VersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionKind::Revision => write!(f, "revision"),
            VersionKind::Branch => write!(f, "branch"),
            VersionKind::Tag => write!(f, "tag"),
        }
    }
}

/// A concrete or symbolic version.
///
/// Two versions compare equal on their bound revisions when both have one;
/// otherwise they compare on kind and name. That relation is not transitive,
/// so `Version` implements only `PartialEq`.
#[derive(Debug, Clone)]
pub enum Version {
    /// A bare revision.
    Revision(Revision),
    /// A movable branch, optionally bound to its current tip.
    Branch {
        name: String,
        revision: Option<Revision>,
    },
    /// A semver-shaped tag, optionally bound to the revision it points at.
    Tag {
        name: String,
        revision: Option<Revision>,
    },
}

impl Version {
    /// A bare revision.
    pub fn revision(id: impl Into<Revision>) -> Self {
        Version::Revision(id.into())
    }

    /// An unbound branch.
    pub fn branch(name: impl Into<String>) -> Self {
        Version::Branch {
            name: name.into(),
            revision: None,
        }
    }

    /// An unbound tag.
    pub fn tag(name: impl Into<String>) -> Self {
        Version::Tag {
            name: name.into(),
            revision: None,
        }
    }

    /// Bind this version to a concrete revision.
    ///
    /// Binding keeps the symbolic identity. A bare revision is returned
    /// unchanged.
    pub fn is(self, rev: impl Into<Revision>) -> Self {
        match self {
            Version::Revision(r) => Version::Revision(r),
            Version::Branch { name, .. } => Version::Branch {
                name,
                revision: Some(rev.into()),
            },
            Version::Tag { name, .. } => Version::Tag {
                name,
                revision: Some(rev.into()),
            },
        }
    }

    /// The kind of this version.
    pub fn kind(&self) -> VersionKind {
        match self {
            Version::Revision(_) => VersionKind::Revision,
            Version::Branch { .. } => VersionKind::Branch,
            Version::Tag { .. } => VersionKind::Tag,
        }
    }

    /// The symbolic name, or the revision id for a bare revision.
    pub fn name(&self) -> &str {
        match self {
            Version::Revision(r) => r.as_str(),
            Version::Branch { name, .. } | Version::Tag { name, .. } => name,
        }
    }

    /// The concrete revision this version is bound to, if known.
    pub fn underlying_revision(&self) -> Option<&Revision> {
        match self {
            Version::Revision(r) => Some(r),
            Version::Branch { revision, .. } | Version::Tag { revision, .. } => revision.as_ref(),
        }
    }

    /// Parse a tag name as a semantic version.
    ///
    /// A single leading `v` is accepted (`v0.8.0`). Returns `None` for
    /// branches, revisions and tags that are not semver-shaped.
    pub fn semver(&self) -> Option<semver::Version> {
        match self {
            Version::Tag { name, .. } => parse_semver_tag(name),
            _ => None,
        }
    }
}

/// Parse a tag name as a semantic version, accepting a leading `v`.
pub fn parse_semver_tag(name: &str) -> Option<semver::Version> {
    let trimmed = name.strip_prefix('v').unwrap_or(name);
    semver::Version::parse(trimmed).ok()
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        match (self.underlying_revision(), other.underlying_revision()) {
            (Some(a), Some(b)) => a == b,
            _ => self.kind() == other.kind() && self.name() == other.name(),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Core data structures for Berth.
//!
//! This module contains the foundational types used throughout Berth:
//! - Project roots and versions
//! - Manifests and locks
//! - The workspace context and loaded projects

pub mod errors;
pub mod lock;
pub mod manifest;
pub mod project;
pub mod project_root;
pub mod version;
pub mod workspace;

pub use errors::WorkspaceError;
pub use lock::{Lock, LockedProject, Memo, LOCK_NAME};
pub use manifest::{Constraint, Manifest, MANIFEST_NAME};
pub use project::Project;
pub use project_root::ProjectRoot;
pub use version::{Revision, Version, VersionKind};
pub use workspace::{WorkspaceContext, SRC_DIR, WORKSPACE_PATH_ENV};

//! Project - a loaded project root with its manifest and lock.

use std::path::{Path, PathBuf};

use crate::core::lock::LOCK_NAME;
use crate::core::manifest::MANIFEST_NAME;
use crate::core::{Lock, Manifest, ProjectRoot};

/// A project found in the workspace.
#[derive(Debug, Clone)]
pub struct Project {
    /// Absolute directory holding the manifest
    absolute_root: PathBuf,

    /// Canonical identifier derived from the directory
    import_root: ProjectRoot,

    /// The parsed manifest
    manifest: Manifest,

    /// The parsed lock, if one exists on disk
    lock: Option<Lock>,
}

impl Project {
    /// Assemble a project from its already-loaded parts.
    pub fn new(
        absolute_root: PathBuf,
        import_root: ProjectRoot,
        manifest: Manifest,
        lock: Option<Lock>,
    ) -> Self {
        Project {
            absolute_root,
            import_root,
            manifest,
            lock,
        }
    }

    /// Get the absolute root directory.
    pub fn absolute_root(&self) -> &Path {
        &self.absolute_root
    }

    /// Get the canonical project root identifier.
    pub fn import_root(&self) -> &ProjectRoot {
        &self.import_root
    }

    /// Get the manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Get the lock, if present.
    pub fn lock(&self) -> Option<&Lock> {
        self.lock.as_ref()
    }

    /// Path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.absolute_root.join(MANIFEST_NAME)
    }

    /// Path of the lock file, whether or not it exists.
    pub fn lock_path(&self) -> PathBuf {
        self.absolute_root.join(LOCK_NAME)
    }

    /// Split the project into its manifest and lock.
    pub fn into_parts(self) -> (Manifest, Option<Lock>) {
        (self.manifest, self.lock)
    }
}

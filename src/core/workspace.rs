//! Workspace context - the configured workspace root.
//!
//! Every managed project lives below `<workspace>/src/`, and its path below
//! that directory is its [`ProjectRoot`]. The context translates between the
//! two and is the receiver for project loading and version inspection.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::errors::WorkspaceError;
use crate::core::{Project, ProjectRoot, Version};
use crate::ops;
use crate::util::Config;

/// Environment variable holding the list of candidate workspace roots.
pub const WORKSPACE_PATH_ENV: &str = "BERTHPATH";

/// Directory below the workspace root that holds project sources.
pub const SRC_DIR: &str = "src";

/// An immutable workspace context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    /// Absolute workspace root directory
    root: PathBuf,
}

impl WorkspaceContext {
    /// Create a context for an explicit workspace root.
    ///
    /// No filesystem checks are made.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        WorkspaceContext { root: root.into() }
    }

    /// Create a context from a platform-separated list of candidate roots.
    ///
    /// The first absolute entry that is an existing directory wins.
    pub fn from_search_path(list: &OsStr) -> Result<Self, WorkspaceError> {
        Self::from_candidates(std::env::split_paths(list))
    }

    /// Create a context from `BERTHPATH`.
    pub fn from_env() -> Result<Self, WorkspaceError> {
        match std::env::var_os(WORKSPACE_PATH_ENV) {
            Some(list) => Self::from_search_path(&list),
            None => Err(WorkspaceError::NoWorkspaceConfigured),
        }
    }

    /// Create a context from `BERTHPATH`, falling back to the configured
    /// `workspace.paths` when the variable is unset or empty.
    pub fn discover(config: &Config) -> Result<Self, WorkspaceError> {
        match std::env::var_os(WORKSPACE_PATH_ENV) {
            Some(list) if !list.is_empty() => Self::from_search_path(&list),
            _ => Self::from_candidates(config.workspace.paths.iter().cloned()),
        }
    }

    fn from_candidates(
        candidates: impl IntoIterator<Item = PathBuf>,
    ) -> Result<Self, WorkspaceError> {
        let mut tried = Vec::new();

        for candidate in candidates {
            if candidate.as_os_str().is_empty() {
                continue;
            }
            if !candidate.is_absolute() {
                tracing::warn!(
                    "ignoring relative workspace root {}",
                    candidate.display()
                );
                tried.push(candidate);
                continue;
            }
            if candidate.is_dir() {
                tracing::debug!("using workspace root {}", candidate.display());
                return Ok(WorkspaceContext { root: candidate });
            }
            tracing::debug!("workspace root {} does not exist", candidate.display());
            tried.push(candidate);
        }

        if tried.is_empty() {
            Err(WorkspaceError::NoWorkspaceConfigured)
        } else {
            Err(WorkspaceError::NoValidWorkspaceRoot { candidates: tried })
        }
    }

    /// Get the workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the source tree directory (`<root>/src`).
    pub fn src_dir(&self) -> PathBuf {
        self.root.join(SRC_DIR)
    }

    /// Derive the project root identifier for an absolute path.
    ///
    /// The path must lie strictly below `<root>/src`; the check is lexical,
    /// symlinks are not resolved.
    pub fn split_absolute_project_root(&self, path: &Path) -> Result<ProjectRoot, WorkspaceError> {
        let src_dir = self.src_dir();
        let not_in_workspace = || WorkspaceError::PathNotInWorkspace {
            path: path.to_path_buf(),
            src_dir: src_dir.clone(),
        };

        if !path.is_absolute() {
            return Err(not_in_workspace());
        }

        let rel = path.strip_prefix(&src_dir).map_err(|_| not_in_workspace())?;
        ProjectRoot::from_relative_path(rel).ok_or_else(not_in_workspace)
    }

    /// Locate the directory of a project root in the workspace.
    pub fn absolute_project_root(&self, root: &ProjectRoot) -> Result<PathBuf, WorkspaceError> {
        let path = root.to_path_under(&self.src_dir());

        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => Ok(path),
            Ok(_) => Err(WorkspaceError::ProjectRootNotADirectory {
                root: root.to_string(),
                path,
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(WorkspaceError::ProjectRootNotFound {
                    root: root.to_string(),
                    path,
                })
            }
            Err(source) => Err(WorkspaceError::Io { path, source }),
        }
    }

    /// Load a project from an explicit root, or discover it from the
    /// current directory when `hint` is `None`.
    pub fn load_project(&self, hint: Option<&Path>) -> Result<Project, WorkspaceError> {
        ops::load_project(self, hint)
    }

    /// Discover and load the project containing `start`.
    pub fn discover_project(&self, start: &Path) -> Result<Project, WorkspaceError> {
        ops::discover_project(self, start)
    }

    /// Report the version of `root` checked out in this workspace.
    pub fn version_in_workspace(&self, root: &ProjectRoot) -> Result<Version, WorkspaceError> {
        ops::version_in_workspace(self, root)
    }
}

//! Workspace error types and diagnostics.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::core::workspace::WORKSPACE_PATH_ENV;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error raised while resolving the workspace context or loading a project.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum WorkspaceError {
    #[error("no workspace configured")]
    #[diagnostic(
        code(berth::workspace::not_configured),
        help("set BERTHPATH to one or more workspace directories")
    )]
    NoWorkspaceConfigured,

    #[error("none of the configured workspace roots is an existing directory")]
    #[diagnostic(code(berth::workspace::no_valid_root))]
    NoValidWorkspaceRoot { candidates: Vec<PathBuf> },

    #[error("{} is not within the workspace source tree {}", path.display(), src_dir.display())]
    #[diagnostic(code(berth::workspace::path_not_in_workspace))]
    PathNotInWorkspace { path: PathBuf, src_dir: PathBuf },

    #[error("invalid project root `{root}`: {reason}")]
    #[diagnostic(code(berth::workspace::invalid_root))]
    InvalidProjectRoot { root: String, reason: String },

    #[error("project root `{root}` not found at {}", path.display())]
    #[diagnostic(code(berth::workspace::root_not_found))]
    ProjectRootNotFound { root: String, path: PathBuf },

    #[error("project root `{root}` at {} is a file, not a directory", path.display())]
    #[diagnostic(code(berth::workspace::root_not_a_directory))]
    ProjectRootNotADirectory { root: String, path: PathBuf },

    #[error("could not find {manifest_name} in {}", start.display())]
    #[diagnostic(
        code(berth::project::no_manifest),
        help("run from inside a project directory containing manifest.json")
    )]
    NoManifestFound {
        start: PathBuf,
        manifest_name: &'static str,
        searched_parents: bool,
    },

    #[error("failed to read manifest {}", path.display())]
    #[diagnostic(code(berth::project::manifest_unreadable))]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse manifest {}", path.display())]
    #[diagnostic(code(berth::project::manifest_syntax))]
    ManifestSyntax {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read lock {}", path.display())]
    #[diagnostic(code(berth::project::lock_unreadable))]
    LockUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lock {}", path.display())]
    #[diagnostic(
        code(berth::project::lock_syntax),
        help("the lock is generated; regenerate it instead of editing it by hand")
    )]
    LockSyntax {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {}", path.display())]
    #[diagnostic(code(berth::project::encode))]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("locked project `{name}` has no revision, refusing to write {}", path.display())]
    #[diagnostic(
        code(berth::project::unbound_lock),
        help("bind branch and tag versions to a revision before saving the lock")
    )]
    UnboundLockedProject { path: PathBuf, name: String },

    #[error("failed to query {vcs} at {}", path.display())]
    #[diagnostic(code(berth::vcs::query))]
    VcsQuery {
        path: PathBuf,
        vcs: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("i/o error at {}", path.display())]
    #[diagnostic(code(berth::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WorkspaceError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.to_string());

        match self {
            WorkspaceError::NoWorkspaceConfigured => diag
                .with_context(format!("`{}` is unset or empty", WORKSPACE_PATH_ENV))
                .with_suggestion(suggestions::SET_BERTHPATH),

            WorkspaceError::NoValidWorkspaceRoot { candidates } => {
                let mut diag = diag;
                for candidate in candidates {
                    let note = if candidate.is_absolute() {
                        format!("{} does not exist", candidate.display())
                    } else {
                        format!("{} was skipped: workspace roots must be absolute", candidate.display())
                    };
                    diag = diag.with_context(note);
                }
                diag.with_suggestion(suggestions::SET_BERTHPATH)
            }

            WorkspaceError::PathNotInWorkspace { src_dir, .. } => diag.with_suggestion(format!(
                "Move the project below {}",
                src_dir.display()
            )),

            WorkspaceError::InvalidProjectRoot { .. } => {
                diag.with_suggestion("Project roots look like `host/org/repo`")
            }

            WorkspaceError::ProjectRootNotFound { path, .. } => diag.with_location(path),

            WorkspaceError::ProjectRootNotADirectory { path, .. } => diag.with_location(path),

            WorkspaceError::NoManifestFound {
                searched_parents, ..
            } => {
                let diag = if *searched_parents {
                    diag.with_context("searched every parent up to the filesystem root")
                } else {
                    diag.with_context("parent directories are not searched for an explicit project")
                };
                diag.with_suggestion(suggestions::NO_MANIFEST)
            }

            WorkspaceError::ManifestUnreadable { path, source }
            | WorkspaceError::LockUnreadable { path, source }
            | WorkspaceError::Io { path, source } => {
                diag.with_location(path).with_context(source.to_string())
            }

            WorkspaceError::ManifestSyntax { path, source } => diag
                .with_location(path)
                .with_context(source.to_string()),

            WorkspaceError::LockSyntax { path, source } => diag
                .with_location(path)
                .with_context(source.to_string())
                .with_suggestion(suggestions::BROKEN_LOCK),

            WorkspaceError::Encode { path, source } => {
                diag.with_location(path).with_context(source.to_string())
            }

            WorkspaceError::UnboundLockedProject { path, .. } => diag
                .with_location(path)
                .with_suggestion("Bind branch and tag versions to a revision before saving"),

            WorkspaceError::VcsQuery { path, source, .. } => diag
                .with_location(path)
                .with_context(format!("{source:#}"))
                .with_suggestion(suggestions::NOT_A_REPOSITORY),
        }
    }
}

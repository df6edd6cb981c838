//! Project discovery and loading.
//!
//! A project root is the directory holding `manifest.json`. It is found
//! either by walking up from a starting directory, or taken as given from
//! an explicit hint.

use std::io;
use std::path::{Path, PathBuf};

use crate::core::lock::LOCK_NAME;
use crate::core::manifest::MANIFEST_NAME;
use crate::core::{Lock, Manifest, Project, WorkspaceContext, WorkspaceError};
use crate::util::fs::absolute_path;

/// Load the project named by `hint`, or discover it from the current
/// working directory when `hint` is `None`.
///
/// An explicit hint is the project root itself: parents are not searched.
/// A relative hint is taken relative to the current working directory.
pub fn load_project(
    ctx: &WorkspaceContext,
    hint: Option<&Path>,
) -> Result<Project, WorkspaceError> {
    load_project_in(ctx, hint, &current_dir()?)
}

/// Like [`load_project`], with `cwd` standing in for the working directory.
fn load_project_in(
    ctx: &WorkspaceContext,
    hint: Option<&Path>,
    cwd: &Path,
) -> Result<Project, WorkspaceError> {
    let root = match hint {
        Some(path) if !path.as_os_str().is_empty() => absolute_path(cwd, path),
        _ => return discover_project(ctx, cwd),
    };

    if !root.join(MANIFEST_NAME).is_file() {
        return Err(WorkspaceError::NoManifestFound {
            start: root,
            manifest_name: MANIFEST_NAME,
            searched_parents: false,
        });
    }
    load_project_at(ctx, &root)
}

/// Discover the project containing `start` and load it.
pub fn discover_project(ctx: &WorkspaceContext, start: &Path) -> Result<Project, WorkspaceError> {
    let root = find_project_root(start)?;
    load_project_at(ctx, &root)
}

/// Walk up from `start` to the first directory containing a manifest.
pub fn find_project_root(start: &Path) -> Result<PathBuf, WorkspaceError> {
    let mut current = Some(start);

    while let Some(dir) = current {
        tracing::debug!("looking for {} in {}", MANIFEST_NAME, dir.display());
        if dir.join(MANIFEST_NAME).is_file() {
            return Ok(dir.to_path_buf());
        }
        current = dir.parent();
    }

    Err(WorkspaceError::NoManifestFound {
        start: start.to_path_buf(),
        manifest_name: MANIFEST_NAME,
        searched_parents: true,
    })
}

/// Load the project whose manifest lives in `root`.
fn load_project_at(ctx: &WorkspaceContext, root: &Path) -> Result<Project, WorkspaceError> {
    let manifest = Manifest::load(&root.join(MANIFEST_NAME))?;
    let lock = load_lock(&root.join(LOCK_NAME))?;
    let import_root = ctx.split_absolute_project_root(root)?;

    tracing::debug!(
        "loaded project {} from {} (lock: {})",
        import_root,
        root.display(),
        if lock.is_some() { "yes" } else { "no" }
    );

    Ok(Project::new(root.to_path_buf(), import_root, manifest, lock))
}

/// Load a lock if one exists. Absence is not an error.
fn load_lock(path: &Path) -> Result<Option<Lock>, WorkspaceError> {
    match std::fs::metadata(path) {
        Ok(_) => Lock::load(path).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(WorkspaceError::LockUnreadable {
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn current_dir() -> Result<PathBuf, WorkspaceError> {
    std::env::current_dir().map_err(|source| WorkspaceError::Io {
        path: PathBuf::from("."),
        source,
    })
}

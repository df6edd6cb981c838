//! Path helpers.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` when it is relative, then normalize it.
pub fn absolute_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize_path(path)
    } else {
        normalize_path(&base.join(path))
    }
}

/// Lexically remove `.` components and fold `..` into its parent.
///
/// Symlinks are not resolved, so the result stays comparable with other
/// unresolved paths. `..` at the root is dropped.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() && !out.has_root() {
                    out.push(Component::ParentDir);
                }
            }
            other => out.push(other),
        }
    }
    out
}

//! Berth - workspace context for a dependency-managed source tree
//!
//! This crate maps filesystem paths to project roots and back, discovers and
//! loads a project's manifest and lock, and reports which version of a
//! dependency is checked out in the workspace.

pub mod core;
pub mod ops;
pub mod sources;
pub mod util;

/// Test fixtures for Berth unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides temporary workspace trees and git repositories built with
/// libgit2.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    Lock, Manifest, Project, ProjectRoot, Revision, Version, WorkspaceContext, WorkspaceError,
};
pub use crate::util::Config;

//! Version-control sources.
//!
//! Sources report which revision of a project is checked out locally.

pub mod git;
pub mod inspect;

pub use git::GitInspector;
pub use inspect::{classify, RepoInspector, RepoState};

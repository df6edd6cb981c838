//! High-level operations.
//!
//! This module contains the operations run against a workspace context.

pub mod installed_version;
pub mod load_project;

pub use installed_version::{version_in_workspace, version_in_workspace_with};
pub use load_project::{discover_project, find_project_root, load_project};

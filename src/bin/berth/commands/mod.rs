//! Command implementations

pub mod locate;
pub mod root;
pub mod status;
pub mod version;

use anyhow::Result;
use berth::{Config, WorkspaceContext};

/// Resolve the workspace context from `BERTHPATH` and the user config.
pub fn workspace() -> Result<WorkspaceContext> {
    let config = Config::load_user();
    Ok(WorkspaceContext::discover(&config)?)
}

//! `berth locate` command

use anyhow::Result;

use crate::cli::LocateArgs;
use berth::ProjectRoot;

pub fn execute(args: LocateArgs) -> Result<()> {
    let ctx = super::workspace()?;
    let root = ProjectRoot::new(args.root)?;

    let path = ctx.absolute_project_root(&root)?;
    println!("{}", path.display());
    Ok(())
}

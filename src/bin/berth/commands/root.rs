//! `berth root` command

use anyhow::Result;

use crate::cli::RootArgs;
use berth::util::fs::absolute_path;

pub fn execute(args: RootArgs) -> Result<()> {
    let ctx = super::workspace()?;

    let root = match args.path {
        Some(path) => {
            let path = absolute_path(&std::env::current_dir()?, &path);
            ctx.split_absolute_project_root(&path)?
        }
        None => ctx.load_project(None)?.import_root().clone(),
    };

    println!("{}", root);
    Ok(())
}

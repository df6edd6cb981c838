//! `berth status` command

use anyhow::Result;

use crate::cli::StatusArgs;

pub fn execute(args: StatusArgs) -> Result<()> {
    let ctx = super::workspace()?;
    let project = ctx.load_project(args.project.as_deref())?;

    println!("project:      {}", project.import_root());
    println!("directory:    {}", project.absolute_root().display());
    println!(
        "dependencies: {}",
        project.manifest().dependencies.len()
    );

    match project.lock() {
        Some(lock) => {
            println!("lock:         {} projects", lock.projects.len());
            println!("memo:         {}", lock.memo);
            for locked in &lock.projects {
                println!("  {} {} {}", locked.name, locked.version.kind(), locked.version);
            }
        }
        None => println!("lock:         none"),
    }

    Ok(())
}

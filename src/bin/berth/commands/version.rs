//! `berth version` command

use anyhow::{bail, Result};

use crate::cli::VersionArgs;
use berth::util::diagnostic::{emit, Diagnostic};
use berth::ProjectRoot;

pub fn execute(args: VersionArgs, color: bool) -> Result<()> {
    let ctx = super::workspace()?;
    let mut failed = 0;

    for root in &args.roots {
        let result = ProjectRoot::new(root.as_str()).and_then(|pr| ctx.version_in_workspace(&pr));

        match result {
            Ok(version) => match version.underlying_revision() {
                Some(rev) if version.name() != rev.as_str() => {
                    println!("{} {} {} ({})", root, version.kind(), version, rev)
                }
                _ => println!("{} {} {}", root, version.kind(), version),
            },
            Err(e) => {
                failed += 1;
                let mut diag = Diagnostic::warning(format!("skipping `{}`", root))
                    .with_context(e.to_string());
                for note in e.to_diagnostic().notes {
                    diag = diag.with_context(note);
                }
                emit(&diag, color);
            }
        }
    }

    if failed > 0 {
        bail!("could not determine the version of {} project(s)", failed);
    }
    Ok(())
}

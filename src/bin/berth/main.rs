//! Berth CLI - inspect the workspace context of a project

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use berth::WorkspaceError;
use berth::util::diagnostic::{emit, Diagnostic};

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    if let Err(e) = run(cli) {
        let diag = match e.downcast_ref::<WorkspaceError>() {
            Some(err) => err.to_diagnostic(),
            None => Diagnostic::error(format!("{:#}", e)),
        };
        emit(&diag, color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("berth=debug")
    } else {
        EnvFilter::new("berth=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let color = !cli.no_color;

    match cli.command {
        Commands::Root(args) => commands::root::execute(args),
        Commands::Locate(args) => commands::locate::execute(args),
        Commands::Status(args) => commands::status::execute(args),
        Commands::Version(args) => commands::version::execute(args, color),
    }
}

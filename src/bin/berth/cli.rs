//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Berth - workspace context for dependency-managed projects
#[derive(Parser)]
#[command(name = "berth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the project root of a directory
    Root(RootArgs),

    /// Print the directory of a project root
    Locate(LocateArgs),

    /// Show the manifest and lock of the current project
    Status(StatusArgs),

    /// Show the version checked out for project roots
    Version(VersionArgs),
}

#[derive(Args)]
pub struct RootArgs {
    /// Directory inside the workspace source tree (defaults to the
    /// current project's root)
    pub path: Option<PathBuf>,
}

#[derive(Args)]
pub struct LocateArgs {
    /// Project root, e.g. github.com/pkg/errors
    pub root: String,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Project directory (defaults to discovering from the current directory)
    #[arg(long)]
    pub project: Option<PathBuf>,
}

#[derive(Args)]
pub struct VersionArgs {
    /// Project roots to inspect
    #[arg(required = true)]
    pub roots: Vec<String>,
}

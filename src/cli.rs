use std::path::PathBuf;

use clap::Parser;

/// Install-time platform check for the tsimports npm distribution.
///
/// The package manager invokes this with no arguments; the flags exist for
/// running the check by hand against another install tree or platform set.
#[derive(Debug, Parser)]
#[command(name = "tsimports-postinstall", version, about)]
pub struct Cli {
    /// Directory to start the node_modules search from (defaults to the
    /// current working directory)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Load the platform table from a JSON file instead of the built-in set
    #[arg(long)]
    pub table: Option<PathBuf>,
}

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tsimports_postinstall::cli::Cli;
use tsimports_postinstall::locate::NodeModulesLocator;
use tsimports_postinstall::platform::Host;
use tsimports_postinstall::probe::LddProbe;
use tsimports_postinstall::table::ArtifactTable;

// Every path out of this binary exits 0: a missing optional native binary
// must never fail the surrounding npm install.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .without_time()
        .init();

    let cli = Cli::parse();

    let table = match &cli.table {
        Some(path) => match ArtifactTable::from_file(path) {
            Ok(table) => table,
            Err(e) => {
                eprintln!(
                    "{} ignoring platform table {}: {e}",
                    "warning:".yellow().bold(),
                    path.display(),
                );
                ArtifactTable::builtin()
            }
        },
        None => ArtifactTable::builtin(),
    };

    let locator = match &cli.dir {
        Some(dir) => NodeModulesLocator::new(dir.clone()),
        None => match NodeModulesLocator::from_cwd() {
            Ok(locator) => locator,
            Err(e) => {
                eprintln!(
                    "{} cannot determine the working directory: {e}",
                    "warning:".yellow().bold(),
                );
                return;
            }
        },
    };

    tsimports_postinstall::resolve(&Host::current(), &table, &LddProbe, &locator).report();
}

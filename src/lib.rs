//! Install-time platform resolution for the tsimports npm distribution.
//!
//! The npm package users install carries no executable of its own; the real
//! binary ships inside a per-platform optional dependency
//! (`@tsimports/cli-<os>-<arch>[-musl]`). After dependency installation this
//! crate's binary runs as the postinstall hook: it classifies the host,
//! probes the C library on Linux, maps the result through the artifact
//! table, and checks that the expected binary actually reached disk —
//! warning, never failing, when it did not.
//!
//! ```no_run
//! use tsimports_postinstall::locate::NodeModulesLocator;
//! use tsimports_postinstall::platform::Host;
//! use tsimports_postinstall::probe::LddProbe;
//! use tsimports_postinstall::table::ArtifactTable;
//!
//! let locator = NodeModulesLocator::from_cwd().unwrap();
//! let outcome = tsimports_postinstall::resolve(
//!     &Host::current(),
//!     &ArtifactTable::builtin(),
//!     &LddProbe,
//!     &locator,
//! );
//! outcome.report();
//! ```

pub mod cli;
pub mod error;
pub mod locate;
pub mod platform;
pub mod probe;
pub mod resolve;
pub mod table;

pub use error::{PostinstallError, Result};
pub use resolve::{resolve, Resolution};

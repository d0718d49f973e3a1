//! One-shot resolution: from host identifiers to a located binary, or to the
//! warning a human will read in the install log.

use std::path::PathBuf;

use colored::Colorize;

use crate::locate::ArtifactLocator;
use crate::platform::{Arch, Host, Os, PlatformKey};
use crate::probe::LibcProbe;
use crate::table::{ArtifactId, ArtifactTable};

/// Outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The platform is supported and the binary is on disk.
    Resolved(PathBuf),
    /// The platform is supported but the companion package did not resolve.
    UnresolvedArtifact(ArtifactId),
    /// No prebuilt binary exists for this host.
    UnsupportedPlatform { os: String, arch: String },
}

/// Map the host to an artifact and check that it is present on disk.
///
/// The probe runs at most once, and only for Linux hosts; the locator is
/// consulted only after a successful table lookup. Nothing here is fatal.
pub fn resolve(
    host: &Host,
    table: &ArtifactTable,
    probe: &dyn LibcProbe,
    locator: &dyn ArtifactLocator,
) -> Resolution {
    let unsupported = || Resolution::UnsupportedPlatform {
        os: host.os.clone(),
        arch: host.arch.clone(),
    };

    let (Some(os), Some(arch)) = (Os::from_host(&host.os), Arch::from_host(&host.arch)) else {
        return unsupported();
    };

    let musl = os == Os::Linux && probe.probe().is_musl();
    let key = PlatformKey::new(os, musl);

    let Some(artifact) = table.lookup(key, arch) else {
        return unsupported();
    };
    tracing::debug!("artifact for {key}/{arch}: {artifact}");

    match locator.locate(artifact) {
        Some(path) => {
            tracing::debug!("resolved {artifact} to {}", path.display());
            Resolution::Resolved(path)
        }
        None => Resolution::UnresolvedArtifact(artifact.clone()),
    }
}

impl Resolution {
    /// Print the human-facing outcome. Success is silent; every failure is a
    /// warning, never an error, because the surrounding install must proceed.
    pub fn report(&self) {
        match self {
            Resolution::Resolved(path) => {
                tracing::debug!("prebuilt binary present at {}", path.display());
            }
            Resolution::UnresolvedArtifact(artifact) => {
                eprintln!(
                    "{} failed to resolve the binary file \"{artifact}\". \
                     Running tsimports from the npm package will probably not work correctly.",
                    "warning:".yellow().bold(),
                );
            }
            Resolution::UnsupportedPlatform { os, arch } => {
                eprintln!(
                    "{} no prebuilt tsimports binaries are published for {os}-{arch} yet. \
                     You can still use the CLI by cloning the tsimports repository \
                     and building it for your platform.",
                    "warning:".yellow().bold(),
                );
            }
        }
    }
}

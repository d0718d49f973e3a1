//! The artifact table: which companion package carries the prebuilt binary
//! for each supported platform.
//!
//! The table is configuration data, not logic. The compiled-in default covers
//! everything the project currently publishes; a deployment that trails or
//! leads that set loads its own JSON copy with the same shape:
//!
//! ```json
//! {
//!   "darwin": { "arm64": "@tsimports/cli-darwin-arm64/tsimports" },
//!   "linux-musl": { "x64": "@tsimports/cli-linux-x64-musl/tsimports" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::{PostinstallError, Result};
use crate::platform::{Arch, PlatformKey};

/// Opaque identifier of a distributable binary: the companion package name
/// plus the path of the executable inside it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable two-level mapping from platform key and architecture to the
/// artifact that serves it. A missing pair is a supported-table miss, not an
/// error.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct ArtifactTable {
    entries: BTreeMap<PlatformKey, BTreeMap<Arch, ArtifactId>>,
}

impl ArtifactTable {
    /// The compiled-in default, covering every platform the project publishes
    /// binaries for.
    pub fn builtin() -> Self {
        fn row(x64: &str, arm64: &str) -> BTreeMap<Arch, ArtifactId> {
            BTreeMap::from([
                (Arch::X64, ArtifactId::new(x64)),
                (Arch::Arm64, ArtifactId::new(arm64)),
            ])
        }

        Self {
            entries: BTreeMap::from([
                (
                    PlatformKey::Win32,
                    row(
                        "@tsimports/cli-win32-x64/tsimports.exe",
                        "@tsimports/cli-win32-arm64/tsimports.exe",
                    ),
                ),
                (
                    PlatformKey::Darwin,
                    row(
                        "@tsimports/cli-darwin-x64/tsimports",
                        "@tsimports/cli-darwin-arm64/tsimports",
                    ),
                ),
                (
                    PlatformKey::Linux,
                    row(
                        "@tsimports/cli-linux-x64/tsimports",
                        "@tsimports/cli-linux-arm64/tsimports",
                    ),
                ),
                (
                    PlatformKey::LinuxMusl,
                    row(
                        "@tsimports/cli-linux-x64-musl/tsimports",
                        "@tsimports/cli-linux-arm64-musl/tsimports",
                    ),
                ),
            ]),
        }
    }

    /// Parse a table from JSON and validate it.
    pub fn from_json(src: &str) -> Result<Self> {
        let table: ArtifactTable = serde_json::from_str(src)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a table override from a file on disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_json(&src)
    }

    pub fn lookup(&self, platform: PlatformKey, arch: Arch) -> Option<&ArtifactId> {
        self.entries.get(&platform)?.get(&arch)
    }

    fn validate(&self) -> Result<()> {
        for (platform, row) in &self.entries {
            if row.is_empty() {
                return Err(PostinstallError::Table(format!(
                    "platform '{platform}' maps to no artifacts"
                )));
            }
            for (arch, artifact) in row {
                // package-name/path-inside-package
                if !artifact.0.contains('/') {
                    return Err(PostinstallError::Table(format!(
                        "malformed artifact identifier '{artifact}' for {platform}/{arch}"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_published_platform() {
        let table = ArtifactTable::builtin();
        let expected = [
            (PlatformKey::Win32, Arch::X64, "@tsimports/cli-win32-x64/tsimports.exe"),
            (PlatformKey::Win32, Arch::Arm64, "@tsimports/cli-win32-arm64/tsimports.exe"),
            (PlatformKey::Darwin, Arch::X64, "@tsimports/cli-darwin-x64/tsimports"),
            (PlatformKey::Darwin, Arch::Arm64, "@tsimports/cli-darwin-arm64/tsimports"),
            (PlatformKey::Linux, Arch::X64, "@tsimports/cli-linux-x64/tsimports"),
            (PlatformKey::Linux, Arch::Arm64, "@tsimports/cli-linux-arm64/tsimports"),
            (PlatformKey::LinuxMusl, Arch::X64, "@tsimports/cli-linux-x64-musl/tsimports"),
            (PlatformKey::LinuxMusl, Arch::Arm64, "@tsimports/cli-linux-arm64-musl/tsimports"),
        ];
        for (platform, arch, id) in expected {
            assert_eq!(
                table.lookup(platform, arch).map(ArtifactId::as_str),
                Some(id),
                "missing or wrong entry for {platform}/{arch}"
            );
        }
    }

    #[test]
    fn test_builtin_passes_its_own_validation() {
        assert!(ArtifactTable::builtin().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_table() {
        let table = ArtifactTable::from_json(
            r#"{ "darwin": { "arm64": "@tsimports/cli-darwin-arm64/tsimports" } }"#,
        )
        .unwrap();
        assert!(table.lookup(PlatformKey::Darwin, Arch::Arm64).is_some());
        // Absent pairs are a miss, not an error.
        assert!(table.lookup(PlatformKey::Darwin, Arch::X64).is_none());
        assert!(table.lookup(PlatformKey::Linux, Arch::X64).is_none());
    }

    #[test]
    fn test_from_json_rejects_unknown_platform() {
        let err = ArtifactTable::from_json(r#"{ "freebsd": { "x64": "pkg/bin" } }"#);
        assert!(matches!(err, Err(PostinstallError::Serialization(_))));
    }

    #[test]
    fn test_from_json_rejects_unknown_arch() {
        let err = ArtifactTable::from_json(r#"{ "linux": { "ia32": "pkg/bin" } }"#);
        assert!(matches!(err, Err(PostinstallError::Serialization(_))));
    }

    #[test]
    fn test_from_json_rejects_identifier_without_path() {
        let err = ArtifactTable::from_json(r#"{ "linux": { "x64": "just-a-package" } }"#);
        assert!(matches!(err, Err(PostinstallError::Table(_))));
    }

    #[test]
    fn test_from_json_rejects_empty_row() {
        let err = ArtifactTable::from_json(r#"{ "linux": {} }"#);
        assert!(matches!(err, Err(PostinstallError::Table(_))));
    }

    #[test]
    fn test_from_file_missing_is_io_error() {
        let err = ArtifactTable::from_file(Path::new("/nonexistent/platforms.json"));
        assert!(matches!(err, Err(PostinstallError::Io(_))));
    }
}

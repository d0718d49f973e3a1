//! Host platform classification.
//!
//! The artifact table speaks the npm-ecosystem vocabulary (`win32`, `darwin`,
//! `x64`, `arm64`); the classifiers here accept both that vocabulary and the
//! Rust target names so the same code serves the install hook and direct
//! invocation.

use std::fmt;

use serde::Deserialize;

/// Raw host identifiers as reported by the execution environment.
#[derive(Debug, Clone)]
pub struct Host {
    pub os: String,
    pub arch: String,
}

impl Host {
    /// Snapshot the identifiers of the machine we are running on.
    pub fn current() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        }
    }
}

/// Operating systems the project publishes prebuilt binaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Win32,
    Darwin,
    Linux,
}

impl Os {
    /// Classify a raw OS identifier, normalizing `windows` -> win32 and
    /// `macos` -> darwin. Unrecognized identifiers are not an error; they
    /// surface later as an unsupported platform.
    pub fn from_host(raw: &str) -> Option<Self> {
        match raw {
            "win32" | "windows" => Some(Os::Win32),
            "darwin" | "macos" => Some(Os::Darwin),
            "linux" => Some(Os::Linux),
            _ => None,
        }
    }
}

/// CPU architectures the project publishes prebuilt binaries for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub enum Arch {
    #[serde(rename = "x64")]
    X64,
    #[serde(rename = "arm64")]
    Arm64,
}

impl Arch {
    /// Classify a raw architecture identifier (`x64`/`x86_64`, `arm64`/`aarch64`).
    pub fn from_host(raw: &str) -> Option<Self> {
        match raw {
            "x64" | "x86_64" => Some(Arch::X64),
            "arm64" | "aarch64" => Some(Arch::Arm64),
            _ => None,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        };
        f.write_str(s)
    }
}

/// Outer lookup dimension of the artifact table: the OS paired with the
/// C-library flavor where that distinction matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub enum PlatformKey {
    #[serde(rename = "win32")]
    Win32,
    #[serde(rename = "darwin")]
    Darwin,
    #[serde(rename = "linux")]
    Linux,
    #[serde(rename = "linux-musl")]
    LinuxMusl,
}

impl PlatformKey {
    /// Pair an OS with the musl verdict. Only Linux differentiates on the
    /// C library; the flag is ignored everywhere else.
    pub fn new(os: Os, musl: bool) -> Self {
        match (os, musl) {
            (Os::Linux, true) => PlatformKey::LinuxMusl,
            (Os::Linux, false) => PlatformKey::Linux,
            (Os::Win32, _) => PlatformKey::Win32,
            (Os::Darwin, _) => PlatformKey::Darwin,
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlatformKey::Win32 => "win32",
            PlatformKey::Darwin => "darwin",
            PlatformKey::Linux => "linux",
            PlatformKey::LinuxMusl => "linux-musl",
        };
        f.write_str(s)
    }
}

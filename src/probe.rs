//! Best-effort C-library detection for Linux hosts.
//!
//! `ldd --version` is the one portable-enough signal: glibc prints its banner
//! on stdout and exits 0, while musl's ldd rejects the flag, exits non-zero,
//! and prints `musl libc` on stderr. Classification therefore inspects the
//! captured text of both channels and ignores how the command itself fared.

use std::process::Command;

/// Captured result of one probe run: whatever text the command produced on
/// either channel, plus whether it exited successfully.
#[derive(Debug, Clone, Default)]
pub struct ProbeOutput {
    pub text: String,
    pub success: bool,
}

impl ProbeOutput {
    /// True when the captured text identifies the musl C library.
    pub fn is_musl(&self) -> bool {
        self.text.contains("musl")
    }
}

/// A source of C-library evidence.
pub trait LibcProbe {
    fn probe(&self) -> ProbeOutput;
}

/// The system probe: invoke `ldd --version` and capture whatever it says.
pub struct LddProbe;

impl LibcProbe for LddProbe {
    fn probe(&self) -> ProbeOutput {
        match Command::new("ldd").arg("--version").output() {
            Ok(out) => {
                let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&out.stderr));
                ProbeOutput {
                    text,
                    success: out.status.success(),
                }
            }
            // Command absent or unspawnable: no evidence either way.
            Err(_) => ProbeOutput::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glibc_banner_is_not_musl() {
        let out = ProbeOutput {
            text: "ldd (Ubuntu GLIBC 2.35-0ubuntu3) 2.35\n".to_string(),
            success: true,
        };
        assert!(!out.is_musl());
    }

    #[test]
    fn test_musl_on_error_channel() {
        // musl's ldd fails the --version invocation but still identifies itself.
        let out = ProbeOutput {
            text: "musl libc (x86_64)\nVersion 1.2.4\n".to_string(),
            success: false,
        };
        assert!(out.is_musl());
    }

    #[test]
    fn test_musl_on_success_channel() {
        let out = ProbeOutput {
            text: "musl libc\n".to_string(),
            success: true,
        };
        assert!(out.is_musl());
    }

    #[test]
    fn test_empty_output_defaults_to_glibc() {
        assert!(!ProbeOutput::default().is_musl());
    }

    #[test]
    fn test_system_probe_never_panics() {
        // The command may or may not exist here; either way we get an output.
        let _ = LddProbe.probe();
    }
}

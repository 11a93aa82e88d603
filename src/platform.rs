//! Platform-specific operations.
//!
//! `open` and `clear-screen` shell out to a different external tool on each
//! host OS. The variants are modeled as one capability trait with a concrete
//! implementation per platform, selected once at startup by [`detect`].

use crate::error::{SigilError, SigilResult};
use std::path::Path;
use std::process::Command;

/// The two platform-variant operations the shell needs from the host.
pub trait PlatformOps: Send + Sync {
    /// Platform identifier, for diagnostics.
    fn name(&self) -> &'static str;

    /// Open `path` with the OS default handler.
    fn open(&self, path: &Path) -> SigilResult<()>;

    /// Clear the terminal.
    fn clear_screen(&self) -> SigilResult<()>;
}

/// Select the implementation for the host OS. Unknown platforms get a
/// stub that reports every operation as unavailable.
pub fn detect() -> Box<dyn PlatformOps> {
    match std::env::consts::OS {
        "windows" => Box::new(WindowsOps),
        "macos" => Box::new(MacOsOps),
        "linux" => Box::new(LinuxOps),
        _ => Box::new(UnsupportedOps),
    }
}

/// Run `program args...` and fold spawn failure / non-zero exit into
/// [`SigilError::ExternalTool`].
pub(crate) fn run_tool(program: &str, args: &[&str]) -> SigilResult<()> {
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|e| SigilError::ExternalTool(format!("{}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(SigilError::ExternalTool(format!(
            "{} exited with {}",
            program, status
        )))
    }
}

pub struct WindowsOps;

impl PlatformOps for WindowsOps {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn open(&self, path: &Path) -> SigilResult<()> {
        // `start` is a cmd builtin; the empty string is the window title slot.
        run_tool("cmd", &["/C", "start", "", &path.to_string_lossy()])
    }

    fn clear_screen(&self) -> SigilResult<()> {
        run_tool("cmd", &["/C", "cls"])
    }
}

pub struct MacOsOps;

impl PlatformOps for MacOsOps {
    fn name(&self) -> &'static str {
        "macos"
    }

    fn open(&self, path: &Path) -> SigilResult<()> {
        run_tool("open", &[&path.to_string_lossy()])
    }

    fn clear_screen(&self) -> SigilResult<()> {
        run_tool("clear", &[])
    }
}

pub struct LinuxOps;

impl PlatformOps for LinuxOps {
    fn name(&self) -> &'static str {
        "linux"
    }

    fn open(&self, path: &Path) -> SigilResult<()> {
        run_tool("xdg-open", &[&path.to_string_lossy()])
    }

    fn clear_screen(&self) -> SigilResult<()> {
        run_tool("clear", &[])
    }
}

pub struct UnsupportedOps;

impl PlatformOps for UnsupportedOps {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn open(&self, _path: &Path) -> SigilResult<()> {
        Err(SigilError::ExternalTool(
            "no opener available on this platform".to_string(),
        ))
    }

    fn clear_screen(&self) -> SigilResult<()> {
        Err(SigilError::ExternalTool(
            "no clear-screen available on this platform".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_matches_host_os() {
        let ops = detect();
        match std::env::consts::OS {
            "windows" | "macos" | "linux" => assert_eq!(ops.name(), std::env::consts::OS),
            _ => assert_eq!(ops.name(), "unsupported"),
        }
    }

    #[test]
    fn unsupported_reports_external_tool_failure() {
        let ops = UnsupportedOps;
        assert!(matches!(
            ops.open(Path::new("/tmp")),
            Err(SigilError::ExternalTool(_))
        ));
        assert!(matches!(
            ops.clear_screen(),
            Err(SigilError::ExternalTool(_))
        ));
    }

    #[test]
    fn missing_tool_is_external_tool_failure() {
        let err = run_tool("sigil-no-such-tool-xyz", &[]).expect_err("expected spawn failure");
        assert!(matches!(err, SigilError::ExternalTool(_)));
    }
}

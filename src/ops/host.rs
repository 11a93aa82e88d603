//! Host-integration handlers: open, clear screen, system info.

use crate::error::{SigilError, SigilResult};
use crate::platform::run_tool;
use crate::shell::Shell;
use std::path::PathBuf;

impl Shell {
    /// `open` - hand the path to the OS default handler.
    pub fn cmd_open(&self, path: &str) -> SigilResult<String> {
        let path = path.trim();
        if path.is_empty() {
            return Err(SigilError::InvalidArgument(
                "path cannot be empty".to_string(),
            ));
        }

        let target = self.resolve(path);
        if !target.exists() {
            return Err(SigilError::NotFound(format!("'{}'", path)));
        }

        self.platform.open(&target)?;
        Ok(String::new())
    }

    /// `cls` - clear the terminal through the platform capability.
    pub fn cmd_clear(&self) -> SigilResult<String> {
        self.platform.clear_screen()?;
        Ok(String::new())
    }

    /// `neofetch` - run neofetch when it is on PATH, otherwise fall back to
    /// `uname -a`. The tool writes straight to the terminal.
    pub fn cmd_system_info(&self) -> SigilResult<String> {
        if find_in_path("neofetch").is_some() {
            run_tool("neofetch", &[])?;
        } else {
            run_tool("uname", &["-a"])?;
        }
        Ok(String::new())
    }
}

/// Locate an executable by scanning the PATH entries.
fn find_in_path(program: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

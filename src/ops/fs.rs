//! Filesystem operation handlers.

use crate::error::{SigilError, SigilResult};
use crate::shell::Shell;
use chrono::{DateTime, Local};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Fixed content written by `mkfile`.
pub const FILE_PLACEHOLDER: &[u8] = b"File created!";

impl Shell {
    /// Expand a leading `~` and resolve relative paths against the session's
    /// working directory.
    pub(crate) fn resolve(&self, path: &str) -> PathBuf {
        let expanded = expand_home(path);
        if expanded.is_absolute() {
            expanded
        } else {
            self.cwd.join(expanded)
        }
    }

    /// `ls` - enumerate the direct children of the working directory.
    ///
    /// An empty directory is a success with a "no entries" message, not a
    /// failure.
    pub fn cmd_list(&self) -> SigilResult<String> {
        let dir = fs::read_dir(&self.cwd)
            .map_err(|e| SigilError::from_io(e, &self.cwd.display().to_string()))?;

        let mut lines = Vec::new();
        for entry in dir {
            let entry = entry.map_err(|e| SigilError::from_io(e, "directory entry"))?;
            let name = entry.file_name().to_string_lossy().into_owned();
            let meta = entry
                .metadata()
                .map_err(|e| SigilError::from_io(e, &name))?;

            lines.push(format!(
                "{} (Type: {}, Size: {} bytes, Permissions: {}, Modified: {})",
                name,
                extension_of(&name),
                meta.len(),
                permission_digits(&meta),
                format_mtime(&meta),
            ));
        }

        if lines.is_empty() {
            return Ok("No files or folders in the current directory.".to_string());
        }

        lines.sort();
        Ok(lines.join("\n"))
    }

    /// `cd` - commit a new working directory only after it is known to exist
    /// and be a directory. `..` goes to the parent (the root stays put).
    pub fn cmd_change_dir(&mut self, path: &str) -> SigilResult<String> {
        let path = path.trim();
        if path.is_empty() {
            return Err(SigilError::InvalidArgument("path cannot be empty".to_string()));
        }

        let target = if path == ".." {
            match self.cwd.parent() {
                Some(parent) => parent.to_path_buf(),
                None => self.cwd.clone(),
            }
        } else {
            self.resolve(path)
        };

        if !target.is_dir() {
            return Err(SigilError::NotFound(format!("directory '{}'", path)));
        }

        self.cwd = target
            .canonicalize()
            .map_err(|e| SigilError::from_io(e, path))?;
        Ok(String::new())
    }

    /// `mkfile` - create a new file holding [`FILE_PLACEHOLDER`].
    ///
    /// An existing file is rejected with `AlreadyExists` rather than
    /// truncated, the same contract `mkfolder` has.
    pub fn cmd_make_file(&self, name: &str) -> SigilResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SigilError::InvalidArgument(
                "file name cannot be empty".to_string(),
            ));
        }

        let target = self.resolve(name);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .map_err(|e| SigilError::from_io(e, name))?;

        file.write_all(FILE_PLACEHOLDER)
            .map_err(|e| SigilError::from_io(e, name))?;
        Ok("File created successfully.".to_string())
    }

    /// `mkfolder` - create a single new directory (missing parents fail).
    pub fn cmd_make_folder(&self, name: &str) -> SigilResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SigilError::InvalidArgument(
                "folder name cannot be empty".to_string(),
            ));
        }

        fs::create_dir(self.resolve(name)).map_err(|e| SigilError::from_io(e, name))?;
        Ok("Folder created successfully.".to_string())
    }

    /// `del` - remove a single file. Directories are never removed here.
    pub fn cmd_delete(&self, path: &str) -> SigilResult<String> {
        let path = path.trim();
        if path.is_empty() {
            return Err(SigilError::InvalidArgument(
                "file path cannot be empty".to_string(),
            ));
        }

        fs::remove_file(self.resolve(path)).map_err(|e| SigilError::from_io(e, path))?;
        Ok("File deleted successfully.".to_string())
    }

    /// `rename` - same-parent rename. The source must exist and the target
    /// name must be free.
    pub fn cmd_rename(&self, old: &str, new: &str) -> SigilResult<String> {
        let (old, new) = (old.trim(), new.trim());
        if old.is_empty() || new.is_empty() {
            return Err(SigilError::InvalidArgument(
                "names cannot be empty".to_string(),
            ));
        }

        let from = self.resolve(old);
        if !from.exists() {
            return Err(SigilError::NotFound(format!("'{}'", old)));
        }
        let to = self.resolve(new);
        if to.exists() {
            return Err(SigilError::AlreadyExists(format!("'{}'", new)));
        }

        fs::rename(&from, &to).map_err(|e| SigilError::from_io(e, old))?;
        Ok("File or folder renamed successfully.".to_string())
    }

    /// `move` - move the source into an existing destination directory,
    /// keeping the source's base name.
    pub fn cmd_move(&self, src: &str, dest: &str) -> SigilResult<String> {
        let (src, dest) = (src.trim(), dest.trim());
        if src.is_empty() || dest.is_empty() {
            return Err(SigilError::InvalidArgument(
                "paths cannot be empty".to_string(),
            ));
        }

        let src_path = self.resolve(src);
        if !src_path.exists() {
            return Err(SigilError::NotFound(format!("source '{}'", src)));
        }
        let dest_dir = self.resolve(dest);
        if !dest_dir.is_dir() {
            return Err(SigilError::NotFound(format!(
                "destination directory '{}'",
                dest
            )));
        }

        let name = src_path.file_name().ok_or_else(|| {
            SigilError::InvalidArgument(format!("source '{}' has no base name", src))
        })?;
        fs::rename(&src_path, dest_dir.join(name)).map_err(|e| SigilError::from_io(e, src))?;
        Ok("File or folder moved successfully.".to_string())
    }

    /// `copy` - a file is copied into the destination directory; a directory
    /// is copied recursively to `destination/basename(source)`.
    pub fn cmd_copy(&self, src: &str, dest: &str) -> SigilResult<String> {
        let (src, dest) = (src.trim(), dest.trim());
        if src.is_empty() || dest.is_empty() {
            return Err(SigilError::InvalidArgument(
                "paths cannot be empty".to_string(),
            ));
        }

        let src_path = self.resolve(src);
        let dest_dir = self.resolve(dest);
        if !dest_dir.is_dir() {
            return Err(SigilError::NotFound(format!(
                "destination directory '{}'",
                dest
            )));
        }
        let name = src_path.file_name().ok_or_else(|| {
            SigilError::InvalidArgument(format!("source '{}' has no base name", src))
        })?;

        // Resolved paths, so `copy f.txt .` and `copy tree tree` are caught
        // before fs::copy truncates the source it is about to read.
        let src_real = src_path
            .canonicalize()
            .map_err(|_| SigilError::NotFound(format!("source '{}'", src)))?;
        let dest_real = dest_dir
            .canonicalize()
            .map_err(|e| SigilError::from_io(e, dest))?;
        let target = dest_real.join(name);
        if target.starts_with(&src_real) {
            return Err(SigilError::Io(format!(
                "cannot copy '{}' onto or into itself",
                src
            )));
        }

        if src_real.is_file() {
            fs::copy(&src_real, &target).map_err(|e| SigilError::from_io(e, src))?;
            Ok("File copied successfully.".to_string())
        } else if src_real.is_dir() {
            copy_tree(&src_real, &target)?;
            Ok("Directory copied successfully.".to_string())
        } else {
            Err(SigilError::NotFound(format!("source '{}'", src)))
        }
    }

    /// `search` - walk the working directory tree and collect every file
    /// whose name contains `pattern` as a case-sensitive substring.
    ///
    /// Unreadable subtrees are skipped rather than aborting the walk.
    pub fn cmd_search(&self, pattern: &str) -> SigilResult<String> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(SigilError::InvalidArgument(
                "search pattern cannot be empty".to_string(),
            ));
        }

        let mut matches = Vec::new();
        for entry in WalkDir::new(&self.cwd).into_iter().filter_map(Result::ok) {
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.file_name().to_string_lossy().contains(pattern) {
                let shown = match entry.path().strip_prefix(&self.cwd) {
                    Ok(rel) => format!("./{}", rel.display()),
                    Err(_) => entry.path().display().to_string(),
                };
                matches.push(shown);
            }
        }

        if matches.is_empty() {
            Ok("No matching files found.".to_string())
        } else {
            Ok(format!("Matching files:\n{}", matches.join("\n")))
        }
    }
}

/// Recursive tree copy of `src` into `dst` (which must not shadow `src`).
fn copy_tree(src: &Path, dst: &Path) -> SigilResult<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.map_err(|e| SigilError::Io(e.to_string()))?;
        let rel = entry.path().strip_prefix(src).unwrap_or(entry.path());
        let target = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| SigilError::from_io(e, &target.display().to_string()))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|e| SigilError::from_io(e, &entry.path().display().to_string()))?;
        }
    }
    Ok(())
}

fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

/// File-type suffix as shown in listings: `.txt` style, empty when the name
/// has no extension.
fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Last three octal digits of the mode.
#[cfg(unix)]
fn permission_digits(meta: &fs::Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;
    format!("{:03o}", meta.permissions().mode() & 0o777)
}

/// No POSIX mode bits here; synthesize from the readonly flag.
#[cfg(not(unix))]
fn permission_digits(meta: &fs::Metadata) -> String {
    if meta.permissions().readonly() {
        "444".to_string()
    } else {
        "666".to_string()
    }
}

fn format_mtime(meta: &fs::Metadata) -> String {
    match meta.modified() {
        Ok(mtime) => DateTime::<Local>::from(mtime)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => "unknown".to_string(),
    }
}

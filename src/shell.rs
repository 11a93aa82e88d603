//! Shell session state and the command dispatch loop

use crate::command::Command;
use crate::error::{SigilError, SigilResult};
use crate::help;
use crate::platform::{self, PlatformOps};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::PathBuf;

/// Where the dispatcher reads prompted input from.
///
/// The interactive binary backs this with rustyline; tests script it.
/// `Ok(None)` means the source is exhausted (EOF or interrupt).
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// A [`LineReader`] that replays a fixed queue of answers.
///
/// Used by tests and by the binary's `-c` one-shot mode.
pub struct ScriptedReader {
    answers: VecDeque<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            answers: VecDeque::new(),
        }
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        Ok(self.answers.pop_front())
    }
}

/// Dispatcher state after processing one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated,
}

/// Shell session: the working directory plus the platform capability.
///
/// The working directory is explicit session state, never the process-global
/// one, so handlers stay testable in parallel without `chdir` races. The
/// invariant: after any handler returns, `cwd` is a directory that existed
/// when the handler started.
pub struct Shell {
    pub cwd: PathBuf,
    pub(crate) platform: Box<dyn PlatformOps>,
}

impl Shell {
    /// Start a session at the process's current directory.
    pub fn new() -> io::Result<Self> {
        Ok(Self::at(std::env::current_dir()?))
    }

    /// Start a session at an explicit directory.
    pub fn at(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            platform: platform::detect(),
        }
    }

    /// Process one input line: map the trimmed token to a command, collect
    /// its prompted arguments from `input`, run the handler, and print the
    /// outcome to `out`.
    ///
    /// Handler failures are printed, never propagated; the only way out of
    /// `Running` is the `exit` command. The `io::Result` covers writes to
    /// `out` alone.
    pub fn dispatch(
        &mut self,
        line: &str,
        input: &mut dyn LineReader,
        out: &mut dyn Write,
    ) -> io::Result<Status> {
        let token = line.trim();
        if token.is_empty() {
            return Ok(Status::Running);
        }

        match Command::from_token(token) {
            None => {
                writeln!(
                    out,
                    "Invalid command. Type 'help' to see the available commands."
                )?;
                Ok(Status::Running)
            }
            Some(Command::Exit) => Ok(Status::Terminated),
            Some(cmd) => {
                match self.execute(cmd, input) {
                    Ok(msg) if msg.is_empty() => {}
                    Ok(msg) => writeln!(out, "{}", msg.trim_end_matches('\n'))?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
                Ok(Status::Running)
            }
        }
    }

    /// Collect `cmd`'s prompted arguments from `input` and invoke its
    /// handler. `exit` never reaches here; the dispatcher consumes it.
    ///
    /// EOF at a prompt counts as a blank answer, which the handlers reject
    /// as `InvalidArgument`.
    pub fn execute(&mut self, cmd: Command, input: &mut dyn LineReader) -> SigilResult<String> {
        match cmd {
            Command::List => self.cmd_list(),
            Command::ChangeDir => {
                let path = prompt(input, "Enter path: ")?;
                self.cmd_change_dir(&path)
            }
            Command::MakeFile => {
                let name = prompt(input, "Enter file name: ")?;
                self.cmd_make_file(&name)
            }
            Command::MakeFolder => {
                let name = prompt(input, "Enter folder name: ")?;
                self.cmd_make_folder(&name)
            }
            Command::Delete => {
                let path = prompt(input, "Enter file path: ")?;
                self.cmd_delete(&path)
            }
            Command::Open => {
                let path = prompt(input, "Enter path: ")?;
                self.cmd_open(&path)
            }
            Command::Rename => {
                let old = prompt(input, "Enter the current name of the file or folder: ")?;
                let new = prompt(input, "Enter the new name: ")?;
                self.cmd_rename(&old, &new)
            }
            Command::Move => {
                let src = prompt(input, "Enter the source file or folder path: ")?;
                let dest = prompt(input, "Enter the destination path: ")?;
                self.cmd_move(&src, &dest)
            }
            Command::Copy => {
                let src = prompt(input, "Enter the source file or folder path: ")?;
                let dest = prompt(input, "Enter the destination path: ")?;
                self.cmd_copy(&src, &dest)
            }
            Command::Search => {
                let pattern = prompt(input, "Enter the search pattern: ")?;
                self.cmd_search(&pattern)
            }
            Command::Clear => self.cmd_clear(),
            Command::SystemInfo => self.cmd_system_info(),
            Command::Help => Ok(help::format_help_list()),
            Command::Exit => Ok(String::new()),
        }
    }
}

fn prompt(input: &mut dyn LineReader, text: &str) -> SigilResult<String> {
    match input.read_line(text) {
        Ok(Some(line)) => Ok(line),
        Ok(None) => Ok(String::new()),
        Err(e) => Err(SigilError::Io(format!("input: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dispatch_line(shell: &mut Shell, line: &str, answers: &[&str]) -> (Status, String) {
        let mut reader = ScriptedReader::new(answers.iter().copied());
        let mut out = Vec::new();
        let status = shell
            .dispatch(line, &mut reader, &mut out)
            .expect("write to buffer failed");
        (status, String::from_utf8(out).expect("non-utf8 output"))
    }

    #[test]
    fn empty_line_is_a_no_op() {
        let tmp = TempDir::new().expect("tempdir");
        let mut shell = Shell::at(tmp.path());
        let (status, out) = dispatch_line(&mut shell, "   ", &[]);
        assert_eq!(status, Status::Running);
        assert!(out.is_empty());
    }

    #[test]
    fn unknown_token_stays_running_with_fixed_message() {
        let tmp = TempDir::new().expect("tempdir");
        let mut shell = Shell::at(tmp.path());
        let (status, out) = dispatch_line(&mut shell, "frobnicate", &[]);
        assert_eq!(status, Status::Running);
        assert!(out.starts_with("Invalid command."));
    }

    #[test]
    fn exit_terminates() {
        let tmp = TempDir::new().expect("tempdir");
        let mut shell = Shell::at(tmp.path());
        let (status, out) = dispatch_line(&mut shell, "exit", &[]);
        assert_eq!(status, Status::Terminated);
        assert!(out.is_empty());
    }

    #[test]
    fn recognized_commands_never_terminate() {
        let tmp = TempDir::new().expect("tempdir");
        let mut shell = Shell::at(tmp.path());
        for (line, answers) in [
            ("ls", &[][..]),
            ("cd", &["."][..]),
            ("mkfile", &["a.txt"][..]),
            ("mkfolder", &["d"][..]),
            ("del", &["a.txt"][..]),
            ("rename", &["d", "e"][..]),
            ("move", &["e", "."][..]),
            ("copy", &["e", "."][..]),
            ("search", &["x"][..]),
            ("help", &[][..]),
        ] {
            let (status, _) = dispatch_line(&mut shell, line, answers);
            assert_eq!(status, Status::Running, "'{}' must keep the loop alive", line);
        }
    }

    #[test]
    fn handler_failures_are_printed_not_propagated() {
        let tmp = TempDir::new().expect("tempdir");
        let mut shell = Shell::at(tmp.path());
        let (status, out) = dispatch_line(&mut shell, "del", &["no-such-file.txt"]);
        assert_eq!(status, Status::Running);
        assert!(out.starts_with("Not found:"), "got: {}", out);
    }

    #[test]
    fn eof_at_a_prompt_becomes_invalid_argument() {
        let tmp = TempDir::new().expect("tempdir");
        let mut shell = Shell::at(tmp.path());
        let (status, out) = dispatch_line(&mut shell, "mkfile", &[]);
        assert_eq!(status, Status::Running);
        assert!(out.starts_with("Invalid argument:"), "got: {}", out);
    }

    #[test]
    fn help_prints_the_command_table() {
        let tmp = TempDir::new().expect("tempdir");
        let mut shell = Shell::at(tmp.path());
        let (status, out) = dispatch_line(&mut shell, "help", &[]);
        assert_eq!(status, Status::Running);
        assert!(out.contains("mkfolder"));
        assert!(out.contains("Available commands:"));
    }

    #[test]
    fn dispatch_keeps_cwd_on_failed_cd() {
        let tmp = TempDir::new().expect("tempdir");
        let mut shell = Shell::at(tmp.path());
        let before = shell.cwd.clone();
        let (_, out) = dispatch_line(&mut shell, "cd", &["definitely-missing"]);
        assert!(out.starts_with("Not found:"));
        assert_eq!(shell.cwd, before);
    }
}

//! The closed command vocabulary.
//!
//! Dispatch works over this enum rather than raw strings so the match in the
//! dispatcher is exhaustive; unrecognized input is the `None` arm of
//! [`Command::from_token`], not a fallthrough comparison chain.

/// One of the fixed shell commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// `ls` - list the working directory
    List,
    /// `cd` - change the working directory
    ChangeDir,
    /// `mkfile` - create a file with placeholder content
    MakeFile,
    /// `mkfolder` - create an empty directory
    MakeFolder,
    /// `del` - delete a single file
    Delete,
    /// `open` - open a path with the OS default handler
    Open,
    /// `rename` - rename within the same directory
    Rename,
    /// `move` - move into a destination directory
    Move,
    /// `copy` - copy a file or directory tree
    Copy,
    /// `search` - substring search over file names
    Search,
    /// `cls` - clear the terminal
    Clear,
    /// `neofetch` - show system information
    SystemInfo,
    /// `help` - show the command table
    Help,
    /// `exit` - leave the shell
    Exit,
}

impl Command {
    /// Every command, in help-screen order.
    pub const ALL: &'static [Command] = &[
        Command::SystemInfo,
        Command::List,
        Command::ChangeDir,
        Command::MakeFile,
        Command::MakeFolder,
        Command::Delete,
        Command::Open,
        Command::Rename,
        Command::Move,
        Command::Copy,
        Command::Search,
        Command::Clear,
        Command::Help,
        Command::Exit,
    ];

    /// The token typed at the prompt.
    pub fn token(&self) -> &'static str {
        match self {
            Command::List => "ls",
            Command::ChangeDir => "cd",
            Command::MakeFile => "mkfile",
            Command::MakeFolder => "mkfolder",
            Command::Delete => "del",
            Command::Open => "open",
            Command::Rename => "rename",
            Command::Move => "move",
            Command::Copy => "copy",
            Command::Search => "search",
            Command::Clear => "cls",
            Command::SystemInfo => "neofetch",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    /// Map a trimmed input token to a command. Matching is exact and
    /// case-sensitive; anything else is an unknown command.
    pub fn from_token(token: &str) -> Option<Command> {
        Command::ALL.iter().copied().find(|c| c.token() == token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_round_trips() {
        for &cmd in Command::ALL {
            assert_eq!(Command::from_token(cmd.token()), Some(cmd));
        }
    }

    #[test]
    fn unknown_tokens_are_none() {
        assert_eq!(Command::from_token(""), None);
        assert_eq!(Command::from_token("LS"), None);
        assert_eq!(Command::from_token("list"), None);
        assert_eq!(Command::from_token("rm -rf"), None);
    }

    #[test]
    fn vocabulary_is_complete() {
        assert_eq!(Command::ALL.len(), 14);
    }
}

//! sigil - Interactive shell for local filesystem management
//!
//! This crate provides:
//! - A line-oriented command shell over a fixed vocabulary (ls, cd, mkfile, ...)
//! - Filesystem operation handlers with a closed, user-facing error taxonomy
//! - Platform-specific open/clear-screen capabilities selected at startup
//!
//! The library owns the dispatch loop and every handler; the binary only
//! supplies a line source (rustyline) and the startup banner.

pub mod command;
pub mod error;
pub mod help;
pub mod ops;
pub mod platform;
pub mod shell;

pub use command::Command;
pub use error::{SigilError, SigilResult};
pub use shell::{LineReader, ScriptedReader, Shell, Status};

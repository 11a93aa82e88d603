//! Per-command operation handlers, implemented on [`crate::shell::Shell`].
//!
//! `fs` holds the filesystem operations, `host` the platform-integration
//! commands (open, clear screen, system info). Each handler validates its
//! textual inputs, performs exactly one filesystem or subprocess effect, and
//! returns the user-facing outcome message.

mod fs;
mod host;

pub use fs::FILE_PLACEHOLDER;

//! Error types for sigil

use std::io;
use thiserror::Error;

/// Result type alias for sigil operations
pub type SigilResult<T> = Result<T, SigilError>;

/// Closed error taxonomy for shell operations.
///
/// Every handler converts its own failures into one of these kinds; nothing
/// else is allowed to escape the dispatch loop. The display strings are the
/// exact sentences shown to the user.
#[derive(Error, Debug)]
pub enum SigilError {
    /// Required textual input was empty or otherwise unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Path, file, or directory does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Creation target collides with an existing entry
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// The OS denied the operation
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Any other OS-level failure (disk full, invalid name, cross-device move, ...)
    #[error("IO error: {0}")]
    Io(String),

    /// Platform open/clear/system-info subprocess missing or failed
    #[error("External tool unavailable: {0}")]
    ExternalTool(String),
}

impl SigilError {
    /// Classify an [`io::Error`] into the taxonomy, attaching `what` as the
    /// subject of the sentence (usually the path the operation touched).
    pub fn from_io(err: io::Error, what: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(what.to_string()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(what.to_string()),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(what.to_string()),
            _ => Self::Io(format!("{}: {}", what, err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            SigilError::from_io(err, "x"),
            SigilError::NotFound(_)
        ));
    }

    #[test]
    fn classifies_permission_denied() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            SigilError::from_io(err, "x"),
            SigilError::PermissionDenied(_)
        ));
    }

    #[test]
    fn classifies_already_exists() {
        let err = io::Error::new(io::ErrorKind::AlreadyExists, "taken");
        assert!(matches!(
            SigilError::from_io(err, "x"),
            SigilError::AlreadyExists(_)
        ));
    }

    #[test]
    fn other_kinds_fold_into_io() {
        let err = io::Error::new(io::ErrorKind::Other, "boom");
        let classified = SigilError::from_io(err, "thing");
        assert!(matches!(classified, SigilError::Io(_)));
        assert!(classified.to_string().starts_with("IO error: thing"));
    }

    #[test]
    fn messages_are_short_sentences() {
        let err = SigilError::NotFound("missing.txt".to_string());
        assert_eq!(err.to_string(), "Not found: missing.txt");
    }
}

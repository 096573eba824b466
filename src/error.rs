//! Error types for shell operations.
//!
//! The `ShellError` enum represents all failure conditions during path
//! resolution and command processing. Resolver operations return these as
//! typed values; the shell maps them to user-facing text at its boundary.

use core::fmt;

/// Shell error type.
///
/// The first three variants form the resolver taxonomy: a path walk either
/// finds nothing (`NotFound`), finds a file where a directory was required
/// (`NotADirectory`), or finds a directory where a file was required
/// (`IsADirectory`). The remaining variants cover parsing, capacity, and
/// dispatch failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// No node exists at the resolved path
    NotFound,

    /// Expected a directory, resolved to a file
    NotADirectory,

    /// Expected a file, resolved to a directory
    IsADirectory,

    /// Empty or malformed path expression
    InvalidPath,

    /// Path exceeds MAX_PATH_DEPTH
    PathTooDeep,

    /// Buffer capacity exceeded
    BufferFull,

    /// Command word not in the dispatch table
    CommandNotFound,

    /// Command requires an operand that was not supplied
    MissingOperand,

    /// I/O error occurred
    Io,
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::NotFound => write!(f, "No such file or directory"),
            ShellError::NotADirectory => write!(f, "Not a directory"),
            ShellError::IsADirectory => write!(f, "Is a directory"),
            ShellError::InvalidPath => write!(f, "Invalid path"),
            ShellError::PathTooDeep => write!(f, "Path too deep"),
            ShellError::BufferFull => write!(f, "Buffer full"),
            ShellError::CommandNotFound => write!(f, "Command not found"),
            // Usage errors print lowercase after the command name, like
            // coreutils; the resolver messages keep strerror casing.
            ShellError::MissingOperand => write!(f, "missing operand"),
            ShellError::Io => write!(f, "I/O error"),
        }
    }
}

//! Configuration traits and implementations for buffer sizing.
//!
//! The `ShellConfig` trait allows compile-time configuration of buffer sizes
//! and capacity limits without runtime overhead.

/// Shell configuration trait defining buffer sizes and capacity limits.
///
/// All values are const (zero runtime cost). Implementations size the input
/// line, path depth, argument count, response buffer, history, and the
/// completion candidate set.
pub trait ShellConfig {
    /// Maximum input buffer size (default: 128)
    const MAX_INPUT: usize;

    /// Maximum path depth (default: 8)
    const MAX_PATH_DEPTH: usize;

    /// Maximum number of command arguments (default: 16)
    ///
    /// Enforced at dispatch; lines with more words are rejected as a
    /// capacity error.
    const MAX_ARGS: usize;

    /// Maximum response message length (default: 4096)
    ///
    /// Roomy by default: `cat` responses carry whole portfolio files and
    /// `tree` responses carry the rendered subtree.
    const MAX_RESPONSE: usize;

    /// Command history size (default: 10)
    const HISTORY_SIZE: usize;

    /// Maximum completion candidates tracked per request (default: 16)
    const MAX_MATCHES: usize;
}

/// Default configuration for typical portfolio trees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DefaultConfig;

impl ShellConfig for DefaultConfig {
    const MAX_INPUT: usize = 128;
    const MAX_PATH_DEPTH: usize = 8;
    const MAX_ARGS: usize = 16;
    const MAX_RESPONSE: usize = 4096;
    const HISTORY_SIZE: usize = 10;
    const MAX_MATCHES: usize = 16;
}

/// Minimal configuration for resource-constrained hosts.
///
/// Halves every limit relative to [`DefaultConfig`]; suitable for targets
/// where a few kilobytes of buffer space matter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MinimalConfig;

impl ShellConfig for MinimalConfig {
    const MAX_INPUT: usize = 64;
    const MAX_PATH_DEPTH: usize = 4;
    const MAX_ARGS: usize = 8;
    const MAX_RESPONSE: usize = 1024;
    const HISTORY_SIZE: usize = 5;
    const MAX_MATCHES: usize = 8;
}

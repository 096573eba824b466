//! Tab completion for paths and command names.
//!
//! Provides cycling completion over the names in a target directory. Uses
//! the stub function pattern - the module always exists, functions return
//! "no match" when the feature is disabled.
//!
//! The cursor is per-input-session state owned by the caller: repeated
//! completion requests on the same prefix cycle through the recorded
//! candidates in stable order; any input that is not a continuation of the
//! recorded prefix starts a fresh request.

#![cfg_attr(not(feature = "completion"), allow(unused_variables))]

#[cfg(feature = "completion")]
use crate::tree::resolve::{self, DirHandle, Resolved};
#[cfg(not(feature = "completion"))]
use crate::tree::resolve::DirHandle;
use crate::tree::Directory;

/// Completed input line buffer.
// TODO: Use C::MAX_INPUT when const generics stabilize
pub type Completed = heapless::String<128>;

/// Per-session completion state: the recorded input prefix, the ordered
/// candidate list (directory part already re-attached), and the cycling
/// index into it.
///
/// Reset whenever a fresh request finds no candidates; otherwise replaced
/// wholesale by each fresh request. Not persisted across sessions.
#[derive(Debug)]
pub struct CompletionCursor<const MAX_MATCHES: usize> {
    /// Input line recorded at the last fresh completion (`cmd partial`)
    #[cfg(feature = "completion")]
    prefix: heapless::String<128>,

    /// Candidate arguments in declaration order
    #[cfg(feature = "completion")]
    matches: heapless::Vec<heapless::String<128>, MAX_MATCHES>,

    /// Index of the candidate returned last
    #[cfg(feature = "completion")]
    index: usize,
}

impl<const MAX_MATCHES: usize> CompletionCursor<MAX_MATCHES> {
    /// Create an empty cursor.
    #[cfg(feature = "completion")]
    pub fn new() -> Self {
        Self {
            prefix: heapless::String::new(),
            matches: heapless::Vec::new(),
            index: 0,
        }
    }

    /// Create an empty cursor (stub version).
    #[cfg(not(feature = "completion"))]
    pub fn new() -> Self {
        Self {}
    }

    /// Clear all recorded state.
    #[cfg(feature = "completion")]
    pub fn reset(&mut self) {
        self.prefix.clear();
        self.matches.clear();
        self.index = 0;
    }

    /// Clear all recorded state (stub version - no-op).
    #[cfg(not(feature = "completion"))]
    pub fn reset(&mut self) {}

    /// Current candidate count.
    #[cfg(feature = "completion")]
    pub fn candidate_count(&self) -> usize {
        self.matches.len()
    }

    /// Current candidate count (stub version - always zero).
    #[cfg(not(feature = "completion"))]
    pub fn candidate_count(&self) -> usize {
        0
    }
}

impl<const MAX_MATCHES: usize> Default for CompletionCursor<MAX_MATCHES> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Feature-enabled implementation
// ============================================================================

/// Complete the path argument of an input line.
///
/// # Feature-enabled behavior
///
/// Checks continuation FIRST: if `line` still starts with the cursor's
/// recorded prefix and candidates exist, the cursor cycles to the next
/// candidate without re-filtering. Otherwise this is a fresh request: the
/// final argument is split at its last `/` into a directory part and a
/// fragment, the directory part is resolved relative to `handle`, and the
/// target directory's children are prefix-matched against the fragment
/// (byte-wise, case-sensitive), in declaration order.
///
/// `directories_only` restricts candidates to directories (used for `cd`).
///
/// # Feature-disabled behavior
///
/// Returns `None` (graceful degradation).
///
/// # Returns
///
/// - `Some(line)` - the replacement input line (`cmd argument`)
/// - `None` - no match; the caller echoes its input unchanged
///
/// # Examples
///
/// ```rust,ignore
/// // Fresh request inside `docs`:
/// let done = complete_path(&ROOT, &cwd, "cat docs/sk", false, &mut cursor);
/// assert_eq!(done.unwrap().as_str(), "cat docs/skills.txt");
///
/// // Tab again: single candidate cycles to itself.
/// let done = complete_path(&ROOT, &cwd, "cat docs/skills.txt", false, &mut cursor);
/// assert_eq!(done.unwrap().as_str(), "cat docs/skills.txt");
/// ```
#[cfg(feature = "completion")]
pub fn complete_path<const MAX_MATCHES: usize>(
    root: &Directory,
    handle: &DirHandle,
    line: &str,
    directories_only: bool,
    cursor: &mut CompletionCursor<MAX_MATCHES>,
) -> Option<Completed> {
    // Continuation check short-circuits before any resolution: cycling
    // never re-filters the candidate list.
    if !cursor.prefix.is_empty()
        && !cursor.matches.is_empty()
        && line.starts_with(cursor.prefix.as_str())
    {
        cursor.index = (cursor.index + 1) % cursor.matches.len();
        let command = cursor.prefix.split(' ').next()?;
        return join_line(command, &cursor.matches[cursor.index]);
    }

    // Fresh request: need a command word and an argument position.
    let command = line.split_whitespace().next()?;
    let argument = &line[line.rfind(' ')? + 1..];

    // Split the argument at the last separator; the directory part keeps
    // its trailing `/` so re-attachment is plain concatenation.
    let (dir_part, fragment) = match argument.rfind('/') {
        Some(i) => (&argument[..=i], &argument[i + 1..]),
        None => ("", argument),
    };

    let target = if dir_part.is_empty() {
        resolve::dir_at(root, handle).ok()
    } else {
        match resolve::resolve_node(root, handle, dir_part) {
            Ok(Resolved::Directory(dir)) => Some(dir),
            _ => None,
        }
    };

    let Some(target) = target else {
        cursor.reset();
        return None;
    };

    // Candidates in declaration order; the list caps at MAX_MATCHES.
    let mut matches: heapless::Vec<heapless::String<128>, MAX_MATCHES> = heapless::Vec::new();
    for child in target.children.iter() {
        if directories_only && !child.is_directory() {
            continue;
        }
        if !child.name().starts_with(fragment) {
            continue;
        }

        let mut candidate: heapless::String<128> = heapless::String::new();
        if candidate.push_str(dir_part).is_err() || candidate.push_str(child.name()).is_err() {
            continue;
        }
        if matches.push(candidate).is_err() {
            break;
        }
    }

    if matches.is_empty() {
        // A failed fresh request clears the cursor rather than preserving
        // stale candidates for a later accidental continuation.
        cursor.reset();
        return None;
    }

    cursor.prefix.clear();
    cursor.prefix.push_str(command).ok()?;
    cursor.prefix.push(' ').ok()?;
    cursor.prefix.push_str(argument).ok()?;
    cursor.matches = matches;
    cursor.index = 0;

    join_line(command, &cursor.matches[0])
}

/// Stub implementation when the completion feature is disabled.
#[cfg(not(feature = "completion"))]
pub fn complete_path<const MAX_MATCHES: usize>(
    root: &Directory,
    handle: &DirHandle,
    line: &str,
    directories_only: bool,
    cursor: &mut CompletionCursor<MAX_MATCHES>,
) -> Option<Completed> {
    None
}

/// Complete a bare command name against a fixed command list.
///
/// First prefix match wins; no cycling (the path completer owns cycling).
#[cfg(feature = "completion")]
pub fn complete_command(line: &str, commands: &[&'static str]) -> Option<&'static str> {
    commands.iter().copied().find(|cmd| cmd.starts_with(line))
}

/// Stub implementation when the completion feature is disabled.
#[cfg(not(feature = "completion"))]
pub fn complete_command(line: &str, commands: &[&'static str]) -> Option<&'static str> {
    None
}

#[cfg(feature = "completion")]
fn join_line(command: &str, argument: &str) -> Option<Completed> {
    let mut out = Completed::new();
    out.push_str(command).ok()?;
    out.push(' ').ok()?;
    out.push_str(argument).ok()?;
    Some(out)
}

// ============================================================================
// Tests
// ============================================================================

//! Submitted-line history with up/down navigation.
//!
//! Uses the stub type pattern - the struct always exists, behavior is
//! feature-gated. Nothing is persisted across sessions.

#![cfg_attr(not(feature = "history"), allow(unused_variables))]

#[cfg(not(feature = "history"))]
use core::marker::PhantomData;

/// Ring buffer of submitted input lines.
///
/// `N` is the entry capacity, `INPUT_SIZE` the per-line capacity. When the
/// `history` feature is disabled this is a zero-size stub that no-ops.
#[derive(Debug)]
pub struct CommandHistory<const N: usize, const INPUT_SIZE: usize> {
    #[cfg(feature = "history")]
    entries: heapless::Vec<heapless::String<INPUT_SIZE>, N>,

    /// Navigation cursor; `None` when not browsing
    #[cfg(feature = "history")]
    cursor: Option<usize>,

    #[cfg(not(feature = "history"))]
    _phantom: PhantomData<[u8; INPUT_SIZE]>,
}

impl<const N: usize, const INPUT_SIZE: usize> CommandHistory<N, INPUT_SIZE> {
    /// Create an empty history.
    #[cfg(feature = "history")]
    pub fn new() -> Self {
        Self {
            entries: heapless::Vec::new(),
            cursor: None,
        }
    }

    /// Create an empty history (stub version).
    #[cfg(not(feature = "history"))]
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Record a submitted line.
    ///
    /// Empty lines and repeats of the most recent entry are skipped. When
    /// full, the oldest entry is evicted. Recording resets navigation.
    #[cfg(feature = "history")]
    pub fn add(&mut self, line: &str) {
        self.cursor = None;

        if line.is_empty() {
            return;
        }
        if let Some(last) = self.entries.last()
            && last.as_str() == line
        {
            return;
        }

        let mut entry = heapless::String::new();
        if entry.push_str(line).is_err() {
            return;
        }
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        let _ = self.entries.push(entry);
    }

    /// Record a submitted line (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn add(&mut self, line: &str) {}

    /// Step to the older neighbor (up arrow). Clamps at the oldest entry.
    #[cfg(feature = "history")]
    pub fn previous(&mut self) -> Option<heapless::String<INPUT_SIZE>> {
        if self.entries.is_empty() {
            return None;
        }

        let pos = match self.cursor {
            None => self.entries.len() - 1,
            Some(0) => 0,
            Some(p) => p - 1,
        };
        self.cursor = Some(pos);
        self.entries.get(pos).cloned()
    }

    /// Step to the older neighbor (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn previous(&mut self) -> Option<heapless::String<INPUT_SIZE>> {
        None
    }

    /// Step to the newer neighbor (down arrow).
    ///
    /// Past the newest entry, navigation ends and `None` signals the caller
    /// to restore an empty line.
    #[cfg(feature = "history")]
    pub fn next(&mut self) -> Option<heapless::String<INPUT_SIZE>> {
        match self.cursor {
            None => None,
            Some(p) if p + 1 >= self.entries.len() => {
                self.cursor = None;
                None
            }
            Some(p) => {
                self.cursor = Some(p + 1);
                self.entries.get(p + 1).cloned()
            }
        }
    }

    /// Step to the newer neighbor (stub version - returns None).
    #[cfg(not(feature = "history"))]
    pub fn next(&mut self) -> Option<heapless::String<INPUT_SIZE>> {
        None
    }

    /// Stop browsing without recording anything.
    #[cfg(feature = "history")]
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Stop browsing (stub version - no-op).
    #[cfg(not(feature = "history"))]
    pub fn reset_cursor(&mut self) {}

    /// Number of stored lines.
    #[cfg(feature = "history")]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of stored lines (stub version - always zero).
    #[cfg(not(feature = "history"))]
    pub fn len(&self) -> usize {
        0
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const N: usize, const INPUT_SIZE: usize> Default for CommandHistory<N, INPUT_SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

//! Keystroke decoder for the interactive session.
//!
//! Translates raw terminal characters into logical events. Handles the
//! `ESC [ A` / `ESC [ B` arrow sequences and double-ESC. Pure state
//! machine; owns no buffers and does no I/O.

/// Escape sequence progress.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    /// Plain input
    Idle,

    /// Consumed one ESC
    Escape,

    /// Consumed ESC [
    Csi,
}

/// Logical input event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Mid-sequence or ignored character
    None,

    /// Printable character
    Char(char),

    /// BS (0x08) or DEL (0x7f)
    Backspace,

    /// LF or CR
    Enter,

    /// Tab key
    Tab,

    /// ESC [ A
    UpArrow,

    /// ESC [ B
    DownArrow,

    /// ESC pressed twice in a row
    DoubleEsc,
}

/// Terminal keystroke decoder.
///
/// Feed characters one at a time through [`decode_char`](Self::decode_char);
/// each call returns the event the character completes, or
/// [`InputEvent::None`] while a sequence is still accumulating.
#[derive(Debug)]
pub struct InputDecoder {
    state: State,
}

impl InputDecoder {
    /// Create a decoder in the idle state.
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Decode one character, advancing the escape sequence state.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// assert_eq!(decoder.decode_char('x'), InputEvent::Char('x'));
    ///
    /// decoder.decode_char('\x1b');
    /// decoder.decode_char('[');
    /// assert_eq!(decoder.decode_char('A'), InputEvent::UpArrow);
    /// ```
    pub fn decode_char(&mut self, c: char) -> InputEvent {
        match (self.state, c) {
            (State::Idle, '\x1b') => {
                self.state = State::Escape;
                InputEvent::None
            }
            (State::Idle, '\n' | '\r') => InputEvent::Enter,
            (State::Idle, '\t') => InputEvent::Tab,
            (State::Idle, '\x08' | '\x7f') => InputEvent::Backspace,
            (State::Idle, c) if c.is_control() => InputEvent::None,
            (State::Idle, c) => InputEvent::Char(c),

            (State::Escape, '\x1b') => {
                self.state = State::Idle;
                InputEvent::DoubleEsc
            }
            (State::Escape, '[') => {
                self.state = State::Csi;
                InputEvent::None
            }
            // ESC followed by anything else falls back to a plain character.
            (State::Escape, c) => {
                self.state = State::Idle;
                InputEvent::Char(c)
            }

            (State::Csi, c) => {
                self.state = State::Idle;
                match c {
                    'A' => InputEvent::UpArrow,
                    'B' => InputEvent::DownArrow,
                    // Unrecognized sequences are swallowed.
                    _ => InputEvent::None,
                }
            }
        }
    }

    /// Drop any partial escape sequence.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }
}

impl Default for InputDecoder {
    fn default() -> Self {
        Self::new()
    }
}

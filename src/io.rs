//! Character I/O abstraction for platform-agnostic input/output.
//!
//! The `TermIo` trait provides non-blocking character-level I/O that can be
//! implemented for any host: a wasm/browser keystroke bridge, a UART, or
//! plain stdio in a native wrapper.

/// Platform-agnostic terminal I/O trait.
///
/// Implementations must buffer output internally; `write_char()` and
/// `write_str()` must not block indefinitely. On asynchronous hosts
/// (e.g. a browser event loop), buffer to memory and flush after each
/// `process_char()` call returns.
pub trait TermIo {
    /// Platform-specific error type
    type Error;

    /// Non-blocking character read.
    ///
    /// Returns:
    /// - `Ok(Some(char))` if a character is available
    /// - `Ok(None)` if no character is available (non-blocking)
    /// - `Err(Self::Error)` on I/O error
    fn read_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Write a character to the output buffer.
    fn write_char(&mut self, c: char) -> Result<(), Self::Error>;

    /// Write a string to the output buffer.
    ///
    /// Default implementation uses `write_char()` repeatedly.
    /// Override for more efficient bulk writes if needed.
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for c in s.chars() {
            self.write_char(c)?;
        }
        Ok(())
    }
}

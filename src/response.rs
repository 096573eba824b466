//! Response types for command execution.
//!
//! `Response` represents successful execution with a message and
//! presentation flags. Command failures travel as `Err(ShellError)` and are
//! formatted by the shell, never by the command itself.

use crate::config::ShellConfig;
use core::marker::PhantomData;

/// Command execution response with message and presentation flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<C: ShellConfig> {
    /// Response message (uses C::MAX_RESPONSE buffer size)
    // TODO: Use C::MAX_RESPONSE when const generics stabilize
    pub message: heapless::String<4096>,

    /// Add newline after message
    pub postfix_newline: bool,

    /// Display prompt after response
    pub show_prompt: bool,

    /// Prevent input from being saved to history
    #[cfg(feature = "history")]
    pub exclude_from_history: bool,

    /// Phantom data for config type (will be used when const generics stabilize)
    _phantom: PhantomData<C>,
}

impl<C: ShellConfig> Response<C> {
    /// Create a success response with default presentation.
    ///
    /// Default: postfix newline, show prompt, include in history.
    /// Messages longer than the buffer are truncated.
    pub fn success(message: &str) -> Self {
        let mut msg = heapless::String::new();
        for c in message.chars() {
            if msg.push(c).is_err() {
                break;
            }
        }

        Self {
            message: msg,
            postfix_newline: true,
            show_prompt: true,
            #[cfg(feature = "history")]
            exclude_from_history: false,
            _phantom: PhantomData,
        }
    }

    /// Builder method to exclude the input line from history (chainable).
    #[cfg(feature = "history")]
    pub fn without_history(mut self) -> Self {
        self.exclude_from_history = true;
        self
    }

    /// Builder method to suppress the newline after the response.
    pub fn without_postfix_newline(mut self) -> Self {
        self.postfix_newline = false;
        self
    }

    /// Builder method to suppress the prompt after the response.
    pub fn without_prompt(mut self) -> Self {
        self.show_prompt = false;
        self
    }
}

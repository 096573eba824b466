//! Interactive session orchestration.
//!
//! The `Shell` struct owns the session state (current directory handle,
//! input buffer, history, completion cursor) and maps keystrokes and
//! submitted lines onto the resolver. Errors never escape as panics; they
//! are formatted into user-facing text here and nowhere else.

use crate::config::ShellConfig;
use crate::error::ShellError;
use crate::io::TermIo;
use crate::response::Response;
use crate::tree::completion::{self, CompletionCursor};
use crate::tree::resolve::{self, DirHandle};
use crate::tree::Directory;
use core::fmt::Write as _;
use core::marker::PhantomData;

pub mod decoder;
pub mod history;

pub use decoder::{InputDecoder, InputEvent};
pub use history::CommandHistory;

/// Built-in command words, in completion order.
const COMMANDS: &[&str] = &["help", "ls", "cat", "cd", "pwd", "tree", "echo", "clear"];

/// History navigation direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Up arrow (older)
    Previous,

    /// Down arrow (newer)
    Next,
}

/// Session orchestrator over a virtual tree.
///
/// Generic over:
/// - `'tree`: lifetime of the tree root (typically 'static)
/// - `IO`: TermIo implementation
/// - `C`: ShellConfig implementation
///
/// Drive it character by character with [`process_char`](Self::process_char),
/// or let it poll its own I/O with [`poll`](Self::poll).
pub struct Shell<'tree, IO, C>
where
    IO: TermIo,
    C: ShellConfig,
{
    /// Tree root
    root: &'tree Directory,

    /// Current directory handle
    cwd: DirHandle,

    /// Line under edit
    // TODO: Use C::MAX_INPUT when const generics stabilize
    input_buffer: heapless::String<128>,

    /// Keystroke decoder
    decoder: InputDecoder,

    /// Submitted-line history
    // TODO: Use C::HISTORY_SIZE and C::MAX_INPUT when const generics stabilize
    history: CommandHistory<10, 128>,

    /// Tab completion state
    // TODO: Use C::MAX_MATCHES when const generics stabilize
    completion: CompletionCursor<16>,

    /// I/O sink
    io: IO,

    /// Config type marker (zero-size)
    _config: PhantomData<C>,
}

impl<'tree, IO, C> core::fmt::Debug for Shell<'tree, IO, C>
where
    IO: TermIo,
    C: ShellConfig,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Shell")
            .field("cwd", &self.cwd)
            .field("input_buffer", &self.input_buffer.as_str())
            .finish_non_exhaustive()
    }
}

impl<'tree, IO, C> Shell<'tree, IO, C>
where
    IO: TermIo,
    C: ShellConfig,
{
    /// Create a shell rooted at `root`, starting in the root directory.
    pub fn new(root: &'tree Directory, io: IO) -> Self {
        Self {
            root,
            cwd: DirHandle::root(),
            input_buffer: heapless::String::new(),
            decoder: InputDecoder::new(),
            history: CommandHistory::new(),
            completion: CompletionCursor::new(),
            io,
            _config: PhantomData,
        }
    }

    /// Write the initial prompt.
    ///
    /// Call once after construction (and after the host has written any
    /// banner of its own).
    pub fn activate(&mut self) -> Result<(), ShellError> {
        self.write_prompt()
    }

    /// Current directory handle.
    pub fn cwd(&self) -> &DirHandle {
        &self.cwd
    }

    /// Process one character of terminal input.
    ///
    /// Main entry point for character-by-character hosts. Runs the decoded
    /// event to completion, including any command the character submits.
    pub fn process_char(&mut self, c: char) -> Result<(), ShellError> {
        match self.decoder.decode_char(c) {
            InputEvent::None => Ok(()),

            InputEvent::Char(ch) => match self.input_buffer.push(ch) {
                Ok(()) => self.echo_char(ch),
                // Line full, ring the bell.
                Err(_) => self.echo_char('\x07'),
            },

            InputEvent::Backspace => {
                if self.input_buffer.pop().is_some() {
                    self.write_raw("\x08 \x08")?;
                }
                Ok(())
            }

            InputEvent::DoubleEsc => {
                self.input_buffer.clear();
                self.redraw_line()
            }

            InputEvent::Enter => self.handle_enter(),

            InputEvent::Tab => self.handle_tab(),

            InputEvent::UpArrow => self.handle_history(HistoryDirection::Previous),

            InputEvent::DownArrow => self.handle_history(HistoryDirection::Next),
        }
    }

    /// Poll the I/O for one character and process it.
    ///
    /// Convenience for simple polling hosts; event-driven hosts should call
    /// [`process_char`](Self::process_char) directly.
    pub fn poll(&mut self) -> Result<(), ShellError> {
        let c = self.io.read_char().map_err(|_| ShellError::Io)?;
        if let Some(c) = c {
            self.process_char(c)?;
        }
        Ok(())
    }

    // ========================================
    // Key handling
    // ========================================

    fn handle_enter(&mut self) -> Result<(), ShellError> {
        let line = self.input_buffer.clone();
        self.input_buffer.clear();
        self.completion.reset();
        self.write_raw("\r\n")?;

        let line = line.trim();
        if line.is_empty() {
            return self.write_prompt();
        }

        match self.dispatch(line) {
            Ok(response) => {
                self.write_text(&response.message)?;
                if response.postfix_newline {
                    self.write_raw("\r\n")?;
                }

                #[cfg(feature = "history")]
                if !response.exclude_from_history {
                    self.history.add(line);
                }

                if response.show_prompt {
                    self.write_prompt()?;
                }
            }
            Err(ShellError::Io) => return Err(ShellError::Io),
            // Internal failures (capacity overruns) are reported in-band so
            // the session keeps its prompt.
            Err(err) => {
                let mut msg: heapless::String<128> = heapless::String::new();
                let _ = write!(msg, "error: {err}");
                self.write_text(msg.as_str())?;
                self.write_raw("\r\n")?;
                self.write_prompt()?;
            }
        }

        Ok(())
    }

    fn handle_tab(&mut self) -> Result<(), ShellError> {
        let completed: Option<heapless::String<128>> = match self.input_buffer.find(' ') {
            // Path completion is wired to the cat and cd argument positions
            // only; the other commands take no path argument.
            Some(space) => match &self.input_buffer[..space] {
                cmd @ ("cat" | "cd") => completion::complete_path(
                    self.root,
                    &self.cwd,
                    self.input_buffer.as_str(),
                    cmd == "cd",
                    &mut self.completion,
                ),
                _ => None,
            },
            // Still typing the command word.
            None => {
                completion::complete_command(self.input_buffer.as_str(), COMMANDS).map(|cmd| {
                    let mut line: heapless::String<128> = heapless::String::new();
                    let _ = line.push_str(cmd);
                    let _ = line.push(' ');
                    line
                })
            }
        };

        match completed {
            Some(line) => {
                self.input_buffer = line;
                self.redraw_line()
            }
            None => self.echo_char('\x07'),
        }
    }

    fn handle_history(&mut self, direction: HistoryDirection) -> Result<(), ShellError> {
        let entry = match direction {
            HistoryDirection::Previous => self.history.previous(),
            HistoryDirection::Next => self.history.next(),
        };

        if let Some(entry) = entry {
            self.input_buffer = entry;
            self.redraw_line()?;
        }
        Ok(())
    }

    // ========================================
    // Command dispatch
    // ========================================

    /// Run one submitted line against the tree.
    ///
    /// Command failures (unknown names, resolver errors) come back as `Ok`
    /// responses carrying the user-facing error text. `Err` is reserved for
    /// internal failures (capacity, I/O).
    fn dispatch(&mut self, line: &str) -> Result<Response<C>, ShellError> {
        // TODO: Size the buffer with C::MAX_ARGS + 1 when const generics
        // stabilize; until then the limit is enforced at runtime.
        let mut words: heapless::Vec<&str, 17> = heapless::Vec::new();
        for word in line.split_whitespace() {
            words.push(word).map_err(|_| ShellError::BufferFull)?;
        }
        if words.len() > C::MAX_ARGS + 1 {
            return Err(ShellError::BufferFull);
        }
        let Some(&command) = words.first() else {
            return Err(ShellError::CommandNotFound);
        };
        let args = &words[1..];

        match command {
            "help" => Ok(Response::success(HELP_TEXT)),

            "pwd" => Ok(Response::success(self.cwd.display().as_str())),

            "ls" => self.run_ls(args.first().copied()),

            "cat" => match args.first() {
                Some(path) => self.run_cat(path),
                None => command_error("cat", "", ShellError::MissingOperand),
            },

            "cd" => self.run_cd(args.first().copied()),

            "tree" => self.run_tree(args.first().copied()),

            "echo" => {
                let mut msg: heapless::String<4096> = heapless::String::new();
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        msg.push(' ').map_err(|_| ShellError::BufferFull)?;
                    }
                    msg.push_str(arg).map_err(|_| ShellError::BufferFull)?;
                }
                Ok(Response::success(msg.as_str()))
            }

            "clear" => {
                // ANSI clear screen and home; prompt follows directly.
                let response = Response::success("\x1b[2J\x1b[H").without_postfix_newline();
                #[cfg(feature = "history")]
                let response = response.without_history();
                Ok(response)
            }

            _ => {
                let mut msg: heapless::String<4096> = heapless::String::new();
                write!(msg, "command not found: {command}").map_err(|_| ShellError::BufferFull)?;
                Ok(Response::success(msg.as_str()))
            }
        }
    }

    fn run_ls(&self, path: Option<&str>) -> Result<Response<C>, ShellError> {
        let target = match path {
            None => Ok(self.cwd.clone()),
            Some(expr) => resolve::change_directory(self.root, &self.cwd, expr),
        };

        let target = match target {
            Ok(handle) => handle,
            Err(err) => return command_error("ls", path.unwrap_or(""), err),
        };

        let mut msg: heapless::String<4096> = heapless::String::new();
        for (i, child) in resolve::list_directory(self.root, &target)?.iter().enumerate() {
            if i > 0 {
                msg.push('\n').map_err(|_| ShellError::BufferFull)?;
            }
            msg.push_str(child.name()).map_err(|_| ShellError::BufferFull)?;
            if child.is_directory() {
                msg.push('/').map_err(|_| ShellError::BufferFull)?;
            }
        }
        Ok(Response::success(msg.as_str()))
    }

    fn run_cat(&self, path: &str) -> Result<Response<C>, ShellError> {
        match resolve::read_file(self.root, &self.cwd, path) {
            Ok(content) => Ok(Response::success(content)),
            Err(err) => command_error("cat", path, err),
        }
    }

    fn run_cd(&mut self, path: Option<&str>) -> Result<Response<C>, ShellError> {
        let target = match path {
            // Bare cd returns to root.
            None => Ok(DirHandle::root()),
            Some(expr) => resolve::change_directory(self.root, &self.cwd, expr),
        };

        match target {
            Ok(handle) => {
                self.cwd = handle;
                Ok(Response::success("").without_postfix_newline())
            }
            Err(err) => command_error("cd", path.unwrap_or(""), err),
        }
    }

    fn run_tree(&self, path: Option<&str>) -> Result<Response<C>, ShellError> {
        let target = match path {
            None => Ok(self.cwd.clone()),
            Some(expr) => resolve::change_directory(self.root, &self.cwd, expr),
        };

        let target = match target {
            Ok(handle) => handle,
            Err(err) => return command_error("tree", path.unwrap_or(""), err),
        };

        // TODO: Use C::MAX_RESPONSE when const generics stabilize
        let rendered = resolve::render_tree::<4096>(self.root, &target)?;
        let mut msg: heapless::String<4096> = heapless::String::new();
        msg.push_str(target.display().as_str())
            .map_err(|_| ShellError::BufferFull)?;
        if !rendered.is_empty() {
            msg.push('\n').map_err(|_| ShellError::BufferFull)?;
            // Drop the trailing newline; postfix handling adds the final one.
            msg.push_str(rendered.as_str().trim_end_matches('\n'))
                .map_err(|_| ShellError::BufferFull)?;
        }
        Ok(Response::success(msg.as_str()))
    }

    // ========================================
    // Output helpers
    // ========================================

    /// Write a string verbatim (control sequences included).
    fn write_raw(&mut self, s: &str) -> Result<(), ShellError> {
        self.io.write_str(s).map_err(|_| ShellError::Io)
    }

    /// Write message text, expanding `\n` to `\r\n`.
    fn write_text(&mut self, s: &str) -> Result<(), ShellError> {
        for (i, line) in s.split('\n').enumerate() {
            if i > 0 {
                self.write_raw("\r\n")?;
            }
            self.write_raw(line)?;
        }
        Ok(())
    }

    fn echo_char(&mut self, c: char) -> Result<(), ShellError> {
        self.io.write_char(c).map_err(|_| ShellError::Io)
    }

    /// Prompt: `guest@kiosk:<path>$ `
    fn prompt(&self) -> heapless::String<192> {
        let mut prompt: heapless::String<192> = heapless::String::new();
        prompt.push_str("guest@kiosk:").ok();
        prompt.push_str(self.cwd.display().as_str()).ok();
        prompt.push_str("$ ").ok();
        prompt
    }

    fn write_prompt(&mut self) -> Result<(), ShellError> {
        let prompt = self.prompt();
        self.write_raw(prompt.as_str())
    }

    /// Clear the current terminal line and redraw prompt plus buffer.
    fn redraw_line(&mut self) -> Result<(), ShellError> {
        self.write_raw("\r\x1b[K")?;
        self.write_prompt()?;
        let line = self.input_buffer.clone();
        self.write_raw(line.as_str())
    }

    // ========================================
    // Test-only accessors
    // ========================================

    /// Get reference to the I/O sink (test-only).
    #[doc(hidden)]
    pub fn __test_io(&self) -> &IO {
        &self.io
    }

    /// Get mutable reference to the I/O sink (test-only).
    #[doc(hidden)]
    pub fn __test_io_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Get the line under edit (test-only).
    #[doc(hidden)]
    pub fn __test_input_buffer(&self) -> &str {
        self.input_buffer.as_str()
    }
}

/// Format a command failure into its user-facing text.
///
/// Resolver errors name the operand they failed on; errors raised before an
/// operand exists (an empty `operand`) are reported bare.
fn command_error<C: ShellConfig>(
    command: &str,
    operand: &str,
    err: ShellError,
) -> Result<Response<C>, ShellError> {
    let mut msg: heapless::String<4096> = heapless::String::new();
    if operand.is_empty() {
        write!(msg, "{command}: {err}").map_err(|_| ShellError::BufferFull)?;
    } else {
        write!(msg, "{command}: {operand}: {err}").map_err(|_| ShellError::BufferFull)?;
    }
    Ok(Response::success(msg.as_str()))
}

const HELP_TEXT: &str = "Available commands:
  help          Show this summary
  ls [path]     List directory contents
  cat <file>    Print file contents
  cd [path]     Change directory (bare cd returns to ~)
  pwd           Print working directory
  tree [path]   Render directory tree
  echo [text]   Print text
  clear         Clear the screen";

// ============================================================================
// Tests
// ============================================================================

//! # kiosk-shell
//!
//! A simulated, read-only shell over a virtual in-memory file tree, for
//! terminal-style portfolio and kiosk front ends.
//!
//! There is no operating system underneath: every file and directory is a
//! `const`-initialized data structure, and every command is a pure function
//! evaluated against that structure.
//!
//! **Key pieces:**
//! - **Virtual tree store** - `File`/`Directory` nodes defined at compile
//!   time, read-only at runtime, children kept in declaration order
//! - **Path resolver** - absolute (`~/docs`, `/docs`) and relative
//!   (`../contact`, `./skills.txt`) path expressions resolved against a
//!   current-directory handle
//! - **Completion engine** - cycling tab completion over the names in the
//!   target directory (optional feature)
//! - **Shell orchestrator** - character-driven dispatcher for the fixed
//!   command set (`ls`, `cat`, `cd`, `pwd`, `tree`, `echo`, ...)
//! - **Flexible I/O** - platform-agnostic character I/O trait, suitable for
//!   a wasm/browser bridge, UART, or stdio
//!
//! ## Optional Features
//!
//! - `completion` - Tab completion for paths and command names
//! - `history` - Command history with up/down arrow navigation
//!
//! This library is `no_std` compatible and performs no heap allocation.
//!
//! ## Example
//!
//! ```rust,ignore
//! use kiosk_shell::tree::{Directory, File, Node};
//! use kiosk_shell::tree::resolve::{self, DirHandle};
//!
//! const SKILLS: File = File { name: "skills.txt", content: "Rust, embedded" };
//! const DOCS: Directory = Directory { name: "docs", children: &[Node::File(&SKILLS)] };
//! const ROOT: Directory = Directory { name: "~", children: &[Node::Directory(&DOCS)] };
//!
//! let cwd = DirHandle::root();
//! let content = resolve::read_file(&ROOT, &cwd, "docs/skills.txt")?;
//! assert_eq!(content, "Rust, embedded");
//! ```

#![no_std]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod io;

pub mod error;

pub mod tree;

pub mod response;

pub mod shell;

// ============================================================================
// Re-exports - Public API
// ============================================================================

// Core I/O
pub use io::TermIo;

// Configuration
pub use config::{DefaultConfig, MinimalConfig, ShellConfig};

// Error types
pub use error::ShellError;

// Tree types
pub use tree::resolve::DirHandle;
pub use tree::{Directory, File, Node, NodeKind};

pub use tree::completion::CompletionCursor;

// Response types
pub use response::Response;

// Shell types
pub use shell::decoder::{InputDecoder, InputEvent};
pub use shell::{CommandHistory, HistoryDirection, Shell};

// ============================================================================
// Library Metadata
// ============================================================================

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

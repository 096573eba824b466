//! Test fixtures and utilities for kiosk-shell testing.
//!
//! Provides:
//! - `MockIo`: Test implementation of the TermIo trait
//! - `PORTFOLIO`: A realistic portfolio tree for testing
//! - Small single-purpose trees for edge cases

#![allow(dead_code)]

use kiosk_shell::tree::{Directory, File, Node};
use kiosk_shell::TermIo;
use std::collections::VecDeque;

// ============================================================================
// MockIo - Test I/O Implementation
// ============================================================================

/// Mock I/O with an input queue and output capture.
///
/// Uses `std` types since integration tests run with std support.
#[derive(Debug)]
pub struct MockIo {
    /// Input queue (simulates user typing)
    input: VecDeque<char>,

    /// Output capture
    output: Vec<char>,
}

impl MockIo {
    /// Create a MockIo with empty buffers.
    pub fn new() -> Self {
        Self {
            input: VecDeque::new(),
            output: Vec::new(),
        }
    }

    /// Create a MockIo with pre-loaded input.
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            output: Vec::new(),
        }
    }

    /// Queue input (simulates user typing).
    pub fn push_input(&mut self, s: &str) {
        self.input.extend(s.chars());
    }

    /// Captured output as a string.
    pub fn output(&self) -> String {
        self.output.iter().collect()
    }

    /// Clear the output capture.
    pub fn clear_output(&mut self) {
        self.output.clear();
    }

    /// True when all queued input has been consumed.
    pub fn input_empty(&self) -> bool {
        self.input.is_empty()
    }
}

impl Default for MockIo {
    fn default() -> Self {
        Self::new()
    }
}

impl TermIo for MockIo {
    type Error = ();

    fn read_char(&mut self) -> Result<Option<char>, Self::Error> {
        Ok(self.input.pop_front())
    }

    fn write_char(&mut self, c: char) -> Result<(), Self::Error> {
        self.output.push(c);
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.output.extend(s.chars());
        Ok(())
    }
}

// ============================================================================
// PORTFOLIO - Realistic Tree Fixture
// ============================================================================

pub const WELCOME: File = File {
    name: "welcome.txt",
    content: "Welcome to the portfolio. Type 'help' to get started.",
};

pub const ABOUT: File = File {
    name: "about.txt",
    content: "Systems developer. Coffee enthusiast.",
};

pub const SKILLS: File = File {
    name: "skills.txt",
    content: "Rust, embedded systems, WebAssembly",
};

pub const EXPERIENCE: File = File {
    name: "experience.txt",
    content: "2019-present: firmware engineering",
};

pub const EDUCATION: File = File {
    name: "education.txt",
    content: "BSc Computer Engineering",
};

pub const CONTACT_INFO: File = File {
    name: "info.txt",
    content: "mail: hello@example.dev",
};

pub const SOCIAL_LINKS: File = File {
    name: "social-links.txt",
    content: "github.com/example",
};

pub const QUOTES: File = File {
    name: "quotes.txt",
    content: "Simplicity is prerequisite for reliability.",
};

pub const PROJECTS_README: File = File {
    name: "README.md",
    content: "# Projects\nSee the individual project files.",
};

pub const PROJECT_VERISUM: File = File {
    name: "verisum.md",
    content: "# verisum\nChecksum verification tool.",
};

pub const PROJECT_READALOUD: File = File {
    name: "readaloud.md",
    content: "# readaloud\nText-to-speech reader.",
};

pub const DIR_DOCS: Directory = Directory {
    name: "docs",
    children: &[
        Node::File(&SKILLS),
        Node::File(&EXPERIENCE),
        Node::File(&EDUCATION),
    ],
};

pub const DIR_CONTACT: Directory = Directory {
    name: "contact",
    children: &[Node::File(&CONTACT_INFO), Node::File(&SOCIAL_LINKS)],
};

pub const DIR_MISC: Directory = Directory {
    name: "misc",
    children: &[Node::File(&QUOTES)],
};

pub const DIR_PROJECTS: Directory = Directory {
    name: "projects",
    children: &[
        Node::File(&PROJECTS_README),
        Node::File(&PROJECT_VERISUM),
        Node::File(&PROJECT_READALOUD),
    ],
};

/// Root of the portfolio fixture.
///
/// Structure:
/// ```text
/// ~
/// ├── welcome.txt
/// ├── about.txt
/// ├── docs/
/// │   ├── skills.txt
/// │   ├── experience.txt
/// │   └── education.txt
/// ├── contact/
/// │   ├── info.txt
/// │   └── social-links.txt
/// ├── misc/
/// │   └── quotes.txt
/// └── projects/
///     ├── README.md
///     ├── verisum.md
///     └── readaloud.md
/// ```
pub const PORTFOLIO: Directory = Directory {
    name: "~",
    children: &[
        Node::File(&WELCOME),
        Node::File(&ABOUT),
        Node::Directory(&DIR_DOCS),
        Node::Directory(&DIR_CONTACT),
        Node::Directory(&DIR_MISC),
        Node::Directory(&DIR_PROJECTS),
    ],
};

/// A directory with no children.
pub const EMPTY_DIR: Directory = Directory {
    name: "empty",
    children: &[],
};

/// Root holding only the empty directory.
pub const EMPTY_TREE: Directory = Directory {
    name: "~",
    children: &[Node::Directory(&EMPTY_DIR)],
};

//! Path resolution against the virtual tree.
//!
//! All operations are pure functions over an explicit current-directory
//! handle: they take `&DirHandle` and return new values, never mutating the
//! caller's state. A failed operation leaves the caller's handle exactly as
//! it was.
//!
//! Resolution is a fold-then-walk: `.`/`..` segments are folded over the
//! segment list structurally, then the final list is walked from the root.
//! Existence is checked only by the walk, so `ghost/../docs` resolves
//! whenever `docs` exists. Popping `..` past the root is a no-op, not an
//! error.

use crate::error::ShellError;
use crate::tree::path::{MAX_PATH_DEPTH, Path};
use crate::tree::{Directory, File, Node};

/// Current working location: the normalized segment sequence from root.
///
/// Segment names borrow from the tree itself (`'static`), so a handle can
/// only be built from a successful walk and always designates a directory
/// that exists. The empty sequence is the root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirHandle {
    segments: heapless::Vec<&'static str, MAX_PATH_DEPTH>,
}

impl DirHandle {
    /// Handle designating the root directory.
    pub fn root() -> Self {
        Self {
            segments: heapless::Vec::new(),
        }
    }

    /// Check if this handle designates the root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Nesting depth below the root.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Segment names from root to the current directory.
    pub fn segments(&self) -> &[&'static str] {
        &self.segments
    }

    /// Render the handle for the prompt and `pwd`: `~` or `~/docs/...`.
    // TODO: Use C::MAX_INPUT when const generics stabilize
    pub fn display(&self) -> heapless::String<128> {
        let mut out = heapless::String::new();
        let _ = out.push('~');
        for segment in self.segments.iter() {
            let _ = out.push('/');
            let _ = out.push_str(segment);
        }
        out
    }
}

/// Result of resolving a path expression: the node the walk landed on.
#[derive(Debug)]
pub enum Resolved<'t> {
    /// Resolved to a file
    File(&'t File),

    /// Resolved to a directory
    Directory(&'t Directory),
}

/// Get the directory a handle designates.
///
/// Re-walks the handle from root. A valid handle always succeeds; a stale
/// name yields `NotFound`, a name that is somehow a file `NotADirectory`.
pub fn dir_at<'t>(root: &'t Directory, handle: &DirHandle) -> Result<&'t Directory, ShellError> {
    let mut current = root;

    for segment in handle.segments() {
        match current.find_child(segment) {
            Some(Node::Directory(dir)) => current = dir,
            Some(Node::File(_)) => return Err(ShellError::NotADirectory),
            None => return Err(ShellError::NotFound),
        }
    }

    Ok(current)
}

/// List the immediate children of the handle's directory.
///
/// Declaration order, never sorted. Each `Node` carries its name and kind.
pub fn list_directory<'t>(
    root: &'t Directory,
    handle: &DirHandle,
) -> Result<&'t [Node], ShellError> {
    Ok(dir_at(root, handle)?.children)
}

/// Resolve a path expression relative to a handle.
///
/// 1. Parse the expression; absolute paths restart at root, relative paths
///    extend the handle's segments.
/// 2. Fold `.` (no-op) and `..` (pop, no-op at root) over the segment list.
/// 3. Walk the folded list from root. A missing name, or a file reached
///    while segments remain, yields `NotFound`.
pub fn resolve_node<'t>(
    root: &'t Directory,
    handle: &DirHandle,
    expr: &str,
) -> Result<Resolved<'t>, ShellError> {
    let folded = fold_expr(handle, expr)?;
    walk(root, &folded)
}

/// Read a file's content.
///
/// Fails with `IsADirectory` if the expression resolves to a directory and
/// `NotFound` if any needed segment does not exist.
pub fn read_file(
    root: &Directory,
    handle: &DirHandle,
    expr: &str,
) -> Result<&'static str, ShellError> {
    match resolve_node(root, handle, expr)? {
        Resolved::File(file) => Ok(file.content),
        Resolved::Directory(_) => Err(ShellError::IsADirectory),
    }
}

/// Resolve a path expression to a new directory handle.
///
/// Fails with `NotADirectory` if the expression resolves to a file and
/// `NotFound` if the walk cannot complete. On failure the caller keeps its
/// existing handle untouched.
pub fn change_directory(
    root: &Directory,
    handle: &DirHandle,
    expr: &str,
) -> Result<DirHandle, ShellError> {
    let folded = fold_expr(handle, expr)?;

    // Walk again collecting the tree's own names, so the new handle borrows
    // `'static` names rather than the user's input buffer.
    let mut current = root;
    let mut segments: heapless::Vec<&'static str, MAX_PATH_DEPTH> = heapless::Vec::new();

    for (i, segment) in folded.iter().enumerate() {
        match current.find_child(segment) {
            Some(Node::Directory(dir)) => {
                segments
                    .push(dir.name)
                    .map_err(|_| ShellError::PathTooDeep)?;
                current = dir;
            }
            Some(Node::File(_)) => {
                return if i + 1 == folded.len() {
                    Err(ShellError::NotADirectory)
                } else {
                    Err(ShellError::NotFound)
                };
            }
            None => return Err(ShellError::NotFound),
        }
    }

    Ok(DirHandle { segments })
}

/// Render an ASCII tree of the subtree rooted at the handle's directory.
///
/// Depth-first in declaration order; directories are suffixed with `/`.
/// The last child at each level uses the `└──` connector and drops the
/// vertical continuation bar for its subtree.
pub fn render_tree<const N: usize>(
    root: &Directory,
    handle: &DirHandle,
) -> Result<heapless::String<N>, ShellError> {
    let dir = dir_at(root, handle)?;
    let mut out = heapless::String::new();
    let mut prefix: heapless::String<64> = heapless::String::new();
    render_subtree(dir, &mut prefix, &mut out)?;
    Ok(out)
}

fn render_subtree<const N: usize>(
    dir: &Directory,
    prefix: &mut heapless::String<64>,
    out: &mut heapless::String<N>,
) -> Result<(), ShellError> {
    let count = dir.children.len();

    for (i, child) in dir.children.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };

        out.push_str(prefix).map_err(|_| ShellError::BufferFull)?;
        out.push_str(connector).map_err(|_| ShellError::BufferFull)?;
        out.push_str(child.name())
            .map_err(|_| ShellError::BufferFull)?;

        match child {
            Node::Directory(sub) => {
                out.push_str("/\n").map_err(|_| ShellError::BufferFull)?;

                let continuation = if is_last { "    " } else { "│   " };
                let checkpoint = prefix.len();
                prefix
                    .push_str(continuation)
                    .map_err(|_| ShellError::PathTooDeep)?;
                render_subtree(sub, prefix, out)?;
                prefix.truncate(checkpoint);
            }
            Node::File(_) => {
                out.push('\n').map_err(|_| ShellError::BufferFull)?;
            }
        }
    }

    Ok(())
}

/// Fold a path expression into an absolute segment list.
///
/// Shared first half of every resolution: parse, pick the starting
/// sequence, fold `.`/`..`. No existence checks happen here.
fn fold_expr<'a>(
    handle: &'a DirHandle,
    expr: &'a str,
) -> Result<heapless::Vec<&'a str, MAX_PATH_DEPTH>, ShellError> {
    let path = Path::parse(expr)?;

    let mut working: heapless::Vec<&'a str, MAX_PATH_DEPTH> = if path.is_absolute() {
        heapless::Vec::new()
    } else {
        handle.segments().iter().copied().collect()
    };

    for segment in path.segments() {
        match *segment {
            "." => {}
            ".." => {
                // Popping past root is a no-op, not an error.
                working.pop();
            }
            other => {
                working.push(other).map_err(|_| ShellError::PathTooDeep)?;
            }
        }
    }

    Ok(working)
}

/// Walk a folded segment list from the root.
fn walk<'t>(root: &'t Directory, segments: &[&str]) -> Result<Resolved<'t>, ShellError> {
    let mut current = root;

    for (i, segment) in segments.iter().enumerate() {
        match current.find_child(segment) {
            Some(Node::Directory(dir)) => current = dir,
            Some(Node::File(file)) => {
                return if i + 1 == segments.len() {
                    Ok(Resolved::File(file))
                } else {
                    // A file reached with segments remaining: the deeper
                    // path cannot exist.
                    Err(ShellError::NotFound)
                };
            }
            None => return Err(ShellError::NotFound),
        }
    }

    Ok(Resolved::Directory(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    const SKILLS: File = File {
        name: "skills.txt",
        content: "Rust, embedded, wasm",
    };

    const NOTES: File = File {
        name: "notes.txt",
        content: "scratch",
    };

    const ABOUT: File = File {
        name: "about.txt",
        content: "Hi there",
    };

    const DOCS: Directory = Directory {
        name: "docs",
        children: &[Node::File(&SKILLS), Node::File(&NOTES)],
    };

    const CONTACT: Directory = Directory {
        name: "contact",
        children: &[],
    };

    const ROOT: Directory = Directory {
        name: "~",
        children: &[
            Node::File(&ABOUT),
            Node::Directory(&DOCS),
            Node::Directory(&CONTACT),
        ],
    };

    fn docs_handle() -> DirHandle {
        change_directory(&ROOT, &DirHandle::root(), "docs").unwrap()
    }

    #[test]
    fn test_root_handle() {
        let handle = DirHandle::root();
        assert!(handle.is_root());
        assert_eq!(handle.depth(), 0);
        assert_eq!(handle.display().as_str(), "~");
    }

    #[test]
    fn test_handle_display() {
        assert_eq!(docs_handle().display().as_str(), "~/docs");
    }

    #[test]
    fn test_list_directory_order() {
        let children = list_directory(&ROOT, &DirHandle::root()).unwrap();
        let names: heapless::Vec<&str, 4> = children.iter().map(|c| c.name()).collect();
        assert_eq!(names.as_slice(), &["about.txt", "docs", "contact"]);
        assert_eq!(children[0].kind(), NodeKind::File);
        assert_eq!(children[1].kind(), NodeKind::Directory);
    }

    #[test]
    fn test_read_file_relative() {
        let content = read_file(&ROOT, &DirHandle::root(), "docs/skills.txt").unwrap();
        assert_eq!(content, "Rust, embedded, wasm");
    }

    #[test]
    fn test_read_file_errors() {
        assert_eq!(
            read_file(&ROOT, &DirHandle::root(), "docs"),
            Err(ShellError::IsADirectory)
        );
        assert_eq!(
            read_file(&ROOT, &DirHandle::root(), "docs/missing.txt"),
            Err(ShellError::NotFound)
        );
        assert_eq!(
            read_file(&ROOT, &DirHandle::root(), "about.txt/deeper"),
            Err(ShellError::NotFound)
        );
    }

    #[test]
    fn test_change_directory_and_back() {
        let docs = docs_handle();
        assert_eq!(docs.segments(), &["docs"]);

        let back = change_directory(&ROOT, &docs, "..").unwrap();
        assert!(back.is_root());
    }

    #[test]
    fn test_change_directory_to_file_fails() {
        assert_eq!(
            change_directory(&ROOT, &DirHandle::root(), "about.txt"),
            Err(ShellError::NotADirectory)
        );
    }

    #[test]
    fn test_parent_of_root_is_root() {
        let handle = change_directory(&ROOT, &DirHandle::root(), "../../..").unwrap();
        assert!(handle.is_root());
    }

    #[test]
    fn test_absolute_is_handle_independent() {
        let from_root = read_file(&ROOT, &DirHandle::root(), "~/docs/skills.txt").unwrap();
        let from_docs = read_file(&ROOT, &docs_handle(), "~/docs/skills.txt").unwrap();
        assert_eq!(from_root, from_docs);
    }

    #[test]
    fn test_structural_parent_fold() {
        // `..` cancels the preceding segment before any existence check, so
        // a nonexistent intermediate name is never walked.
        let content = read_file(&ROOT, &DirHandle::root(), "ghost/../docs/skills.txt").unwrap();
        assert_eq!(content, "Rust, embedded, wasm");
    }

    #[test]
    fn test_failed_cd_leaves_handle_usable() {
        let docs = docs_handle();
        assert!(change_directory(&ROOT, &docs, "nope").is_err());
        // The old handle still resolves.
        let children = list_directory(&ROOT, &docs).unwrap();
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn test_render_tree() {
        let rendered: heapless::String<512> = render_tree(&ROOT, &DirHandle::root()).unwrap();
        let expected = "\
├── about.txt\n\
├── docs/\n\
│   ├── skills.txt\n\
│   └── notes.txt\n\
└── contact/\n";
        assert_eq!(rendered.as_str(), expected);
    }

    #[test]
    fn test_render_tree_of_subdirectory() {
        let rendered: heapless::String<256> = render_tree(&ROOT, &docs_handle()).unwrap();
        assert_eq!(rendered.as_str(), "├── skills.txt\n└── notes.txt\n");
    }

    #[test]
    fn test_render_tree_buffer_full() {
        let result: Result<heapless::String<8>, _> = render_tree(&ROOT, &DirHandle::root());
        assert_eq!(result, Err(ShellError::BufferFull));
    }

    #[test]
    fn test_dot_segments_are_noops() {
        let handle = change_directory(&ROOT, &DirHandle::root(), "./docs/.").unwrap();
        assert_eq!(handle.segments(), &["docs"]);
    }
}

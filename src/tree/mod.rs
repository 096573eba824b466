//! Virtual file tree data structures.
//!
//! The tree is the whole "filesystem": a static hierarchy of named nodes,
//! each either a content-bearing file or a directory of further nodes. All
//! structures are const-initializable and live in ROM; nothing mutates them
//! at runtime, so there is no `&mut` API.
//!
//! Child order is declaration order. Listings and completion enumerate
//! children exactly as declared, never sorted, so output is deterministic
//! across runs.

// Sub-modules
pub mod completion;
pub mod path;
pub mod resolve;

/// Node kind tag used in listings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Content-bearing leaf
    File,

    /// Directory with named children
    Directory,
}

/// A file node: a name and its text payload.
#[derive(Debug, Clone)]
pub struct File {
    /// File name (unique within its parent)
    pub name: &'static str,

    /// Text content returned by `cat`
    pub content: &'static str,
}

/// A directory node containing child nodes.
///
/// `children` order is display order. A directory may be empty.
#[derive(Debug, Clone)]
pub struct Directory {
    /// Directory name (root conventionally uses the `~` sentinel)
    pub name: &'static str,

    /// Child nodes in declaration order
    pub children: &'static [Node],
}

/// Tree node (file or directory).
///
/// A file never has children and a directory never has content; the sum
/// type makes the invariant structural instead of a runtime check.
#[derive(Debug, Clone)]
pub enum Node {
    /// File node
    File(&'static File),

    /// Directory node
    Directory(&'static Directory),
}

impl Node {
    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Node::File(_))
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    /// Get node name.
    pub fn name(&self) -> &'static str {
        match self {
            Node::File(file) => file.name,
            Node::Directory(dir) => dir.name,
        }
    }

    /// Get node kind tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::File(_) => NodeKind::File,
            Node::Directory(_) => NodeKind::Directory,
        }
    }
}

impl Directory {
    /// Find a child node by name.
    ///
    /// Linear scan in declaration order; returns `None` if absent.
    pub fn find_child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|child| child.name() == name)
    }
}

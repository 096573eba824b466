//! Path parsing.
//!
//! Splits a user-typed path expression into segments and classifies it as
//! absolute or relative. Resolution of `.`/`..` and existence checks happen
//! in [`resolve`](super::resolve); this module only parses.
//!
//! # Path Syntax
//!
//! - **Absolute paths**: start with the root sentinel `~` or a leading `/`
//!   (`~/docs/skills.txt`, `/docs`, `~`)
//! - **Relative paths**: anything else (`docs/skills.txt`, `../contact`)
//! - **Parent navigation**: `..` goes up one level
//! - **Current directory**: `.` stays at the current level
//!
//! Repeated and trailing separators are ignored (`docs//x` ≡ `docs/x`).

use crate::error::ShellError;

/// Maximum path depth (directory nesting).
///
/// Matches the default MAX_PATH_DEPTH from ShellConfig. Portfolio trees are
/// shallow; eight levels is well past anything a static tree declares.
pub const MAX_PATH_DEPTH: usize = 8;

/// Parsed path expression.
///
/// Zero-allocation: segments are slices into the input string. `.` and `..`
/// segments are preserved for the resolver to fold.
#[derive(Debug, PartialEq)]
pub struct Path<'a> {
    /// Whether this path starts at the root (`~` or leading `/`)
    is_absolute: bool,

    /// Path segments, `.` and `..` included
    segments: heapless::Vec<&'a str, MAX_PATH_DEPTH>,
}

impl<'a> Path<'a> {
    /// Parse a path expression.
    ///
    /// # Returns
    ///
    /// - `Ok(Path)` - successfully parsed
    /// - `Err(ShellError::InvalidPath)` - empty expression
    /// - `Err(ShellError::PathTooDeep)` - more than MAX_PATH_DEPTH segments
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let path = Path::parse("~/docs/skills.txt")?;
    /// assert!(path.is_absolute());
    /// assert_eq!(path.segments(), &["docs", "skills.txt"]);
    ///
    /// let path = Path::parse("../contact")?;
    /// assert!(!path.is_absolute());
    /// assert_eq!(path.segments(), &["..", "contact"]);
    /// ```
    pub fn parse(input: &'a str) -> Result<Self, ShellError> {
        if input.is_empty() {
            return Err(ShellError::InvalidPath);
        }

        // The root sentinel `~` and a leading `/` both anchor at the root.
        // The sentinel only counts as a whole segment; a name that merely
        // begins with `~` stays relative.
        let (is_absolute, rest) = if input == "~" {
            (true, "")
        } else if let Some(stripped) = input.strip_prefix("~/") {
            (true, stripped)
        } else if input.starts_with('/') {
            (true, input)
        } else {
            (false, input)
        };

        let mut segments = heapless::Vec::new();

        for segment in rest.split('/') {
            // Skip empty segments (leading `/`, `//`, trailing `/`)
            if segment.is_empty() {
                continue;
            }

            segments
                .push(segment)
                .map_err(|_| ShellError::PathTooDeep)?;
        }

        Ok(Self {
            is_absolute,
            segments,
        })
    }

    /// Check if this path starts at the root.
    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    /// Get path segments as a slice.
    ///
    /// Includes `.` and `..`, which are folded during resolution.
    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// Get the number of segments in the path.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path_is_invalid() {
        assert_eq!(Path::parse(""), Err(ShellError::InvalidPath));
    }

    #[test]
    fn test_root_sentinel_alone() {
        let path = Path::parse("~").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.segments(), &[] as &[&str]);
        assert_eq!(path.segment_count(), 0);
    }

    #[test]
    fn test_slash_root() {
        let path = Path::parse("/").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.segments(), &[] as &[&str]);
    }

    #[test]
    fn test_tilde_prefix() {
        let path = Path::parse("~/docs/skills.txt").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.segments(), &["docs", "skills.txt"]);
    }

    #[test]
    fn test_slash_prefix() {
        let path = Path::parse("/docs/skills.txt").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.segments(), &["docs", "skills.txt"]);
    }

    #[test]
    fn test_relative_single_segment() {
        let path = Path::parse("about.txt").unwrap();
        assert!(!path.is_absolute());
        assert_eq!(path.segments(), &["about.txt"]);
    }

    #[test]
    fn test_relative_multiple_segments() {
        let path = Path::parse("docs/skills.txt").unwrap();
        assert!(!path.is_absolute());
        assert_eq!(path.segments(), &["docs", "skills.txt"]);
    }

    #[test]
    fn test_parent_navigation() {
        let path = Path::parse("..").unwrap();
        assert!(!path.is_absolute());
        assert_eq!(path.segments(), &[".."]);

        let path = Path::parse("../contact").unwrap();
        assert_eq!(path.segments(), &["..", "contact"]);

        let path = Path::parse("../../docs/skills.txt").unwrap();
        assert_eq!(path.segments(), &["..", "..", "docs", "skills.txt"]);
    }

    #[test]
    fn test_current_directory() {
        let path = Path::parse(".").unwrap();
        assert!(!path.is_absolute());
        assert_eq!(path.segments(), &["."]);

        let path = Path::parse("./docs").unwrap();
        assert_eq!(path.segments(), &[".", "docs"]);
    }

    #[test]
    fn test_mixed_navigation() {
        let path = Path::parse("../docs/./skills.txt").unwrap();
        assert_eq!(path.segments(), &["..", "docs", ".", "skills.txt"]);
    }

    #[test]
    fn test_trailing_slash_ignored() {
        let path = Path::parse("docs/").unwrap();
        assert_eq!(path.segments(), &["docs"]);

        let path = Path::parse("~/docs/").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.segments(), &["docs"]);
    }

    #[test]
    fn test_double_slash_treated_as_single() {
        let path = Path::parse("docs//skills.txt").unwrap();
        assert_eq!(path.segments(), &["docs", "skills.txt"]);

        let path = Path::parse("//docs").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.segments(), &["docs"]);
    }

    #[test]
    fn test_path_too_deep() {
        let result = Path::parse("a/b/c/d/e/f/g/h/i");
        assert_eq!(result, Err(ShellError::PathTooDeep));
    }

    #[test]
    fn test_max_depth_exactly() {
        let path = Path::parse("a/b/c/d/e/f/g/h").unwrap();
        assert_eq!(path.segment_count(), 8);
    }

    #[test]
    fn test_absolute_path_with_parent() {
        let path = Path::parse("~/../docs").unwrap();
        assert!(path.is_absolute());
        assert_eq!(path.segments(), &["..", "docs"]);
    }

    #[test]
    fn test_tilde_prefixed_name_is_relative() {
        // `~abc` is a plain name, not an anchored path.
        let path = Path::parse("~abc").unwrap();
        assert!(!path.is_absolute());
        assert_eq!(path.segments(), &["~abc"]);

        let path = Path::parse("~abc/nested").unwrap();
        assert!(!path.is_absolute());
        assert_eq!(path.segments(), &["~abc", "nested"]);
    }

    #[test]
    fn test_tilde_not_stripped_mid_path() {
        // `~` only anchors as a prefix; elsewhere it is an ordinary name.
        let path = Path::parse("docs/~").unwrap();
        assert!(!path.is_absolute());
        assert_eq!(path.segments(), &["docs", "~"]);
    }
}

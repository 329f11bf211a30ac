//! Colon-delimited path type with validated, non-empty segments.

use std::fmt;

/// Maximum number of segments a path may carry.
///
/// Paths are typically a handful of segments deep; the cap keeps
/// unbounded strings from untrusted input out of the resolver.
pub const MAX_SEGMENTS: usize = 64;

/// Errors related to path parsing and validation.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path string has no segments at all.
    #[error("empty path")]
    Empty,
    /// A segment between separators is empty (`"a::b"`, `":a"`, `"a:"`).
    #[error("empty segment at position {position}")]
    EmptySegment { position: usize },
    /// The path exceeds [`MAX_SEGMENTS`].
    #[error("path has {count} segments, limit is {limit}")]
    TooManySegments { count: usize, limit: usize },
}

/// A parsed path: an ordered, non-empty list of string segments.
///
/// Paths address slots in a store, `"user:address:city"` naming the
/// slot `city` three levels down. Segments are arbitrary non-empty
/// strings; the separator is always `:`.
#[derive(Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parse a path string.
    ///
    /// # Path syntax
    ///
    /// - Segments are separated by `:`
    /// - The empty string is rejected
    /// - Empty segments (leading, trailing, or doubled separators) are
    ///   rejected rather than normalized away
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyward_core::{Path, PathError};
    ///
    /// let path = Path::parse("user:address:city").unwrap();
    /// assert_eq!(path.len(), 3);
    ///
    /// assert_eq!(Path::parse(""), Err(PathError::Empty));
    /// assert!(Path::parse("a::b").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PathError> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }

        let segments: Vec<String> = s.split(':').map(|seg| seg.to_string()).collect();
        Self::from_segments(segments)
    }

    /// Create a path from pre-split segments, applying the same
    /// validation as [`Path::parse`].
    pub fn from_segments(segments: Vec<String>) -> Result<Self, PathError> {
        if segments.is_empty() {
            return Err(PathError::Empty);
        }
        if segments.len() > MAX_SEGMENTS {
            return Err(PathError::TooManySegments {
                count: segments.len(),
                limit: MAX_SEGMENTS,
            });
        }
        for (position, segment) in segments.iter().enumerate() {
            if segment.is_empty() {
                return Err(PathError::EmptySegment { position });
            }
        }
        Ok(Path { segments })
    }

    /// The first segment. Always present.
    pub fn first(&self) -> &str {
        &self.segments[0]
    }

    /// The path minus its first segment, or `None` when this path is
    /// already final.
    #[must_use]
    pub fn rest(&self) -> Option<Path> {
        if self.is_final() {
            None
        } else {
            Some(Path {
                segments: self.segments[1..].to_vec(),
            })
        }
    }

    /// Whether this path is a single segment.
    pub fn is_final(&self) -> bool {
        self.segments.len() == 1
    }

    /// Get the number of segments. Never zero.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Iterate over segments.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.segments.iter()
    }

    /// Segments as a slice.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join(":"))
    }
}

impl std::ops::Index<usize> for Path {
    type Output = String;

    fn index(&self, i: usize) -> &Self::Output {
        &self.segments[i]
    }
}

/// Macro for creating paths from literals.
///
/// # Example
///
/// ```rust
/// use keyward_core::path;
///
/// let p = path!("user:address:city");
/// assert_eq!(p.len(), 3);
/// ```
#[macro_export]
macro_rules! path {
    ($s:expr) => {
        $crate::Path::parse($s).expect("invalid path literal")
    };
}

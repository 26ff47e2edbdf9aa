//! Path types for hierarchical document access.
//!
//! This module provides dot-path construction for accessing nested structures
//! in documents. The Path/PathBuf pair follows the same borrowed/owned pattern
//! as std::path::Path/PathBuf: `Path` is unsized and always behind a
//! reference, `PathBuf` owns its string.
//!
//! Plain `&str` and `String` coerce into `&Path`, so document APIs that take
//! `impl AsRef<Path>` accept `"user.profile.name"` directly. Components are
//! separated by dots; empty components are filtered during iteration, so
//! un-normalized input like `"user..name"` still navigates correctly.

use std::{borrow::Borrow, fmt, ops::Deref, str::FromStr};

/// Normalizes a path string by cleaning up dots and empty components.
///
/// - Empty string `""` → empty string (refers to the document root)
/// - Leading dots `".user"` → `"user"`
/// - Trailing dots `"user."` → `"user"`
/// - Consecutive dots `"user..profile"` → `"user.profile"`
pub fn normalize_path(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    input
        .split('.')
        .filter(|component| !component.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// An owned dot-path for hierarchical document access.
///
/// ```
/// # use docdelta::doc::PathBuf;
/// # use std::str::FromStr;
/// let path = PathBuf::from_str("user.profile.name").unwrap();
///
/// let built = PathBuf::new().push("user").push("profile").push("name");
/// assert_eq!(path, built);
///
/// let components: Vec<&str> = path.components().collect();
/// assert_eq!(components, vec!["user", "profile", "name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathBuf {
    inner: String,
}

/// A borrowed dot-path for hierarchical document access.
///
/// `Path` is the borrowed counterpart to `PathBuf`, similar to how `&str`
/// relates to `String`. This type is unsized and must always be used behind
/// a reference.
#[derive(Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Path {
    inner: str,
}

impl PathBuf {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            inner: String::new(),
        }
    }

    /// Creates a PathBuf by normalizing the input string.
    pub fn normalize(path: &str) -> Self {
        Self {
            inner: normalize_path(path),
        }
    }

    /// Adds a path to the end of this path, normalizing the input.
    pub fn push(mut self, path: impl AsRef<str>) -> Self {
        let normalized = normalize_path(path.as_ref());
        if normalized.is_empty() {
            return self;
        }

        if self.inner.is_empty() {
            self.inner = normalized;
        } else {
            self.inner.push('.');
            self.inner.push_str(&normalized);
        }
        self
    }

    /// Joins this path with another path.
    pub fn join(mut self, other: impl AsRef<Path>) -> Self {
        let other_path = other.as_ref();
        if self.inner.is_empty() {
            self.inner = other_path.inner.to_string();
        } else if !other_path.inner.is_empty() {
            self.inner.push('.');
            self.inner.push_str(&other_path.inner);
        }
        self
    }

    /// Returns the parent path, or `None` if this is a root-level path.
    pub fn parent(&self) -> Option<PathBuf> {
        self.inner.rfind('.').map(|last_dot| PathBuf {
            inner: self.inner[..last_dot].to_string(),
        })
    }
}

impl Path {
    /// Creates a Path from a string without normalization.
    ///
    /// Un-normalized strings are acceptable because `components()` filters
    /// empty components at iteration time.
    pub fn from_str_ref(s: &str) -> &Path {
        // SAFETY: Path is repr(transparent) over str
        unsafe { &*(s as *const str as *const Path) }
    }

    /// Returns an iterator over the path components as string slices.
    pub fn components(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.inner.split('.').filter(|s| !s.is_empty())
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        self.components().count()
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the last component of the path, or `None` if empty.
    pub fn last(&self) -> Option<&str> {
        self.components().next_back()
    }

    /// Returns the path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Converts this `Path` to an owned `PathBuf`.
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf {
            inner: self.inner.to_string(),
        }
    }
}

impl Default for PathBuf {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for PathBuf {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        Path::from_str_ref(self.inner.as_str())
    }
}

impl AsRef<Path> for PathBuf {
    fn as_ref(&self) -> &Path {
        self.deref()
    }
}

impl AsRef<Path> for Path {
    fn as_ref(&self) -> &Path {
        self
    }
}

impl AsRef<Path> for str {
    fn as_ref(&self) -> &Path {
        Path::from_str_ref(self)
    }
}

impl AsRef<Path> for String {
    fn as_ref(&self) -> &Path {
        Path::from_str_ref(self)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl AsRef<str> for PathBuf {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

impl Borrow<Path> for PathBuf {
    fn borrow(&self) -> &Path {
        self.deref()
    }
}

impl FromStr for PathBuf {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}

impl From<&Path> for PathBuf {
    fn from(path: &Path) -> Self {
        path.to_path_buf()
    }
}

impl fmt::Display for PathBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", self.inner)
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.is_empty() {
            write!(f, "(empty path)")
        } else {
            write!(f, "{}", &self.inner)
        }
    }
}

/// Constructs a path from literals and runtime values.
///
/// - `path!()` - Empty path (`PathBuf`)
/// - `path!("user.profile.name")` - Single literal (`&'static Path`, zero allocation)
/// - `path!("user", "profile", "name")` - Multiple components (`PathBuf`)
/// - `path!(base, "name")` - Mix runtime and literal parts (`PathBuf`)
#[macro_export]
macro_rules! path {
    // Empty path - returns PathBuf
    () => {
        $crate::doc::PathBuf::new()
    };

    // Single string literal - returns &'static Path (zero allocation)
    ($single:literal) => {
        $crate::doc::Path::from_str_ref($single)
    };

    // Multiple arguments - returns PathBuf
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut path = $crate::doc::PathBuf::new();
        path = path.push(AsRef::<str>::as_ref(&$first));
        $(
            path = path.push(AsRef::<str>::as_ref(&$rest));
        )+
        path
    }};

    // Single non-literal expression - returns PathBuf
    ($single:expr) => {
        $crate::doc::PathBuf::new().push(AsRef::<str>::as_ref(&$single))
    };
}

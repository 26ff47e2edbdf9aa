//! Document model.
//!
//! This module provides the main document type used throughout the library.
//! A [`Doc`] is an insertion-ordered mapping from field names to [`Value`]s,
//! the in-memory shape of one persisted entity or sub-structure. Documents
//! are tree-shaped; values own their children, so cloning a document yields
//! a fully independent copy.
//!
//! # Usage
//!
//! ```
//! use docdelta::doc::Doc;
//!
//! let mut doc = Doc::new();
//! doc.set("name", "Alice");
//! doc.set("age", 30);
//! doc.set_path("profile.bio", "Software developer").unwrap();
//!
//! assert_eq!(doc.get_as::<&str>("profile.bio"), Some("Software developer"));
//! ```

use std::{fmt, str::FromStr};

use indexmap::IndexMap;

// Submodules
pub mod errors;
pub mod json;
pub mod list;
pub mod path;
pub mod value;

// Convenience re-exports for core document types
pub use errors::DocError;
pub use list::List;
pub use path::{Path, PathBuf};
pub use value::Value;

// Re-export the macro from crate root
pub use crate::path;

/// Insertion-ordered mapping from field names to values.
///
/// `Doc` is the primary document type: the live attribute state of an entity,
/// the payload of a snapshot, and the shape of a changeset are all `Doc`s.
/// Field order is preserved the way the storage layer delivered it.
///
/// # Core Operations
///
/// - **Data access**: `get()`, `get_as()`, `get_doc()`, iterators
/// - **Data modification**: `set()`, `set_path()`, `remove()`
/// - **Path operations**: dot-notation access to nested structures
/// - **Interop**: [`Doc::from_json`] / [`Doc::to_json`] for storage payloads
///
/// # Examples
///
/// ## Basic Operations
/// ```
/// # use docdelta::doc::Doc;
/// let mut doc = Doc::new();
/// doc.set("name", "Alice");
/// doc.set("age", 30);
///
/// assert_eq!(doc.get_as::<&str>("name"), Some("Alice"));
/// assert_eq!(doc.get_as::<i64>("age"), Some(30));
/// ```
///
/// ## Path Operations
/// ```
/// # use docdelta::doc::Doc;
/// let mut doc = Doc::new();
/// doc.set("user.profile.name", "Alice");
///
/// assert_eq!(doc.get_as::<&str>("user.profile.name"), Some("Alice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Doc {
    /// Fields indexed by name, in insertion order
    fields: IndexMap<String, Value>,
}

impl Doc {
    /// Creates a new empty document
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Returns true if this document has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of direct fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the document contains the given key or path
    pub fn contains_key(&self, key: impl AsRef<Path>) -> bool {
        self.get(key).is_some()
    }

    /// Gets a value by key or dot-path (immutable reference)
    pub fn get(&self, key: impl AsRef<Path>) -> Option<&Value> {
        let path = key.as_ref();
        let mut segments = path.components();

        let first_segment = segments.next()?;
        let mut current_value = self.fields.get(first_segment)?;

        // Navigate through remaining segments
        for segment in segments {
            match current_value {
                Value::Doc(doc) => {
                    current_value = doc.fields.get(segment)?;
                }
                Value::List(list) => {
                    // Try to parse segment as list index
                    let index: usize = segment.parse().ok()?;
                    current_value = list.get(index)?;
                }
                _ => return None, // Can't navigate further
            }
        }

        Some(current_value)
    }

    /// Gets a mutable reference to a value by key or dot-path
    pub fn get_mut(&mut self, key: impl AsRef<Path>) -> Option<&mut Value> {
        let path = key.as_ref();
        let segments: Vec<_> = path.components().collect();

        if segments.is_empty() {
            return None;
        }

        let mut current = self;

        // Navigate to the parent of the target
        for segment in &segments[..segments.len() - 1] {
            match current.fields.get_mut(*segment) {
                Some(Value::Doc(doc)) => {
                    current = doc;
                }
                _ => return None, // Can't navigate further
            }
        }

        let final_key = segments.last()?;
        current.fields.get_mut(*final_key)
    }

    /// Gets a value by key with automatic type conversion using TryFrom
    ///
    /// Returns Some(T) if the value exists and can be converted to type T.
    /// Returns None if the key doesn't exist or type conversion fails.
    ///
    /// # Examples
    ///
    /// ```
    /// # use docdelta::doc::Doc;
    /// let mut doc = Doc::new();
    /// doc.set("name", "Alice");
    /// doc.set("age", 30);
    ///
    /// assert_eq!(doc.get_as::<&str>("name"), Some("Alice"));
    /// assert_eq!(doc.get_as::<i64>("age"), Some(30));
    ///
    /// // Returns None when key doesn't exist or type doesn't match
    /// assert_eq!(doc.get_as::<String>("missing"), None);
    /// assert_eq!(doc.get_as::<i64>("name"), None);
    /// ```
    pub fn get_as<'a, T>(&'a self, key: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = DocError>,
    {
        let value = self.get(key)?;
        T::try_from(value).ok()
    }

    /// Sets a value at the given key or dot-path, returns the old value if present
    ///
    /// For dotted paths, intermediate documents are created as needed; setting
    /// through an existing scalar replaces it with a document.
    pub fn set(&mut self, key: impl AsRef<Path>, value: impl Into<Value>) -> Option<Value> {
        let path_str = key.as_ref().as_str();

        // For simple keys (no dots), use direct assignment
        if !path_str.contains('.') {
            self.fields.insert(path_str.to_string(), value.into())
        } else {
            let path_buf = PathBuf::from_str(path_str).unwrap(); // Infallible
            self.set_path(&path_buf, value).unwrap_or_default()
        }
    }

    /// Inserts a value under a literal key, without dot-path interpretation.
    ///
    /// Used where the key is data rather than navigation — the diff engine
    /// emits changeset keys exactly as they appear in the source document.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    /// Sets a value at a dot-path, creating intermediate documents as needed
    pub fn set_path(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, DocError> {
        let path = path.as_ref();
        let segments: Vec<_> = path.components().collect();

        if segments.is_empty() {
            return Err(DocError::InvalidPath {
                path: "(empty path)".to_string(),
            });
        }

        let mut current = self;

        // Navigate to the parent, creating intermediate documents as needed
        for segment in &segments[..segments.len() - 1] {
            let entry = current
                .fields
                .entry(segment.to_string())
                .or_insert_with(|| Value::Doc(Doc::new()));
            match entry {
                Value::Doc(doc) => {
                    current = doc;
                }
                _ => {
                    // Replace scalar value with a document to allow navigation
                    *entry = Value::Doc(Doc::new());
                    match entry {
                        Value::Doc(doc) => current = doc,
                        _ => unreachable!(),
                    }
                }
            }
        }

        let final_key = segments.last().unwrap();
        Ok(current.fields.insert(final_key.to_string(), value.into()))
    }

    /// Removes a value by key or dot-path, returns the old value if present.
    ///
    /// Removal preserves the insertion order of the remaining fields.
    pub fn remove(&mut self, key: impl AsRef<Path>) -> Option<Value> {
        let path = key.as_ref();
        let segments: Vec<_> = path.components().collect();

        match segments.as_slice() {
            [] => None,
            [single] => self.fields.shift_remove(*single),
            [parents @ .., last] => {
                let mut current = self;
                for segment in parents {
                    match current.fields.get_mut(*segment) {
                        Some(Value::Doc(doc)) => current = doc,
                        _ => return None,
                    }
                }
                current.fields.shift_remove(*last)
            }
        }
    }

    /// Returns an iterator over all key-value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.fields.iter_mut()
    }

    /// Returns an iterator over all keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }

    /// Returns an iterator over all values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    /// Clears all fields from this document
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Get a reference to a nested document by key
    pub fn get_doc(&self, key: impl AsRef<Path>) -> Option<&Doc> {
        match self.get(key)? {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Get a mutable reference to a nested document by key
    pub fn get_doc_mut(&mut self, key: impl AsRef<Path>) -> Option<&mut Doc> {
        match self.get_mut(key)? {
            Value::Doc(doc) => Some(doc),
            _ => None,
        }
    }

    /// Get a reference to a list by key
    pub fn get_list(&self, key: impl AsRef<Path>) -> Option<&List> {
        match self.get(key)? {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    /// Get a mutable reference to a list by key
    pub fn get_list_mut(&mut self, key: impl AsRef<Path>) -> Option<&mut List> {
        match self.get_mut(key)? {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

// Builder pattern methods
impl Doc {
    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder method to set a nested document
    pub fn with_doc(self, key: impl AsRef<Path>, value: impl Into<Doc>) -> Self {
        self.with(key, Value::Doc(value.into()))
    }

    /// Builder method to set a list value
    pub fn with_list(self, key: impl AsRef<Path>, value: impl Into<List>) -> Self {
        self.with(key, Value::List(value.into()))
    }
}

impl fmt::Display for Doc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl FromIterator<(String, Value)> for Doc {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Doc {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

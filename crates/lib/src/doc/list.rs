//! Ordered sequences of values within documents.
//!
//! A `List` is a plain ordered array, the document-store counterpart of a
//! BSON array. Elements are addressed by zero-based index; the diff engine
//! compares two lists element-wise by index and reports changed positions.

use super::errors::DocError;
use super::value::Value;

/// Ordered sequence of document values.
///
/// ```
/// # use docdelta::doc::List;
/// let mut list = List::new();
/// list.push("first");
/// list.push("second");
/// list.insert(1, "between").unwrap();
///
/// assert_eq!(list.get(0).unwrap().as_text(), Some("first"));
/// assert_eq!(list.get(1).unwrap().as_text(), Some("between"));
/// assert_eq!(list.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new empty list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of items in the list
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a value to the end of the list, returning its index
    pub fn push(&mut self, value: impl Into<Value>) -> usize {
        self.items.push(value.into());
        self.items.len() - 1
    }

    /// Inserts a value at a specific index, shifting later elements
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<(), DocError> {
        let len = self.items.len();
        if index > len {
            return Err(DocError::IndexOutOfBounds { index, len });
        }
        self.items.insert(index, value.into());
        Ok(())
    }

    /// Gets a value by index
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Gets a mutable reference to a value by index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Sets a value at a specific index, returns the old value if present
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Option<Value> {
        let slot = self.items.get_mut(index)?;
        Some(std::mem::replace(slot, value.into()))
    }

    /// Removes and returns the value at an index, shifting later elements
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Returns an iterator over the values in order
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the values in order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.items.iter_mut()
    }

    /// Clears all items from the list
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Converts to a Vec of values
    pub fn to_vec(&self) -> Vec<Value> {
        self.items.clone()
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

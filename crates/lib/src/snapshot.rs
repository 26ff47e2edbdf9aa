//! The snapshot store.
//!
//! A [`Snapshot`] is the last-synced copy of an entity's field values and the
//! baseline the diff engine compares against. Capture produces an independent
//! copy: [`crate::doc::Value`] owns its children, so cloning a field is a
//! by-value deep copy of composites and a trivial copy of scalars and object
//! ids. No later mutation of the live document can be observed through a
//! snapshot.
//!
//! A snapshot is owned by exactly one entity and is replaced wholesale on
//! every whole-document capture; it is never mutated in place except by the
//! explicit single-field capture.

use tracing::debug;

use crate::doc::{Doc, Path};

/// Last-synced copy of a document's field values.
///
/// ```
/// # use docdelta::{doc::Doc, snapshot::Snapshot};
/// let mut live = Doc::new().with("name", "Alice");
/// let snapshot = Snapshot::capture(&live);
///
/// live.set("name", "Bob");
/// assert_eq!(snapshot.as_doc().get_as::<&str>("name"), Some("Alice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    fields: Doc,
}

impl Snapshot {
    /// Creates an empty snapshot, the state of a never-synced entity.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Captures an independent copy of the document's current field values.
    ///
    /// Capturing a document with no fields yields an empty snapshot. The
    /// returned snapshot replaces any prior one the caller holds.
    pub fn capture(document: &Doc) -> Self {
        debug!(fields = document.len(), "captured snapshot");
        Self {
            fields: document.clone(),
        }
    }

    /// Captures a single field of the document into this snapshot.
    ///
    /// The field's current value replaces the snapshot's value under that
    /// key; a key absent from the live document is cleared from the snapshot
    /// as well. Other fields are left untouched.
    pub fn capture_field(&mut self, document: &Doc, key: impl AsRef<Path>) {
        let key = key.as_ref();
        match document.get(key) {
            Some(value) => {
                self.fields.set(key, value.clone());
            }
            None => {
                self.fields.remove(key);
            }
        }
    }

    /// The snapshot's field values, used as a diff baseline.
    pub fn as_doc(&self) -> &Doc {
        &self.fields
    }

    /// Consumes the snapshot, returning its field values.
    pub fn into_doc(self) -> Doc {
        self.fields
    }

    /// Returns true if the snapshot holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of captured fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl From<Doc> for Snapshot {
    fn from(fields: Doc) -> Self {
        Self { fields }
    }
}

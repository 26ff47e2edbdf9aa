//! The entity layer.
//!
//! An [`Entity`] is the attribute bag a document-store record lives in
//! between loads and saves: the live [`Doc`] of attributes, the
//! [`Snapshot`] those attributes are diffed against, a [`Schema`] driving
//! assignment-time coercion, and an optional list of [`Observer`]s fired
//! around mutation.
//!
//! The lifecycle is load → mutate → publish:
//!
//! ```
//! use docdelta::{Doc, Entity, Kind, Schema};
//!
//! let schema = Schema::new().field("_id", Kind::Id);
//! let stored = Doc::new()
//!     .with("_id", "507f1f77bcf86cd799439011")
//!     .with("name", "Alice");
//!
//! let mut entity = Entity::from_stored(schema, stored).unwrap();
//! assert!(!entity.is_dirty());
//!
//! entity.set("name", "Bob").unwrap();
//! let changed = entity.dirty();
//! assert_eq!(changed.get_as::<&str>("name"), Some("Bob"));
//! assert!(changed.get("_id").is_none());
//!
//! // ... change publisher issues the partial update, then:
//! entity.sync_original();
//! assert!(!entity.is_dirty());
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::diff::diff;
use crate::doc::{Doc, Path, Value};
use crate::oid::ObjectId;
use crate::snapshot::Snapshot;

mod observer;
mod schema;

pub use observer::Observer;
pub use schema::{Kind, Schema};

/// Conventional name of the primary identifier field.
pub const ID_FIELD: &str = "_id";

/// A document-store entity with dirty tracking.
///
/// The entity owns its live attributes and the snapshot taken at the last
/// sync. One logical owner mutates an entity serially; share one behind a
/// lock if multiple threads must touch it, since [`Entity::sync_original`]
/// replaces the state [`Entity::dirty`] reads.
pub struct Entity {
    schema: Schema,
    attributes: Doc,
    original: Snapshot,
    observers: Vec<Box<dyn Observer>>,
}

impl Entity {
    /// Creates an empty entity with the given schema.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            attributes: Doc::new(),
            original: Snapshot::empty(),
            observers: Vec::new(),
        }
    }

    /// Builds an entity from a stored document and marks it clean.
    ///
    /// This is the load path: every field goes through ordinary assignment
    /// (id normalization and schema coercion included), then the result is
    /// synced so that a freshly loaded entity reports no changes.
    pub fn from_stored(schema: Schema, stored: Doc) -> crate::Result<Self> {
        let mut entity = Self::new(schema);
        entity.set_raw(stored, true)?;
        Ok(entity)
    }

    /// Attaches an observer to be fired around every attribute assignment.
    pub fn observe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    /// Sets an attribute, applying id normalization and schema coercion.
    ///
    /// The key `id` is an alias for [`ID_FIELD`]. A string assigned to the
    /// identifier field is normalized to an [`ObjectId`]; a malformed string
    /// is the one error this method can return. Observers fire before and
    /// after the store, with the post-coercion value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> crate::Result<()> {
        let mut key = key.into();
        if key == "id" {
            key = ID_FIELD.to_string();
        }

        let mut value = value.into();

        // Callers address documents by hex string; the storage layer wants
        // the opaque id.
        if key == ID_FIELD {
            if let Value::Text(s) = &value {
                let id: ObjectId = s.parse()?;
                value = Value::Id(id);
            }
        }

        if let Some(kind) = self.schema.kind_of(&key) {
            value = kind.coerce(value)?;
        }

        for observer in &mut self.observers {
            observer.before_set(&key, &value);
        }

        trace!(key = %key, kind = value.type_name(), "set attribute");
        self.attributes.set(key.as_str(), value.clone());

        for observer in &mut self.observers {
            observer.after_set(&key, &value);
        }

        Ok(())
    }

    /// Sets several attributes from an iterator of key-value pairs.
    pub fn fill<K, V>(&mut self, attributes: impl IntoIterator<Item = (K, V)>) -> crate::Result<()>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        for (key, value) in attributes {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Sets attributes from a raw document, optionally syncing afterwards.
    ///
    /// With `sync` set, the entity comes out clean — this is what a loader
    /// uses after hydrating from storage.
    pub fn set_raw(&mut self, attributes: Doc, sync: bool) -> crate::Result<()> {
        for (key, value) in &attributes {
            self.set(key.as_str(), value.clone())?;
        }
        if sync {
            self.sync_original();
        }
        Ok(())
    }

    /// Gets an attribute by key or dot-path.
    ///
    /// The key `id` is an alias for [`ID_FIELD`].
    pub fn get(&self, key: impl AsRef<Path>) -> Option<&Value> {
        let key = key.as_ref();
        if key.as_str() == "id" {
            return self.attributes.get(ID_FIELD);
        }
        self.attributes.get(key)
    }

    /// Gets a mutable reference to an attribute for in-place mutation.
    ///
    /// Mutation through this reference bypasses observers and coercion; the
    /// change is still picked up by [`Entity::dirty`].
    pub fn get_mut(&mut self, key: impl AsRef<Path>) -> Option<&mut Value> {
        self.attributes.get_mut(key)
    }

    /// The entity's primary identifier, if set and id-typed.
    pub fn id(&self) -> Option<&ObjectId> {
        match self.attributes.get(ID_FIELD) {
            Some(Value::Id(id)) => Some(id),
            _ => None,
        }
    }

    /// Removes an attribute outright, returning its old value.
    ///
    /// A removed attribute disappears from the live document; per the diff
    /// engine's no-deletion property it will *not* appear in
    /// [`Entity::dirty`]. Publishing the removal is the storage glue's
    /// concern (an unset operation), not the changeset's.
    pub fn unset(&mut self, key: impl AsRef<Path>) -> Option<Value> {
        self.attributes.remove(key)
    }

    /// Checks whether a dot-path resolves to a value.
    pub fn has_path(&self, path: impl AsRef<Path>) -> bool {
        self.attributes.get(path).is_some()
    }

    /// The live attribute document.
    pub fn attributes(&self) -> &Doc {
        &self.attributes
    }

    /// The last-synced baseline.
    pub fn original(&self) -> &Doc {
        self.original.as_doc()
    }

    /// The entity's schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Syncs the snapshot with the current attributes.
    ///
    /// Called after load and after every successful write. The prior
    /// snapshot is replaced wholesale.
    pub fn sync_original(&mut self) {
        self.original = Snapshot::capture(&self.attributes);
    }

    /// Syncs a single attribute into the snapshot, leaving the rest as-is.
    pub fn sync_original_field(&mut self, key: impl AsRef<Path>) {
        self.original.capture_field(&self.attributes, key);
    }

    /// The attributes changed since the last sync, as a shape-preserving
    /// changeset. Computed on demand; never persisted.
    pub fn dirty(&self) -> Doc {
        let changed = diff(&self.attributes, self.original.as_doc());
        debug!(changed = changed.len(), "computed dirty attributes");
        changed
    }

    /// Returns true if any attribute changed since the last sync.
    pub fn is_dirty(&self) -> bool {
        !self.dirty().is_empty()
    }

    /// Renders the attributes as JSON, ids as hex strings.
    pub fn to_json_string(&self) -> String {
        self.attributes.to_json_string()
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(Schema::new())
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("schema", &self.schema)
            .field("attributes", &self.attributes)
            .field("original", &self.original)
            .field("observers", &self.observers.len())
            .finish()
    }
}

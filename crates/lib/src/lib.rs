//! docdelta: dirty tracking and minimal changesets for document-store entities.
//!
//! This library implements the change-detection core of a document-database
//! entity layer. An [`Entity`](entity::Entity) owns a live nested document of
//! attributes plus a [`Snapshot`](snapshot::Snapshot) of those attributes as
//! they looked at the last sync. The [`diff`](diff::diff) engine compares the
//! two and produces a minimal, shape-preserving changeset suitable for a
//! partial update against a document store.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Doc`)**: insertion-ordered, string-keyed trees of
//!   [`Value`](doc::Value)s — scalars, object ids, nested documents, and lists.
//! * **Snapshots (`snapshot::Snapshot`)**: an independent deep copy of a
//!   document's fields, captured on explicit sync and used as the diff baseline.
//! * **Diffing (`diff::diff`)**: an asymmetric recursive diff over two
//!   documents. Only fields present in the current document are considered;
//!   a field removed outright is not reported as a deletion.
//! * **Object ids (`oid::ObjectId`)**: immutable 12-byte identifiers with a
//!   24-character hex text form, the document store's primary key type.
//! * **Entities (`entity::Entity`)**: the attribute bag tying the above
//!   together — schema-driven coercion on assignment, observer hooks around
//!   mutation, and the `dirty()` view consumed by a change publisher.
//!
//! The library performs no I/O. Loading raw documents and applying changesets
//! belong to the surrounding storage glue, which this crate only serves.

pub mod diff;
pub mod doc;
pub mod entity;
pub mod oid;
pub mod snapshot;

pub use diff::diff;
pub use doc::{Doc, List, Value};
pub use entity::{Entity, Kind, Observer, Schema};
pub use oid::ObjectId;
pub use snapshot::Snapshot;

/// Result type used throughout the docdelta library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the docdelta library.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Structured document errors from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Structured identifier errors from the oid module
    #[error(transparent)]
    Id(oid::IdError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Doc(_) => "doc",
            Error::Id(_) => "oid",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error came from identifier normalization.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, Error::Id(oid::IdError::InvalidIdentifier { .. }))
    }

    /// Check if this error indicates a value of an unexpected kind.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_type_error(),
            _ => false,
        }
    }
}

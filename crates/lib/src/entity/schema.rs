//! Field schemas and assignment-time coercion.
//!
//! A [`Schema`] maps field names to the value [`Kind`] the entity expects
//! there. It replaces a class-per-field registry with a flat description:
//! the entity consults it on every assignment and coerces the incoming value
//! where a safe conversion exists. Fields not named in the schema accept any
//! value unchanged — the schema guides coercion, it does not validate.

use indexmap::IndexMap;

use crate::doc::Value;
use crate::oid::ObjectId;

/// Expected value kind for a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Kind {
    Bool,
    Int,
    Double,
    Text,
    Id,
    Doc,
    List,
}

impl Kind {
    /// Returns true if the value already has this kind.
    pub fn matches(self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Kind::Bool, Value::Bool(_))
                | (Kind::Int, Value::Int(_))
                | (Kind::Double, Value::Double(_))
                | (Kind::Text, Value::Text(_))
                | (Kind::Id, Value::Id(_))
                | (Kind::Doc, Value::Doc(_))
                | (Kind::List, Value::List(_))
        )
    }

    /// Coerces an incoming value toward this kind where a safe conversion
    /// exists, passing everything else through unchanged.
    ///
    /// - `Id` fields normalize text: a 24-hex-character string becomes an
    ///   [`ObjectId`]; a malformed string is an
    ///   [`InvalidIdentifier`](crate::oid::IdError::InvalidIdentifier) error.
    /// - `Double` fields lift integers, so a wire payload that delivered `1`
    ///   for a double-typed field compares equal to a later `1.0`.
    ///
    /// Null always passes through: absence of a value is not subject to
    /// coercion.
    pub fn coerce(self, value: Value) -> crate::Result<Value> {
        match (self, value) {
            (Kind::Id, Value::Text(s)) => {
                let id: ObjectId = s.parse()?;
                Ok(Value::Id(id))
            }
            (Kind::Double, Value::Int(i)) => Ok(Value::Double(i as f64)),
            (_, value) => Ok(value),
        }
    }
}

/// Mapping from field name to expected value kind.
///
/// ```
/// # use docdelta::entity::{Kind, Schema};
/// let schema = Schema::new()
///     .field("_id", Kind::Id)
///     .field("score", Kind::Double);
///
/// assert_eq!(schema.kind_of("score"), Some(Kind::Double));
/// assert_eq!(schema.kind_of("name"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Schema {
    kinds: IndexMap<String, Kind>,
}

impl Schema {
    /// Creates an empty schema; every field passes through uncoerced.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method declaring the expected kind of a field.
    pub fn field(mut self, name: impl Into<String>, kind: Kind) -> Self {
        self.kinds.insert(name.into(), kind);
        self
    }

    /// The declared kind of a field, if any.
    pub fn kind_of(&self, name: &str) -> Option<Kind> {
        self.kinds.get(name).copied()
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Iterates over declared fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, Kind)> {
        self.kinds.iter().map(|(name, kind)| (name, *kind))
    }
}

impl FromIterator<(String, Kind)> for Schema {
    fn from_iter<T: IntoIterator<Item = (String, Kind)>>(iter: T) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}

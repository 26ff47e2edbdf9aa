//! JSON interop for documents.
//!
//! The document source hands this library deserialized storage payloads;
//! these conversions turn a `serde_json::Value` tree into a [`Doc`] and back.
//! Going out, object ids render as their 24-character hex form. Coming in,
//! hex strings stay `Text` — promoting them to `Id` is the entity layer's
//! job, driven by the schema.

use super::{Doc, DocError, List, Value};

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::Number((*n).into()),
            Value::Double(d) => serde_json::Number::from_f64(*d)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Id(id) => serde_json::Value::String(id.to_hex()),
            Value::Doc(doc) => doc.into(),
            Value::List(list) => {
                serde_json::Value::Array(list.iter().map(serde_json::Value::from).collect())
            }
        }
    }
}

impl From<&Doc> for serde_json::Value {
    fn from(doc: &Doc) -> Self {
        serde_json::Value::Object(
            doc.iter()
                .map(|(key, value)| (key.clone(), value.into()))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                // Fraction or out of i64 range
                None => Value::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect::<List>())
            }
            serde_json::Value::Object(map) => Value::Doc(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Doc>(),
            ),
        }
    }
}

impl Doc {
    /// Builds a document from a deserialized JSON payload.
    ///
    /// The payload must be a JSON object; any other shape is a
    /// [`DocError::TypeMismatch`].
    pub fn from_json(value: serde_json::Value) -> Result<Self, DocError> {
        match Value::from(value) {
            Value::Doc(doc) => Ok(doc),
            other => Err(DocError::TypeMismatch {
                expected: "doc".to_string(),
                actual: other.type_name().to_string(),
            }),
        }
    }

    /// Parses a JSON string into a document.
    pub fn from_json_str(input: &str) -> crate::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Ok(Self::from_json(value)?)
    }

    /// Converts this document to a `serde_json::Value` tree.
    pub fn to_json(&self) -> serde_json::Value {
        self.into()
    }

    /// Converts to a JSON string for human-readable output and export.
    ///
    /// Object ids appear as hex strings; the output is meant for display and
    /// export, not for lossless round-tripping of id-typed fields.
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

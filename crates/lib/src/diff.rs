//! The diff engine.
//!
//! [`diff`] compares an entity's live document against its snapshot baseline
//! and produces the minimal, shape-preserving changeset: a [`Doc`] containing
//! only the fields whose values differ, with nested differences reported as
//! nested sub-documents under their parent key rather than flattened paths.
//!
//! The algorithm is asymmetric: only keys present in the *current* document
//! are considered. A key present in the baseline but removed from the current
//! document is not reported as a deletion; publishing removals is the storage
//! glue's concern (an unset operation), not the changeset's.
//!
//! Diffing is a total function: any pair of documents diffs without error.
//! Kind mismatches (a field that was a document and is now a scalar, say)
//! count as changed and are emitted whole, never raised as faults. This lets
//! dirty-checking run unconditionally before every persistence attempt.

use tracing::trace;

use crate::doc::{Doc, List, Value};

/// Computes the changeset between a current document and its baseline.
///
/// For every key in `current`:
/// - absent from `baseline` → reported with its full current value;
/// - equal to the baseline value (strictly, or numerically equivalent) → skipped;
/// - both nested documents → recursed, reported only if the nested diff is
///   non-empty;
/// - both lists → compared element-wise by index (see module docs);
/// - anything else → reported with its full current value.
///
/// # Examples
///
/// ```
/// # use docdelta::doc::Doc;
/// # use docdelta::diff::diff;
/// let baseline = Doc::new().with("a", Doc::new().with("x", 1).with("y", 2));
/// let current = Doc::new().with("a", Doc::new().with("x", 1).with("y", 3));
///
/// let changed = diff(&current, &baseline);
/// assert_eq!(changed.get_as::<i64>("a.y"), Some(3));
/// assert!(changed.get("a.x").is_none());
/// ```
pub fn diff(current: &Doc, baseline: &Doc) -> Doc {
    let mut changed = Doc::new();

    for (key, value) in current.iter() {
        match baseline.get(key.as_str()) {
            None => {
                changed.insert(key.clone(), value.clone());
            }
            Some(base) => {
                if let Some(delta) = diff_value(value, base) {
                    changed.insert(key.clone(), delta);
                }
            }
        }
    }

    trace!(changed = changed.len(), "computed document diff");
    changed
}

/// Diffs a single field value against its baseline counterpart.
///
/// Returns `None` when the value is unchanged, `Some(delta)` otherwise. The
/// delta is the nested sub-diff for matching composite kinds and the whole
/// current value for everything else.
pub fn diff_value(current: &Value, baseline: &Value) -> Option<Value> {
    if current == baseline || numerically_equivalent(current, baseline) {
        return None;
    }

    match (current, baseline) {
        (Value::Doc(cur), Value::Doc(base)) => {
            let nested = diff(cur, base);
            if nested.is_empty() {
                None
            } else {
                Some(Value::Doc(nested))
            }
        }
        (Value::List(cur), Value::List(base)) => diff_list(cur, base),
        // Scalar change or kind mismatch: the current value wins whole
        _ => Some(current.clone()),
    }
}

/// Diffs two lists element-wise by index.
///
/// Changed and appended positions are reported as a sub-document keyed by
/// decimal index, the shape a document store's positional update paths
/// (`items.2`) expect. A shorter current list reports nothing for the
/// truncated tail, consistent with the no-deletion property.
fn diff_list(current: &List, baseline: &List) -> Option<Value> {
    let mut changed = Doc::new();

    for (index, value) in current.iter().enumerate() {
        match baseline.get(index) {
            None => {
                changed.insert(index.to_string(), value.clone());
            }
            Some(base) => {
                if let Some(delta) = diff_value(value, base) {
                    changed.insert(index.to_string(), delta);
                }
            }
        }
    }

    if changed.is_empty() {
        None
    } else {
        Some(Value::Doc(changed))
    }
}

/// The numeric-equivalence carve-out.
///
/// An integer and a double holding the same number — `Int(1)` against
/// `Double(1.0)` — count as unchanged for diffing purposes, in either
/// direction. Storage layers routinely widen numeric fields on the wire, and
/// a representation change alone must not dirty the field.
pub fn numerically_equivalent(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Int(i), Value::Double(d)) | (Value::Double(d), Value::Int(i)) => *i as f64 == *d,
        _ => false,
    }
}

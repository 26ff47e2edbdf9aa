//! Observer hooks around attribute mutation.
//!
//! Observers are invoked synchronously before and after every attribute
//! assignment on an entity. The default for both hooks is a no-op, and an
//! entity with no observers attached skips dispatch entirely, so the hooks
//! cost nothing unless used.

use crate::doc::Value;

/// Callback hooks fired around attribute mutation.
///
/// ```
/// # use docdelta::{Entity, Observer, Value};
/// #[derive(Default)]
/// struct KeyLogger {
///     keys: Vec<String>,
/// }
///
/// impl Observer for KeyLogger {
///     fn after_set(&mut self, key: &str, _value: &Value) {
///         self.keys.push(key.to_string());
///     }
/// }
///
/// let mut entity = Entity::default();
/// entity.observe(Box::new(KeyLogger::default()));
/// entity.set("name", "Alice").unwrap();
/// ```
// Send keeps Entity movable across threads; access is still serialized
// by whoever owns the entity.
pub trait Observer: Send {
    /// Called before an attribute value is stored.
    ///
    /// The value passed is the final one, after id normalization and schema
    /// coercion.
    fn before_set(&mut self, _key: &str, _value: &Value) {}

    /// Called after an attribute value has been stored.
    fn after_set(&mut self, _key: &str, _value: &Value) {}
}

//! Object identifiers.
//!
//! An [`ObjectId`] is the document store's primary key type: an immutable
//! 12-byte value with a 24-character hexadecimal text form. Ids are compared
//! by value and copied freely; they are the one value kind a snapshot never
//! needs to deep-copy.
//!
//! Identifier normalization — converting a caller-supplied hex string into
//! the opaque id the storage layer expects — lives here as [`ObjectId`]'s
//! `FromStr` impl. It is the only fallible operation in the library's core:
//! a malformed string yields [`IdError::InvalidIdentifier`].

use std::{
    fmt,
    str::FromStr,
    sync::{
        OnceLock,
        atomic::{AtomicU32, Ordering},
    },
};

use rand::RngCore;
use thiserror::Error;

/// Structured error types for identifier handling.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    /// The string form of an identifier was malformed
    #[error("invalid identifier '{value}': expected 24 hexadecimal characters")]
    InvalidIdentifier { value: String },
}

// Conversion from IdError to the main Error type
impl From<IdError> for crate::Error {
    fn from(err: IdError) -> Self {
        crate::Error::Id(err)
    }
}

/// Immutable 12-byte object identifier.
///
/// Layout follows the classic document-store convention: a 4-byte big-endian
/// UNIX timestamp, 5 bytes of per-process randomness, and a 3-byte
/// incrementing counter. Ids generated in one process within one second sort
/// in creation order.
///
/// ```
/// # use docdelta::oid::ObjectId;
/// let id: ObjectId = "507f1f77bcf86cd799439011".parse().unwrap();
/// assert_eq!(id.to_hex(), "507f1f77bcf86cd799439011");
///
/// assert!("not-an-id".parse::<ObjectId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; 12]);

impl ObjectId {
    /// Generates a fresh identifier.
    pub fn new() -> Self {
        let mut bytes = [0u8; 12];

        let seconds = chrono::Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&process_random());

        let count = next_count();
        bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);

        Self(bytes)
    }

    /// Creates an identifier from its raw 12-byte representation.
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 12-byte representation.
    pub fn bytes(&self) -> &[u8; 12] {
        &self.0
    }

    /// Returns the creation timestamp encoded in the id, as UNIX seconds.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Returns the 24-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for ObjectId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 24 {
            return Err(IdError::InvalidIdentifier {
                value: s.to_string(),
            });
        }
        let decoded = hex::decode(s).map_err(|_| IdError::InvalidIdentifier {
            value: s.to_string(),
        })?;
        let mut bytes = [0u8; 12];
        bytes.copy_from_slice(&decoded);
        Ok(Self(bytes))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({})", self.to_hex())
    }
}

impl serde::Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::Deserialize;
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The 5 random bytes shared by all ids generated in this process.
fn process_random() -> [u8; 5] {
    static RANDOM: OnceLock<[u8; 5]> = OnceLock::new();
    *RANDOM.get_or_init(|| {
        let mut bytes = [0u8; 5];
        rand::thread_rng().fill_bytes(&mut bytes);
        bytes
    })
}

/// Next value of the process-wide id counter, randomly seeded.
fn next_count() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    COUNTER
        .get_or_init(|| AtomicU32::new(rand::thread_rng().next_u32()))
        .fetch_add(1, Ordering::Relaxed)
}

//! Data storage utilities
//!
//! Saving/loading data to/from disk through interchangeable serialization
//! backends, plus general operations on in-memory mappings.

pub mod backend;

use std::fmt;

use thiserror::Error;

pub use backend::{Backend, BincodeBackend, JsonBackend, TomlBackend};

/// Errors that can occur in storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("TOML encode error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("TOML decode error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("could not find key corresponding to value: {0}")]
    KeyNotFound(String),
}

/// Find the key of a mapping given one of its values.
///
/// Scans `(key, value)` pairs in the mapping's own iteration order and
/// returns the first key whose value compares equal to `value`. Works with
/// any map type that yields pair references (`BTreeMap`, `HashMap`, slices
/// of pairs).
///
/// # Errors
///
/// Returns [`StorageError::KeyNotFound`] when no value matches.
pub fn get_key<'a, K, V, M>(map: M, value: &V) -> Result<&'a K, StorageError>
where
    K: 'a,
    V: PartialEq + fmt::Debug + 'a,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    map.into_iter()
        .find(|(_, v)| *v == value)
        .map(|(k, _)| k)
        .ok_or_else(|| StorageError::KeyNotFound(format!("{value:?}")))
}

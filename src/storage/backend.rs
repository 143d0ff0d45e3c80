//! Serialization backends
//!
//! Three interchangeable save/load strategies behind one trait. They share
//! an identical contract and differ only in which object graphs they can
//! represent; the caller picks one and must read a file with the same
//! backend that wrote it.
//!
//! Rough guide:
//! - [`JsonBackend`] for basic data structures you may want to inspect by
//!   hand; string-keyed maps and finite floats only.
//! - [`TomlBackend`] for config-shaped data (a top-level table).
//! - [`BincodeBackend`] for everything else: compact binary, non-string map
//!   keys, NaN/infinity, nested enum data such as expression trees.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::StorageError;

/// A file serialization strategy with a save/load pair.
///
/// For every value a backend can represent, `load` after `save` on the
/// same path reproduces an equal value. Behavior across mismatched
/// backends is undefined.
pub trait Backend {
    /// Serialize `data` to the file at `path`, replacing any existing file.
    fn save<T, P>(&self, path: P, data: &T) -> Result<(), StorageError>
    where
        T: Serialize,
        P: AsRef<Path>;

    /// Deserialize a value from the file at `path`.
    fn load<T, P>(&self, path: P) -> Result<T, StorageError>
    where
        T: DeserializeOwned,
        P: AsRef<Path>;
}

/// Human-readable JSON files. Limited to basic data structures.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend;

impl Backend for JsonBackend {
    fn save<T, P>(&self, path: P, data: &T) -> Result<(), StorageError>
    where
        T: Serialize,
        P: AsRef<Path>,
    {
        let file = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(file, data)?;
        debug!(path = %path.as_ref().display(), "saved JSON data");
        Ok(())
    }

    fn load<T, P>(&self, path: P) -> Result<T, StorageError>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let file = File::open(path.as_ref())?;
        let data = serde_json::from_reader(file)?;
        Ok(data)
    }
}

/// TOML files for config-shaped data. The value must serialize to a
/// top-level table with string keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlBackend;

impl Backend for TomlBackend {
    fn save<T, P>(&self, path: P, data: &T) -> Result<(), StorageError>
    where
        T: Serialize,
        P: AsRef<Path>,
    {
        let content = toml::to_string_pretty(data)?;
        std::fs::write(path.as_ref(), content)?;
        debug!(path = %path.as_ref().display(), "saved TOML data");
        Ok(())
    }

    fn load<T, P>(&self, path: P) -> Result<T, StorageError>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let content = std::fs::read_to_string(path.as_ref())?;
        let data = toml::from_str(&content)?;
        Ok(data)
    }
}

/// Compact binary files covering the broadest set of serde object graphs,
/// including symbolic expression trees and model parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct BincodeBackend;

impl Backend for BincodeBackend {
    fn save<T, P>(&self, path: P, data: &T) -> Result<(), StorageError>
    where
        T: Serialize,
        P: AsRef<Path>,
    {
        let bytes = bincode::serialize(data)?;
        std::fs::write(path.as_ref(), bytes)?;
        debug!(path = %path.as_ref().display(), "saved binary data");
        Ok(())
    }

    fn load<T, P>(&self, path: P) -> Result<T, StorageError>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let bytes = std::fs::read(path.as_ref())?;
        let data = bincode::deserialize(&bytes)?;
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn sample_map() -> BTreeMap<String, Vec<f64>> {
        let mut map = BTreeMap::new();
        map.insert("position".to_string(), vec![0.1, 0.2, 0.3]);
        map.insert("velocity".to_string(), vec![-1.0, 0.0, 1.0]);
        map
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.json");

        let data = sample_map();
        JsonBackend.save(&path, &data).unwrap();
        let loaded: BTreeMap<String, Vec<f64>> = JsonBackend.load(&path).unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.toml");

        let data = sample_map();
        TomlBackend.save(&path, &data).unwrap();
        let loaded: BTreeMap<String, Vec<f64>> = TomlBackend.load(&path).unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_bincode_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");

        let data = sample_map();
        BincodeBackend.save(&path, &data).unwrap();
        let loaded: BTreeMap<String, Vec<f64>> = BincodeBackend.load(&path).unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_bincode_handles_non_string_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("indexed.bin");

        let mut data = BTreeMap::new();
        data.insert(3_u32, "marker".to_string());
        data.insert(17_u32, "joint".to_string());

        BincodeBackend.save(&path, &data).unwrap();
        let loaded: BTreeMap<u32, String> = BincodeBackend.load(&path).unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.json");

        let err = JsonBackend.load::<BTreeMap<String, f64>, _>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }

    #[test]
    fn test_load_malformed_file_propagates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.json");
        std::fs::write(&path, b"not json at all").unwrap();

        let err = JsonBackend.load::<BTreeMap<String, f64>, _>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }
}

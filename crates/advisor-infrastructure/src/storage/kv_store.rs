//! File-backed key-value store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use advisor_core::error::Result;
use advisor_core::state::KeyValueStore;
use tracing::debug;

use super::atomic_toml::AtomicTomlFile;

type Entries = BTreeMap<String, String>;

/// Key-value store kept as a flat table of strings in one TOML file.
///
/// Every write is a locked read-modify-write of the whole file, so keys
/// written by other handles are preserved. A file that no longer parses is
/// set aside as `storage.toml.bak` on the next write and the table restarts
/// empty.
pub struct TomlKeyValueStore {
    file: AtomicTomlFile<Entries>,
}

impl TomlKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicTomlFile::new(path),
        }
    }
}

impl KeyValueStore for TomlKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .file
            .load()?
            .and_then(|mut entries| entries.remove(key)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.file.update(Entries::new(), |entries| {
            entries.insert(key.to_string(), value.to_string());
        })?;
        debug!(key, path = %self.file.path().display(), "Stored value");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlKeyValueStore::new(temp_dir.path().join("storage.toml"));

        assert_eq!(store.get("language").unwrap(), None);

        store.set("language", "ar").unwrap();
        store.set("selectedProducts", r#"[{"id":1}]"#).unwrap();
        store.set("language", "en").unwrap();

        assert_eq!(store.get("language").unwrap().as_deref(), Some("en"));
        assert_eq!(
            store.get("selectedProducts").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn test_values_survive_a_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.toml");

        TomlKeyValueStore::new(path.clone()).set("language", "ar").unwrap();

        let reopened = TomlKeyValueStore::new(path);
        assert_eq!(reopened.get("language").unwrap().as_deref(), Some("ar"));
    }

    #[test]
    fn test_write_recovers_from_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.toml");
        fs::write(&path, "selectedProducts = [[[ garbage").unwrap();

        let store = TomlKeyValueStore::new(path.clone());
        assert!(store.get("language").is_err());

        store.set("language", "ar").unwrap();
        store.set("selectedProducts", r#"[{"id":1}]"#).unwrap();

        let reopened = TomlKeyValueStore::new(path);
        assert_eq!(reopened.get("language").unwrap().as_deref(), Some("ar"));
        assert_eq!(
            reopened.get("selectedProducts").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
        assert!(temp_dir.path().join("storage.toml.bak").exists());
    }
}

//! Atomic TOML file operations.
//!
//! Writes go to a sibling temp file which is fsynced and renamed over the
//! target, so readers see either the old or the new document. Read-modify-write
//! cycles hold an exclusive `fs2` lock on a sibling `.lock` file.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use advisor_core::error::{AdvisorError, Result};
use serde::{Serialize, de::DeserializeOwned};
use tracing::warn;

/// A handle to a TOML document on disk.
pub struct AtomicTomlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicTomlFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document.
    ///
    /// A missing or blank file is `Ok(None)`; unparsable content is an error.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = toml::from_str(&content)?;
        Ok(Some(data))
    }

    /// Replaces the document atomically.
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Loads, mutates and saves the document under an exclusive lock.
    ///
    /// `default_value` stands in for a missing file. An unparsable document is
    /// moved to `<name>.bak` and replaced by `default_value`.
    pub fn update<F>(&self, default_value: T, f: F) -> Result<()>
    where
        F: FnOnce(&mut T),
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut data = match self.load() {
            Ok(loaded) => loaded.unwrap_or(default_value),
            Err(e) if e.is_serialization() => {
                let backup = self.backup_path()?;
                warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "Unreadable document set aside"
                );
                fs::rename(&self.path, &backup)?;
                default_value
            }
            Err(e) => return Err(e),
        };
        f(&mut data);
        self.save(&data)
    }

    /// Sibling path where an unreadable document is kept.
    fn backup_path(&self) -> Result<PathBuf> {
        let (parent, file_name) = self.split_path()?;
        Ok(parent.join(format!("{}.bak", file_name)))
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let (parent, file_name) = self.split_path()?;
        Ok(parent.join(format!(".{}.tmp", file_name)))
    }

    fn split_path(&self) -> Result<(&Path, String)> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| AdvisorError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| AdvisorError::io("Path has no file name"))?;

        Ok((parent, file_name.to_string_lossy().into_owned()))
    }
}

/// Exclusive lock released on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| AdvisorError::io(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Best effort; the lock itself goes away with the handle.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Counter {
        label: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicTomlFile::<Counter>::new(temp_dir.path().join("counter.toml"));

        let value = Counter {
            label: "visits".to_string(),
            count: 3,
        };
        file.save(&value).unwrap();

        assert_eq!(file.load().unwrap(), Some(value));
    }

    #[test]
    fn test_missing_and_blank_files_load_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.toml");
        let file = AtomicTomlFile::<Counter>::new(path.clone());
        assert!(file.load().unwrap().is_none());

        fs::write(&path, "   \n").unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.toml");
        fs::write(&path, "count = [[[").unwrap();

        let file = AtomicTomlFile::<Counter>::new(path);
        let err = file.load().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_update_creates_then_modifies() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("counter.toml");
        let file = AtomicTomlFile::<Counter>::new(path.clone());

        file.update(Counter::default(), |c| c.count += 10).unwrap();
        file.update(Counter::default(), |c| c.count += 5).unwrap();

        assert_eq!(file.load().unwrap().unwrap().count, 15);
        assert!(!temp_dir.path().join("nested").join(".counter.toml.tmp").exists());
        assert!(!path.with_extension("lock").exists());
    }

    #[test]
    fn test_update_sets_corrupt_file_aside() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.toml");
        fs::write(&path, "count = [[[").unwrap();

        let file = AtomicTomlFile::<Counter>::new(path.clone());
        file.update(Counter::default(), |c| c.count += 1).unwrap();

        assert_eq!(file.load().unwrap().unwrap().count, 1);
        let backup = temp_dir.path().join("counter.toml.bak");
        assert_eq!(file.backup_path().unwrap(), backup);
        assert_eq!(fs::read_to_string(backup).unwrap(), "count = [[[");
        assert!(!path.with_extension("lock").exists());
    }
}

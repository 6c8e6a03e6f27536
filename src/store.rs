//! Persistent settings storage.
//!
//! Configuration lives under absolute-style store keys such as
//! `/settings/act/DataTemplate.json`. [`FileStore`] maps those keys onto a
//! root directory on the local filesystem; hosts with other storage (flash,
//! key-value stores) implement [`SettingsStore`] themselves.

use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Error type for settings store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Durable key-to-text storage for serialized settings.
pub trait SettingsStore {
    /// Whether a document exists at `path`.
    fn exists(&self, path: &str) -> bool;

    /// Read the document at `path`.
    fn read(&self, path: &str) -> Result<String, StoreError>;

    /// Durably write `contents` at `path`, replacing any previous document.
    fn write(&mut self, path: &str, contents: &str) -> Result<(), StoreError>;
}

/// Filesystem-backed settings store.
///
/// Store keys are interpreted relative to `root` (the leading `/` is
/// stripped), so `/settings/act/x.json` lands at `<root>/settings/act/x.json`.
/// Parent directories are created on first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

impl SettingsStore for FileStore {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&self, path: &str) -> Result<String, StoreError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn write(&mut self, path: &str, contents: &str) -> Result<(), StoreError> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent()
            && let Err(error) = fs::create_dir_all(parent)
        {
            warn!(path, %error, "failed to create settings directory");
            return Err(error.into());
        }
        fs::write(&target, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_document_does_not_exist() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(!store.exists("/settings/act/DataTemplate.json"));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store
            .write("/settings/act/DataTemplate.json", "{\"template_data\":\"x\"}")
            .unwrap();
        assert!(store.exists("/settings/act/DataTemplate.json"));
        assert_eq!(
            store.read("/settings/act/DataTemplate.json").unwrap(),
            "{\"template_data\":\"x\"}"
        );
    }

    #[test]
    fn store_keys_map_under_the_root_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.write("/settings/act/a.json", "a").unwrap();
        let on_disk = dir.path().join("settings/act/a.json");
        assert_eq!(fs::read_to_string(on_disk).unwrap(), "a");
    }

    #[test]
    fn write_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.write("/settings/act/a.json", "first").unwrap();
        store.write("/settings/act/a.json", "second").unwrap();
        assert_eq!(store.read("/settings/act/a.json").unwrap(), "second");
    }

    #[test]
    fn read_of_missing_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(store.read("/settings/act/missing.json").is_err());
    }
}

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

pub mod weights;

/// String key-value storage, shaped like browser local storage
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites any previous value
    fn set(&mut self, key: &str, value: String) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Keeps every entry in one JSON object on disk.
/// The file is re-read on each access and rewritten on each change.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read store file: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse store file: {}", self.path.display()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create store directory: {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write store file: {}", self.path.display()))
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        let mut entries = self.read_entries().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable store: {e:#}");
            BTreeMap::new()
        });
        entries.insert(key.to_owned(), value);
        self.write_entries(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("lotto-store-{}", uuid::Uuid::new_v4()))
            .join("store.json")
    }

    #[test]
    fn test_file_store_round_trip() -> Result<()> {
        let path = temp_path();
        let mut store = JsonFileStore::new(&path);
        assert_eq!(store.get("missing")?, None);

        store.set("a", "1".to_owned())?;
        store.set("b", "2".to_owned())?;
        store.set("a", "3".to_owned())?;

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get("a")?, Some("3".to_owned()));
        assert_eq!(reopened.get("b")?, Some("2".to_owned()));

        store.remove("a")?;
        assert_eq!(store.get("a")?, None);
        assert_eq!(store.get("b")?, Some("2".to_owned()));

        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir)?;
        }
        Ok(())
    }

    #[test]
    fn test_corrupt_file_reported_then_replaced() -> Result<()> {
        let path = temp_path();
        let mut store = JsonFileStore::new(&path);
        store.set("seed", "x".to_owned())?;
        fs::write(&path, "{ not json")?;

        assert!(store.get("seed").is_err());
        store.set("fresh", "y".to_owned())?;
        assert_eq!(store.get("fresh")?, Some("y".to_owned()));
        assert_eq!(store.get("seed")?, None);

        if let Some(dir) = path.parent() {
            fs::remove_dir_all(dir)?;
        }
        Ok(())
    }

    #[test]
    fn test_memory_store() -> Result<()> {
        let mut store = MemoryStore::new();
        store.set("k", "v".to_owned())?;
        assert_eq!(store.get("k")?, Some("v".to_owned()));
        store.remove("k")?;
        assert_eq!(store.get("k")?, None);
        Ok(())
    }
}

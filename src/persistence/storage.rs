//! Key-value storage backends
//!
//! Writes are fire-and-forget: a failed write is logged and otherwise
//! ignored, the same way LocalStorage quota errors are.

use std::collections::HashMap;

/// String key → string value store backing the durable slots
pub trait StoragePort {
    /// Most recent successful write for `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite `key`
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store (tests, headless use)
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// One `<key>.json` file per slot in a data directory (native only)
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StoragePort for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        let path = self.path_for(key);
        let result = std::fs::create_dir_all(&self.dir).and_then(|_| std::fs::write(&path, value));
        if let Err(e) = result {
            log::warn!("Failed to write {}: {}", path.display(), e);
        }
    }
}

/// `window.localStorage` (WASM only)
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Grab the window's LocalStorage; if unavailable (private mode,
    /// sandboxed iframe) every read is absent and writes are dropped
    pub fn new() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, board will not persist");
        }
        Self { storage }
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl StoragePort for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::warn!("LocalStorage write failed for {}", key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_last_write_wins() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);
        storage.set("k", "one");
        storage.set("k", "two");
        assert_eq!(storage.get("k").as_deref(), Some("two"));
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("nested"));
        assert_eq!(storage.get("slot"), None);
        storage.set("slot", "{\"Yes\":[]}");
        assert_eq!(storage.get("slot").as_deref(), Some("{\"Yes\":[]}"));
        assert!(dir.path().join("nested").join("slot.json").exists());
    }
}

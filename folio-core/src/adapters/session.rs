//! Session storage adapters
//!
//! `FileSessionStore` keeps the token in `session.json` inside the folio
//! directory so it survives between commands:
//! ```json
//! { "accessToken": "<token>" }
//! ```

use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use fs2::FileExt;

use crate::domain::result::{Error, Result};
use crate::ports::{SessionStore, ACCESS_TOKEN_KEY};

/// Token persisted as JSON on disk
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub const FILE_NAME: &'static str = "session.json";

    /// Store in `<folio_dir>/session.json`
    pub fn new(folio_dir: &Path) -> Self {
        Self {
            path: folio_dir.join(Self::FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole session map. Missing or unreadable files are empty.
    fn read_entries(&self) -> HashMap<String, serde_json::Value> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    fn write_entries(&self, entries: &HashMap<String, serde_json::Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file: File = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.path)?;

        file.lock_exclusive()
            .map_err(|e| Error::Other(format!("Failed to lock session file: {}", e)))?;

        let result = (|| -> Result<()> {
            let content = serde_json::to_string_pretty(entries)?;
            file.set_len(0)?;
            let mut writer = &file;
            writer.write_all(content.as_bytes())?;
            writer.flush()?;
            Ok(())
        })();

        let _ = FileExt::unlock(&file);
        result
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Result<Option<String>> {
        let token = self
            .read_entries()
            .get(ACCESS_TOKEN_KEY)
            .and_then(|v| v.as_str())
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Ok(token)
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut entries = self.read_entries();
        entries.insert(
            ACCESS_TOKEN_KEY.to_string(),
            serde_json::Value::String(token.to_string()),
        );
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut entries = self.read_entries();
        entries.remove(ACCESS_TOKEN_KEY);
        self.write_entries(&entries)
    }
}

/// Token kept in memory only
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Result<Option<String>> {
        let guard = self
            .token
            .lock()
            .map_err(|e| Error::Other(format!("Lock poisoned: {}", e)))?;
        Ok(guard.clone().filter(|t| !t.is_empty()))
    }

    fn set_token(&self, token: &str) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| Error::Other(format!("Lock poisoned: {}", e)))?;
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|e| Error::Other(format!("Lock poisoned: {}", e)))?;
        *guard = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        assert_eq!(store.token().unwrap(), None);

        store.set_token("abc123").unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("abc123"));

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["accessToken"], "abc123");

        // Visible to a second store on the same directory
        let other = FileSessionStore::new(dir.path());
        assert_eq!(other.token().unwrap().as_deref(), Some("abc123"));

        store.clear().unwrap();
        assert_eq!(other.token().unwrap(), None);
    }

    #[test]
    fn test_shorter_token_overwrites_longer() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());

        store.set_token("a-very-long-token-value").unwrap();
        store.set_token("short").unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_corrupt_file_means_no_token() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("session.json"), "{not json").unwrap();

        let store = FileSessionStore::new(dir.path());
        assert_eq!(store.token().unwrap(), None);

        store.set_token("fresh").unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_clear_without_file() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::new(dir.path());
        store.clear().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_memory_store() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token().unwrap(), None);
        store.set_token("t").unwrap();
        assert_eq!(store.token().unwrap().as_deref(), Some("t"));
        store.clear().unwrap();
        assert_eq!(store.token().unwrap(), None);

        let store = MemorySessionStore::with_token("");
        assert_eq!(store.token().unwrap(), None);
    }
}

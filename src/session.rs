//! Session token storage.
//!
//! Owns the lifecycle of the bearer token in `~/.shelf/.session.json`.
//! All reads and writes of the token go through [`SessionStore`]; no other
//! component touches the file directly.
//!
//! None of these operations can fail from the caller's perspective: if the
//! underlying storage is unavailable, reads degrade to "absent" and writes
//! are silently dropped.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

/// The session directory name.
const SESSION_DIR: &str = ".shelf";

/// The session file name.
const SESSION_FILE: &str = ".session.json";

/// On-disk session state. Only the token is persisted; user and book data
/// are transient view state and never written here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
struct SessionFile {
    token: Option<String>,
}

/// Persistent store for the authentication token.
///
/// Cheap to clone; clones refer to the same underlying file.
#[derive(Debug, Clone)]
pub struct SessionStore {
    /// Path to the session file. `None` means storage is unavailable and
    /// the store operates in degraded (always logged out) mode.
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Create a store rooted at the user's home directory.
    ///
    /// Falls back to a degraded store when the home directory cannot be
    /// determined.
    pub fn new() -> Self {
        let path = dirs::home_dir().map(|home| home.join(SESSION_DIR).join(SESSION_FILE));
        Self { path }
    }

    /// Create a store backed by an explicit file path. Used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Create a store with no backing storage. Reads return `None`, writes
    /// are no-ops.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    /// Persist the token, overwriting any previous value.
    ///
    /// The token is treated as opaque; no shape validation.
    pub fn set_token(&self, token: &str) {
        self.write(SessionFile {
            token: Some(token.to_string()),
        });
    }

    /// The current token, or `None` when logged out or storage is
    /// unavailable.
    pub fn token(&self) -> Option<String> {
        self.read().token
    }

    /// Remove the stored token. Idempotent; clearing an absent token is a
    /// no-op.
    pub fn clear(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if path.exists() {
            let _ = fs::remove_file(path);
        }
    }

    /// Whether a token is present. This is a presence check only; the token
    /// may already have been rejected by the backend.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    fn read(&self) -> SessionFile {
        let Some(path) = &self.path else {
            return SessionFile::default();
        };
        if !path.exists() {
            return SessionFile::default();
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return SessionFile::default(),
        };

        serde_json::from_reader(BufReader::new(file)).unwrap_or_default()
    }

    fn write(&self, session: SessionFile) {
        let Some(path) = &self.path else {
            return;
        };

        if let Some(parent) = path.parent() {
            if !parent.exists() && fs::create_dir_all(parent).is_err() {
                return;
            }
        }

        let file = match File::create(path) {
            Ok(f) => f,
            Err(_) => return,
        };

        let mut writer = BufWriter::new(file);
        if serde_json::to_writer_pretty(&mut writer, &session).is_ok() {
            let _ = writer.flush();
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> SessionStore {
        SessionStore::with_path(temp_dir.path().join(SESSION_DIR).join(SESSION_FILE))
    }

    #[test]
    fn test_token_absent_initially() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        assert_eq!(store.token(), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_set_then_get_token() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store.set_token("abc-123");
        assert_eq!(store.token(), Some("abc-123".to_string()));
        assert!(store.is_logged_in());
    }

    #[test]
    fn test_set_token_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store.set_token("first");
        store.set_token("second");
        assert_eq!(store.token(), Some("second".to_string()));
    }

    #[test]
    fn test_clear_removes_token() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        store.set_token("abc-123");
        store.clear();
        assert_eq!(store.token(), None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_clear_absent_token_is_noop() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        store.clear();
        store.clear();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_creates_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        assert!(!temp_dir.path().join(SESSION_DIR).exists());
        store.set_token("abc-123");
        assert!(temp_dir.path().join(SESSION_DIR).join(SESSION_FILE).exists());
    }

    #[test]
    fn test_corrupt_file_reads_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let path = temp_dir.path().join(SESSION_DIR).join(SESSION_FILE);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not valid json").unwrap();

        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_disabled_store_degrades_silently() {
        let store = SessionStore::disabled();

        store.set_token("abc-123");
        assert_eq!(store.token(), None);
        assert!(!store.is_logged_in());
        store.clear();
    }

    #[test]
    fn test_clones_share_storage() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        let clone = store.clone();

        store.set_token("shared");
        assert_eq!(clone.token(), Some("shared".to_string()));

        clone.clear();
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_survives_reload() {
        let temp_dir = TempDir::new().unwrap();
        test_store(&temp_dir).set_token("persisted");

        // A fresh store pointed at the same file sees the token
        let reloaded = test_store(&temp_dir);
        assert_eq!(reloaded.token(), Some("persisted".to_string()));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let path = temp_dir.path().join(SESSION_DIR).join(SESSION_FILE);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"token":"t1","legacy_field":true}"#).unwrap();

        assert_eq!(store.token(), Some("t1".to_string()));
    }
}

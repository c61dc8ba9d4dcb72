//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that persists each entry as
//! a file. It is used on native targets to retain the session across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session/
//!     ├── authToken          # envelope JSON written by SessionStore
//!     └── userData
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/<app>/` |
//! | Linux | `~/.local/share/<app>/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\<app>\` |
//!
//! I/O errors are logged and otherwise swallowed: an unwritable directory behaves
//! like an empty store, which the sign-in flow detects when it verifies the session.

use std::path::PathBuf;

use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entries_dir(&self) -> PathBuf {
        self.base.join("session")
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.entries_dir().join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str, _max_age: Option<u64>) {
        if let Err(e) = std::fs::create_dir_all(self.entries_dir()) {
            tracing::error!("Failed to create {}: {}", self.entries_dir().display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::error!("Failed to write session entry {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use crate::UserRecord;

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let session = SessionStore::new(FileStore::new(dir.path().to_path_buf()));
        session.set_auth_token("abc");
        session.set_user_data(&UserRecord::new("alice")).unwrap();

        // Re-open from same directory
        let reopened = SessionStore::new(FileStore::new(dir.path().to_path_buf()));
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.get_user_data().unwrap().username, "alice");

        reopened.clear_auth_cookies();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_unwritable_base_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let session = SessionStore::new(FileStore::new(blocker));
        session.set_auth_token("abc");
        assert!(session.get_auth_token().is_none());
        assert!(!session.is_authenticated());
    }
}

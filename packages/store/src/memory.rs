use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned map is still a valid map.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str, _max_age: Option<u64>) {
        self.entries().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionStore, AUTH_TOKEN_KEY, USER_DATA_KEY};
    use crate::UserRecord;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("theme").is_none());

        store.set("theme", "dark", None);
        assert_eq!(store.get("theme").as_deref(), Some("dark"));

        store.remove("theme");
        assert!(store.get("theme").is_none());
        store.remove("theme");
    }

    #[test]
    fn test_session_touches_only_its_keys() {
        let store = MemoryStore::new();
        store.set("theme", "dark", None);

        let session = SessionStore::new(store.clone());
        session.set_auth_token("abc");
        session.set_user_data(&UserRecord::new("alice")).unwrap();
        assert!(store.get(AUTH_TOKEN_KEY).is_some());
        assert!(store.get(USER_DATA_KEY).is_some());

        session.clear_auth_cookies();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert!(store.get(AUTH_TOKEN_KEY).is_none());
        assert!(store.get(USER_DATA_KEY).is_none());
    }
}

//! # Session store: persisted authentication state
//!
//! [`SessionStore`] owns the two persisted entries that make up a client session:
//! the auth token (key [`AUTH_TOKEN_KEY`]) and the serialized user record (key
//! [`USER_DATA_KEY`]). All reads and writes go through the [`KeyValueStore`] trait so
//! the same logic works against browser cookies ([`crate::CookieStore`]), a
//! directory of files ([`crate::FileStore`]) or memory ([`crate::MemoryStore`]).
//!
//! ## Envelope
//!
//! Every value is wrapped in a small JSON envelope before it reaches the backend:
//!
//! ```json
//! { "value": "<payload>", "expires_at": 1767225600 }
//! ```
//!
//! `expires_at` is a unix timestamp in seconds, or `null` for entries that live as
//! long as the backend keeps them. Expired entries read as absent and are removed.
//!
//! ## Degradation
//!
//! Reads never fail. A missing key, an expired entry, an unparseable envelope or a
//! user record that no longer deserializes all read as `None`.

use serde::{Deserialize, Serialize};

use crate::models::UserRecord;

/// Key for the auth token entry.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Key for the serialized user record entry.
pub const USER_DATA_KEY: &str = "userData";

const SECS_PER_DAY: u64 = 60 * 60 * 24;

/// String-keyed persistence used by [`SessionStore`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`. `max_age` lets backends with native expiry
    /// (cookies) drop the entry on their own.
    fn set(&self, key: &str, value: &str, max_age: Option<u64>);
    fn remove(&self, key: &str);
}

/// How long a written session stays valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionLifetime {
    /// No expiry enforced by the store.
    Browser,
    Days(u32),
}

impl SessionLifetime {
    fn max_age_secs(self) -> Option<u64> {
        match self {
            SessionLifetime::Browser => None,
            SessionLifetime::Days(days) => Some(u64::from(days) * SECS_PER_DAY),
        }
    }
}

impl Default for SessionLifetime {
    fn default() -> Self {
        SessionLifetime::Days(7)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to serialize user record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A snapshot of the persisted session.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<UserRecord>,
}

#[derive(Serialize, Deserialize)]
struct Envelope {
    value: String,
    expires_at: Option<i64>,
}

/// Typed access to the persisted (token, user) pair.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    backend: S,
    lifetime: SessionLifetime,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            lifetime: SessionLifetime::default(),
        }
    }

    /// Builder method to set how long written entries stay valid.
    pub fn with_lifetime(mut self, lifetime: SessionLifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    pub fn lifetime(&self) -> SessionLifetime {
        self.lifetime
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn set_auth_token(&self, token: &str) {
        self.write(AUTH_TOKEN_KEY, token);
    }

    pub fn set_user_data(&self, user: &UserRecord) -> Result<(), SessionError> {
        let json = serde_json::to_string(user)?;
        self.write(USER_DATA_KEY, &json);
        Ok(())
    }

    pub fn get_auth_token(&self) -> Option<String> {
        self.read(AUTH_TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn get_user_data(&self) -> Option<UserRecord> {
        let json = self.read(USER_DATA_KEY)?;
        match serde_json::from_str(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Discarding unreadable user data: {}", e);
                None
            }
        }
    }

    /// Remove both session entries. Safe to call when nothing is stored.
    pub fn clear_auth_cookies(&self) {
        self.backend.remove(AUTH_TOKEN_KEY);
        self.backend.remove(USER_DATA_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.get_auth_token().is_some() && self.get_user_data().is_some()
    }

    /// The current session, if a token is stored.
    pub fn session(&self) -> Option<Session> {
        let token = self.get_auth_token()?;
        Some(Session {
            token,
            user: self.get_user_data(),
        })
    }

    fn write(&self, key: &str, value: &str) {
        let max_age = self.lifetime.max_age_secs();
        let envelope = Envelope {
            value: value.to_string(),
            expires_at: max_age.map(|secs| current_timestamp() + secs as i64),
        };
        // Serializing a struct of a string and an integer cannot fail.
        let Ok(raw) = serde_json::to_string(&envelope) else {
            return;
        };
        self.backend.set(key, &raw, max_age);
    }

    fn read(&self, key: &str) -> Option<String> {
        let raw = self.backend.get(key)?;
        let Ok(envelope) = serde_json::from_str::<Envelope>(&raw) else {
            tracing::warn!("Discarding malformed session entry {}", key);
            return None;
        };
        if envelope
            .expires_at
            .is_some_and(|expires_at| expires_at <= current_timestamp())
        {
            tracing::debug!("Session entry {} expired", key);
            self.backend.remove(key);
            return None;
        }
        Some(envelope.value)
    }
}

/// Current unix time in seconds.
pub(crate) fn current_timestamp() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn store() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    fn alice() -> UserRecord {
        UserRecord {
            id: Some("u-1".to_string()),
            email: Some("alice@example.com".to_string()),
            role: Some("Client".to_string()),
            ..UserRecord::new("alice")
        }
    }

    #[test]
    fn test_authenticated_requires_both_entries() {
        let session = store();
        assert!(!session.is_authenticated());

        session.set_auth_token("abc");
        assert!(!session.is_authenticated());

        session.set_user_data(&alice()).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.get_auth_token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_user_only_is_not_authenticated() {
        let session = store();
        session.set_user_data(&alice()).unwrap();
        assert!(!session.is_authenticated());
        assert!(session.session().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let session = store();
        session.clear_auth_cookies();
        assert!(!session.is_authenticated());

        session.set_auth_token("abc");
        session.set_user_data(&alice()).unwrap();
        session.clear_auth_cookies();
        assert!(!session.is_authenticated());
        session.clear_auth_cookies();
        assert!(!session.is_authenticated());
        assert!(session.get_auth_token().is_none());
        assert!(session.get_user_data().is_none());
    }

    #[test]
    fn test_user_data_roundtrip() {
        let session = store();
        let mut user = alice();
        user.extra
            .insert("projects".to_string(), serde_json::json!(["Galle Smart Bridge"]));
        user.extra
            .insert("preferences".to_string(), serde_json::json!({"units": "metric"}));

        session.set_user_data(&user).unwrap();
        assert_eq!(session.get_user_data(), Some(user));
    }

    #[test]
    fn test_corrupt_user_data_reads_as_absent() {
        let session = store();
        session.set_auth_token("abc");
        session
            .backend()
            .set(USER_DATA_KEY, r#"{"value":"{not json","expires_at":null}"#, None);
        assert!(session.get_user_data().is_none());
        assert!(!session.is_authenticated());

        session.backend().set(USER_DATA_KEY, "garbage", None);
        assert!(session.get_user_data().is_none());
    }

    #[test]
    fn test_empty_token_is_absent() {
        let session = store();
        session.set_auth_token("");
        session.set_user_data(&alice()).unwrap();
        assert!(session.get_auth_token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_expired_entry_is_removed() {
        let session = store();
        let stale = serde_json::json!({
            "value": "abc",
            "expires_at": current_timestamp() - 1,
        })
        .to_string();
        session.backend().set(AUTH_TOKEN_KEY, &stale, None);

        assert!(session.get_auth_token().is_none());
        assert!(session.backend().get(AUTH_TOKEN_KEY).is_none());
    }

    #[test]
    fn test_browser_lifetime_has_no_expiry() {
        let session = store().with_lifetime(SessionLifetime::Browser);
        session.set_auth_token("abc");
        let raw = session.backend().get(AUTH_TOKEN_KEY).unwrap();
        let envelope: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(envelope["expires_at"].is_null());
        assert_eq!(session.get_auth_token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_clones_share_backend() {
        let session = store();
        let other = session.clone();
        session.set_auth_token("abc");
        session.set_user_data(&alice()).unwrap();
        assert!(other.is_authenticated());
        other.clear_auth_cookies();
        assert!(!session.is_authenticated());
    }
}

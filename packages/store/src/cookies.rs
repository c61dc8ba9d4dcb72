//! # Cookie store: browser-side session persistence
//!
//! [`CookieStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. Each entry becomes one first-party cookie on `document.cookie`:
//!
//! | Attribute | Value |
//! |-----------|-------|
//! | name | the session key (`authToken`, `userData`) with an optional prefix |
//! | value | URI-encoded envelope JSON |
//! | `path` | `/` so every route sees the session |
//! | `max-age` | the session lifetime, omitted for browser-session cookies |
//! | `SameSite` | `Lax` |
//!
//! ## Error handling
//!
//! All trait methods silently swallow JS errors (returning `None` for reads, doing
//! nothing for writes). A browser that blocks cookies degrades to "signed out",
//! which the sign-in flow reports as a storage error after verifying the write.

use js_sys::{decode_uri_component, encode_uri_component};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::session::KeyValueStore;

/// `document.cookie`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct CookieStore {
    prefix: String,
}

impl CookieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose cookie names start with `prefix`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    fn cookie_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    fn write_cookie(&self, cookie: &str) {
        if let Some(document) = Self::document() {
            if document.set_cookie(cookie).is_err() {
                tracing::warn!("Browser rejected cookie write");
            }
        }
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let cookies = Self::document()?.cookie().ok()?;
        let name = self.cookie_name(key);
        cookies
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(k, _)| *k == name)
            .and_then(|(_, v)| decode_uri_component(v).ok())
            .map(String::from)
    }

    fn set(&self, key: &str, value: &str, max_age: Option<u64>) {
        let encoded = String::from(encode_uri_component(value));
        let mut cookie = format!(
            "{}={}; path=/; SameSite=Lax",
            self.cookie_name(key),
            encoded
        );
        if let Some(secs) = max_age {
            cookie.push_str(&format!("; max-age={secs}"));
        }
        self.write_cookie(&cookie);
    }

    fn remove(&self, key: &str) {
        self.write_cookie(&format!(
            "{}=; path=/; max-age=0; SameSite=Lax",
            self.cookie_name(key)
        ));
    }
}

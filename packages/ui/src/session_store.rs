//! Platform session backend.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser cookies via [`store::CookieStore`]
//! - **Desktop** (native): files under the platform data directory via [`store::FileStore`]
//! - **WASM without `web`**: memory only

use store::config::AuthSettings;
use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::CookieStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the session store for this platform with the configured lifetime.
pub fn make_session_store(settings: &AuthSettings) -> SessionStore<PlatformStore> {
    SessionStore::new(platform_backend()).with_lifetime(settings.session_lifetime())
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn platform_backend() -> PlatformStore {
    store::CookieStore::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_backend() -> PlatformStore {
    let base = dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("cb-construct");
    store::FileStore::new(base)
}

#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
fn platform_backend() -> PlatformStore {
    store::MemoryStore::new()
}

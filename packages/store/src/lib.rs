//! Persistence and pure domain logic shared by every frontend crate.
//!
//! Nothing in here renders or performs network I/O: the session store talks to a
//! [`KeyValueStore`] backend, and the catalog and pagination modules are plain
//! functions over slices.

pub mod catalog;
pub mod config;
pub mod models;
pub mod pagination;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod cookies;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use cookies::CookieStore;

pub use catalog::{CatalogState, ProjectQuery, SortOrder};
pub use config::SiteConfig;
pub use models::{ProjectRecord, ProjectStatus, UserRecord};
pub use pagination::{PageChange, PaginationState};
pub use session::{KeyValueStore, Session, SessionError, SessionLifetime, SessionStore};

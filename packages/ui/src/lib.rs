//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

mod config;
pub use config::{load_site_config, use_site_config};

mod session_store;
pub use session_store::{make_session_store, PlatformStore};

mod session;
pub use session::{use_require_auth, use_session, SessionHandle, SessionProvider, SessionState};

mod signin_panel;
pub use signin_panel::SignInPanel;

mod pagination_controls;
pub use pagination_controls::PaginationControls;

mod catalog;
pub use catalog::{use_projects, ProjectCard, ProjectCatalog, UseProjects};

mod profile;
pub use profile::{LogoutButton, ProfileCard};

mod navbar;
pub use navbar::{Navbar, UserMenu};

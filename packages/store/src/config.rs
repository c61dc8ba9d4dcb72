//! # Site configuration: `site.toml`
//!
//! Defines the TOML configuration that the web app embeds at build time
//! (filename: [`SiteConfig::filename`] = `"site.toml"`). It controls where the
//! external collaborators live, how long sessions last, and the pagination defaults
//! of the project catalog.
//!
//! ## Structure
//!
//! ```toml
//! [auth]
//! signin_endpoint = "/api/auth/signin"
//! timeout_secs = 10
//! demo_mode = false        # synthesize a session when the server is unreachable
//! session_days = 7         # 0 = expire with the browser session
//! success_delay_ms = 100
//! fallback_delay_ms = 1000
//!
//! [catalog]
//! projects_endpoint = "/api/projects"   # empty = built-in showcase list
//! items_per_page_options = [3, 6, 9, 12]
//! default_items_per_page = 6
//! max_pagination_buttons = 5
//! show_pagination_info = true
//! enable_items_per_page_selector = true
//! ```
//!
//! All structs derive `Default` so that a missing or partial file is equivalent to
//! the default configuration. On native targets [`SiteConfig::apply_env`] lets
//! `SITE_*` environment variables (optionally from a `.env` file) override the file.

use serde::{Deserialize, Serialize};

use crate::session::SessionLifetime;

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

/// Sign-in and session settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub signin_endpoint: String,
    pub timeout_secs: u64,
    /// Fall back to a locally synthesized session when the sign-in request
    /// cannot reach the server. Never enable in production.
    pub demo_mode: bool,
    /// Session lifetime in days. 0 keeps the session for the browser session only.
    pub session_days: u32,
    pub success_delay_ms: u64,
    pub fallback_delay_ms: u64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            signin_endpoint: "/api/auth/signin".to_string(),
            timeout_secs: 10,
            demo_mode: false,
            session_days: 7,
            success_delay_ms: 100,
            fallback_delay_ms: 1000,
        }
    }
}

impl AuthSettings {
    pub fn session_lifetime(&self) -> SessionLifetime {
        match self.session_days {
            0 => SessionLifetime::Browser,
            days => SessionLifetime::Days(days),
        }
    }
}

/// Project catalog settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Project list endpoint. Empty string serves the built-in showcase list.
    pub projects_endpoint: String,
    pub items_per_page_options: Vec<usize>,
    pub default_items_per_page: usize,
    pub max_pagination_buttons: usize,
    pub show_pagination_info: bool,
    pub enable_items_per_page_selector: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            projects_endpoint: "/api/projects".to_string(),
            items_per_page_options: vec![3, 6, 9, 12],
            default_items_per_page: 6,
            max_pagination_buttons: 5,
            show_pagination_info: true,
            enable_items_per_page_selector: true,
        }
    }
}

impl SiteConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to toggle demo mode.
    pub fn with_demo_mode(mut self, enabled: bool) -> Self {
        self.auth.demo_mode = enabled;
        self
    }

    /// Override endpoints and demo mode from `SITE_*` environment variables.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn apply_env(mut self) -> Self {
        dotenvy::dotenv().ok();
        self.apply_vars(|key| std::env::var(key).ok());
        self
    }

    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = var("SITE_SIGNIN_ENDPOINT") {
            self.auth.signin_endpoint = endpoint;
        }
        if let Some(endpoint) = var("SITE_PROJECTS_ENDPOINT") {
            self.catalog.projects_endpoint = endpoint;
        }
        if let Some(flag) = var("SITE_DEMO_MODE") {
            self.auth.demo_mode = matches!(flag.trim(), "1" | "true" | "yes");
        }
    }
}

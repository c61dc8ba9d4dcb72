//! Site configuration context.

use dioxus::prelude::*;
use store::SiteConfig;

/// Parse the embedded `site.toml`, falling back to defaults on error.
///
/// On native targets `SITE_*` environment variables override the file.
pub fn load_site_config(toml: &str) -> SiteConfig {
    let config = SiteConfig::from_toml(toml).unwrap_or_else(|e| {
        tracing::error!("Invalid {}, using defaults: {}", SiteConfig::filename(), e);
        SiteConfig::default()
    });
    #[cfg(not(target_arch = "wasm32"))]
    let config = config.apply_env();
    if config.auth.demo_mode {
        tracing::warn!("Demo mode is on: unreachable sign-in servers produce unverified sessions");
    }
    config
}

/// The site configuration provided by the app root.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

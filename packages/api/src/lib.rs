//! # API crate: HTTP collaborators and the authentication flow
//!
//! This crate sits between the persistence/domain crate ([`store`]) and the Dioxus
//! UI. It owns every network call the site makes and the state machines that react
//! to their results.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Sign-in form validation, the sign-in transport, the [`auth::AuthFlow`] state machine, the route guard and logout |
//! | [`projects`] | Project list client (HTTP endpoint or built-in showcase list) |
//! | [`error`] | [`ApiError`] for the project client and endpoint resolution |
//!
//! ## Endpoints
//!
//! Endpoints come from [`store::SiteConfig`]. Relative endpoints such as
//! `/api/auth/signin` are resolved against the page origin on the web and must be
//! absolute on native targets (see [`resolve_endpoint`]).

pub mod auth;
pub mod error;
pub mod projects;

mod destination;
mod timer;

pub use destination::Destination;
pub use error::ApiError;
pub use store::{ProjectRecord, SiteConfig, UserRecord};

use reqwest::Url;

/// Resolve a configured endpoint to an absolute URL.
///
/// Absolute endpoints are used as-is. Relative ones are joined onto the current
/// page origin in the browser; natively they are an error.
pub fn resolve_endpoint(endpoint: &str) -> Result<Url, ApiError> {
    resolve_endpoint_against(endpoint, page_origin().as_deref())
}

fn resolve_endpoint_against(endpoint: &str, origin: Option<&str>) -> Result<Url, ApiError> {
    if let Ok(url) = Url::parse(endpoint) {
        return Ok(url);
    }
    let invalid = || ApiError::InvalidEndpoint(endpoint.to_string());
    let base = Url::parse(origin.ok_or_else(invalid)?).map_err(|_| invalid())?;
    base.join(endpoint).map_err(|_| invalid())
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

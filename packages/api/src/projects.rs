//! # Project list client
//!
//! [`ProjectClient`] loads the project catalog. With an endpoint configured it
//! issues `GET <endpoint>` and accepts either a bare JSON array of projects or an
//! object wrapping the array under `projects`. With an empty endpoint it serves
//! [`store::catalog::showcase_projects`] without touching the network.
//!
//! Failures are returned as [`ApiError`]; callers turn them into
//! [`store::CatalogState::failed`] and offer a retry.

use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use store::config::CatalogSettings;
use store::ProjectRecord;

use crate::ApiError;

#[derive(Deserialize)]
#[serde(untagged)]
enum ProjectsBody {
    List(Vec<ProjectRecord>),
    Wrapped { projects: Vec<ProjectRecord> },
}

/// Fetches the project catalog.
#[derive(Clone, Debug)]
pub struct ProjectClient {
    client: reqwest::Client,
    endpoint: Option<Url>,
}

impl ProjectClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self, ApiError> {
        let endpoint = match settings.projects_endpoint.trim() {
            "" => None,
            endpoint => Some(crate::resolve_endpoint(endpoint)?),
        };
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
        })
    }

    /// Client serving the built-in showcase list.
    pub fn showcase() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: None,
        }
    }

    pub fn with_endpoint(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: Some(endpoint),
        }
    }

    pub async fn fetch_projects(&self) -> Result<Vec<ProjectRecord>, ApiError> {
        let Some(endpoint) = &self.endpoint else {
            return Ok(store::catalog::showcase_projects());
        };

        let response = self.client.get(endpoint.clone()).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&text)
                .ok()
                .and_then(|body| body.get("message")?.as_str().map(String::from))
                .unwrap_or_else(|| format!("server responded with status {}", status.as_u16()));
            tracing::error!("Project list request failed: {}", message);
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let projects = match serde_json::from_str(&text)? {
            ProjectsBody::List(projects) | ProjectsBody::Wrapped { projects } => projects,
        };
        tracing::info!("Loaded {} projects", projects.len());
        Ok(projects)
    }
}

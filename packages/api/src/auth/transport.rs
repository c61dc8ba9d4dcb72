//! Sign-in transport.
//!
//! [`SignInTransport`] is the seam between [`super::AuthFlow`] and the network.
//! [`HttpTransport`] is the real implementation; tests substitute their own.
//!
//! The transport reports *any* HTTP response as `Ok`, whatever its status. Only
//! failures that never produced a response are errors, and of those only
//! [`TransportError::Connect`] means the server is unreachable.

use std::future::Future;
use std::time::Duration;

use reqwest::Url;
use serde_json::Value;
use store::config::AuthSettings;

use super::Credentials;
use crate::ApiError;

/// A response from the sign-in endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct SignInReply {
    pub status: u16,
    /// Decoded JSON body, or `Value::Null` when the body is empty or not JSON.
    pub body: Value,
}

/// Failures that produced no HTTP response.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The server could not be reached at all.
    #[error("{0}")]
    Connect(String),
    #[error("timeout of {0}ms exceeded")]
    Timeout(u64),
    #[error("{0}")]
    Other(String),
}

/// Sends credentials to the sign-in endpoint.
pub trait SignInTransport {
    fn post_sign_in(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SignInReply, TransportError>>;
}

/// reqwest-backed transport posting JSON to the configured endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(settings: &AuthSettings) -> Result<Self, ApiError> {
        let endpoint = crate::resolve_endpoint(&settings.signin_endpoint)?;
        Self::with_endpoint(endpoint, settings.timeout_secs)
    }

    pub fn with_endpoint(endpoint: Url, timeout_secs: u64) -> Result<Self, ApiError> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn classify(&self, e: reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout(self.timeout.as_millis() as u64)
        } else if e.is_connect() || (cfg!(target_arch = "wasm32") && e.is_request()) {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Other(e.to_string())
        }
    }
}

impl SignInTransport for HttpTransport {
    async fn post_sign_in(&self, credentials: &Credentials) -> Result<SignInReply, TransportError> {
        tracing::debug!("Sending sign-in request to {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .json(credentials)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| self.classify(e))?;
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        tracing::debug!("Sign-in endpoint answered {}", status);
        Ok(SignInReply { status, body })
    }
}

//! # Sign-in flow controller
//!
//! [`AuthFlow`] drives one sign-in attempt from form input to navigation:
//!
//! ```text
//! Idle ─▶ Validating ─┬─▶ Rejected                    (bad input, no request)
//!                     └─▶ Submitting ─┬─▶ Success          (HTTP 200)
//!                                     ├─▶ NetworkFallback  (unreachable + demo mode)
//!                                     └─▶ Rejected         (any other result)
//! ```
//!
//! On `Success` and `NetworkFallback` the previous session is cleared, the new one
//! is written and then read back. Navigation happens only after that check passes
//! and the configured delay has elapsed, so the destination view always finds a
//! populated session.
//!
//! Clones of a flow share one busy flag: a submission started while another is in
//! flight fails with [`SignInError::Busy`] without touching the network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::Rng;
use store::config::AuthSettings;
use store::{KeyValueStore, SessionLifetime, SessionStore, UserRecord};

use super::reply::{extract_token, extract_user, rejection_message};
use super::{SignInForm, SignInTransport, TransportError};
use crate::timer::{now_millis, sleep};
use crate::Destination;

/// Where a sign-in attempt currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    NetworkFallback,
    Rejected,
}

/// Errors surfaced to the sign-in form. `Display` is the banner text.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SignInError {
    #[error("{0}")]
    Validation(&'static str),
    #[error("{0}")]
    Rejected(String),
    #[error("Network error: Cannot connect to the server. Please ensure the backend is running and accessible.")]
    NetworkUnavailable,
    #[error("Failed to store login information. Please try again.")]
    Storage,
    #[error("Failed to store fallback login information.")]
    FallbackStorage,
    #[error("A sign-in request is already in progress.")]
    Busy,
}

/// Whether the session was issued by the server or synthesized locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionKind {
    Verified,
    /// Demo-mode session created because the server was unreachable. Not
    /// proof of identity.
    Fallback,
}

/// A completed sign-in.
#[derive(Clone, Debug, PartialEq)]
pub struct SignInOutcome {
    pub kind: SessionKind,
    pub user: UserRecord,
    /// Message to show alongside the redirect, if any.
    pub notice: Option<String>,
}

/// Sequences validation, the request, session writes and navigation.
#[derive(Clone)]
pub struct AuthFlow<T, S> {
    transport: T,
    session: SessionStore<S>,
    settings: AuthSettings,
    busy: Arc<AtomicBool>,
    phase: Arc<Mutex<AuthPhase>>,
}

/// Releases the busy flag on every exit path.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<T, S> AuthFlow<T, S>
where
    T: SignInTransport,
    S: KeyValueStore + Clone,
{
    pub fn new(transport: T, session: SessionStore<S>, settings: AuthSettings) -> Self {
        Self {
            transport,
            session,
            settings,
            busy: Arc::new(AtomicBool::new(false)),
            phase: Arc::new(Mutex::new(AuthPhase::Idle)),
        }
    }

    pub fn phase(&self) -> AuthPhase {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Whether a submission is in flight.
    pub fn is_loading(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Run one sign-in attempt. `navigate` is called at most once, after the new
    /// session has been written and verified.
    pub async fn submit(
        &self,
        form: &SignInForm,
        mut navigate: impl FnMut(Destination),
    ) -> Result<SignInOutcome, SignInError> {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            tracing::debug!("Ignoring sign-in submission while another is in flight");
            return Err(SignInError::Busy);
        };

        self.set_phase(AuthPhase::Validating);
        if let Err(e) = form.validate() {
            self.set_phase(AuthPhase::Rejected);
            return Err(e);
        }

        self.set_phase(AuthPhase::Submitting);
        let result = self.transport.post_sign_in(&form.credentials()).await;

        let (outcome, delay) = match result {
            Ok(reply) if reply.status == 200 => {
                let now = now_millis();
                let token = extract_token(&reply.body, now);
                let user = extract_user(&reply.body, &form.username, now);
                let outcome = self
                    .establish(form, &token, user, SessionKind::Verified)
                    .map_err(|e| self.reject(e))?;
                (outcome, self.settings.success_delay_ms)
            }
            Ok(reply) => {
                let message = rejection_message(&reply);
                tracing::warn!("Sign-in rejected with status {}", reply.status);
                return Err(self.reject(SignInError::Rejected(message)));
            }
            Err(TransportError::Connect(detail)) => {
                tracing::error!("Sign-in endpoint unreachable: {}", detail);
                if !self.settings.demo_mode {
                    return Err(self.reject(SignInError::NetworkUnavailable));
                }
                let (token, user) = fallback_session(&form.username, now_millis());
                let mut outcome = self
                    .establish(form, &token, user, SessionKind::Fallback)
                    .map_err(|e| self.reject(e))?;
                outcome.notice = Some(SignInError::NetworkUnavailable.to_string());
                (outcome, self.settings.fallback_delay_ms)
            }
            Err(e) => {
                tracing::error!("Sign-in request failed: {}", e);
                return Err(self.reject(SignInError::Rejected(format!(
                    "Connection failed: {e}. Please ensure your backend server is running and properly configured."
                ))));
            }
        };

        self.set_phase(match outcome.kind {
            SessionKind::Verified => AuthPhase::Success,
            SessionKind::Fallback => AuthPhase::NetworkFallback,
        });
        sleep(Duration::from_millis(delay)).await;
        tracing::info!("Signed in as {}, navigating home", outcome.user.username);
        navigate(Destination::Home);
        Ok(outcome)
    }

    /// Replace the stored session and confirm it reads back.
    fn establish(
        &self,
        form: &SignInForm,
        token: &str,
        user: UserRecord,
        kind: SessionKind,
    ) -> Result<SignInOutcome, SignInError> {
        let storage_error = match kind {
            SessionKind::Verified => SignInError::Storage,
            SessionKind::Fallback => SignInError::FallbackStorage,
        };
        let lifetime = if form.remember_me {
            self.settings.session_lifetime()
        } else {
            SessionLifetime::Browser
        };
        let session = self.session.clone().with_lifetime(lifetime);

        session.clear_auth_cookies();
        session.set_auth_token(token);
        if let Err(e) = session.set_user_data(&user) {
            tracing::error!("Failed to write user data: {}", e);
            return Err(storage_error);
        }
        if !session.is_authenticated() {
            tracing::error!("Session did not read back after sign-in");
            return Err(storage_error);
        }
        Ok(SignInOutcome {
            kind,
            user,
            notice: None,
        })
    }

    fn reject(&self, error: SignInError) -> SignInError {
        self.set_phase(AuthPhase::Rejected);
        error
    }

    fn set_phase(&self, phase: AuthPhase) {
        *self.phase.lock().unwrap_or_else(|e| e.into_inner()) = phase;
    }
}

/// Placeholder token and user for demo-mode sign-in.
fn fallback_session(username: &str, now_millis: i64) -> (String, UserRecord) {
    let suffix: String = {
        let mut rng = rand::thread_rng();
        (0..9)
            .map(|_| std::char::from_digit(rng.gen_range(0..36), 36).unwrap_or('0'))
            .collect()
    };
    let token = format!("fallback-token-{now_millis}-{suffix}");
    let created_at = chrono::DateTime::from_timestamp_millis(now_millis)
        .map(|t| t.to_rfc3339_opts(chrono::SecondsFormat::Millis, true));
    let user = UserRecord {
        id: Some(format!("fallback_{now_millis}")),
        email: Some(format!("{username}@example.com")),
        role: Some("Client".to_string()),
        fallback: true,
        created_at,
        ..UserRecord::new(username)
    };
    (token, user)
}

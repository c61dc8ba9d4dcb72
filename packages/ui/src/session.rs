//! Session context and hooks for the UI.

use api::Destination;
use dioxus::prelude::*;
use store::{SessionStore, UserRecord};

use crate::config::use_site_config;
use crate::session_store::{make_session_store, PlatformStore};

/// What the UI currently knows about the signed-in user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserRecord>,
}

impl SessionState {
    fn read(store: &SessionStore<PlatformStore>) -> Self {
        Self {
            user: store
                .is_authenticated()
                .then(|| store.get_user_data())
                .flatten(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the session was synthesized in demo mode.
    pub fn is_fallback(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.fallback)
    }
}

/// The shared session store plus a signal mirroring it.
#[derive(Clone)]
pub struct SessionHandle {
    store: SessionStore<PlatformStore>,
    state: Signal<SessionState>,
}

impl SessionHandle {
    pub fn store(&self) -> &SessionStore<PlatformStore> {
        &self.store
    }

    /// Current state. Subscribes the calling component.
    pub fn state(&self) -> SessionState {
        (self.state)()
    }

    /// Re-read the store after it was written outside this handle.
    pub fn refresh(&mut self) {
        self.state.set(SessionState::read(&self.store));
    }

    /// Clear the session and go to the sign-in page.
    pub fn logout(&mut self, on_navigate: EventHandler<Destination>) {
        api::auth::logout(&self.store, |d| on_navigate.call(d));
        self.refresh();
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that owns the platform session store.
/// Wrap your app with this component (inside the config context).
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let config = use_site_config();
    let store = use_hook(|| make_session_store(&config.auth));
    let state = use_signal(|| SessionState::read(&store));

    use_context_provider(|| SessionHandle {
        store: store.clone(),
        state,
    });

    rsx! {
        {children}
    }
}

/// Gate a protected view. Returns the user, or requests navigation to the
/// sign-in page and returns `None`.
///
/// Reads the store on every render, so a session cleared elsewhere is noticed on
/// the next navigation.
pub fn use_require_auth(on_navigate: EventHandler<Destination>) -> Option<UserRecord> {
    let session = use_session();
    api::auth::require_auth(session.store(), |d| on_navigate.call(d))
}

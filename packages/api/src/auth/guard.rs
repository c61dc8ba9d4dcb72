//! Route guarding and logout.
//!
//! Guards only read the session store. Views call them every time a protected
//! route renders so a session cleared in the meantime is noticed immediately.

use store::{KeyValueStore, SessionStore, UserRecord};

use crate::Destination;

/// Gate a protected view.
///
/// Returns the stored user when the session is authenticated. Otherwise requests
/// navigation to the sign-in page and returns `None`.
pub fn require_auth<S: KeyValueStore>(
    session: &SessionStore<S>,
    mut navigate: impl FnMut(Destination),
) -> Option<UserRecord> {
    let user = session
        .is_authenticated()
        .then(|| session.get_user_data())
        .flatten();
    if user.is_none() {
        tracing::debug!("No session, redirecting to sign-in");
        navigate(Destination::SignIn);
    }
    user
}

/// Send an already signed-in visitor from the sign-in page to their profile.
/// Returns whether a redirect was requested.
pub fn redirect_if_authenticated<S: KeyValueStore>(
    session: &SessionStore<S>,
    mut navigate: impl FnMut(Destination),
) -> bool {
    let authenticated = session.is_authenticated();
    if authenticated {
        navigate(Destination::Profile);
    }
    authenticated
}

/// Clear the session and return to the sign-in page.
pub fn logout<S: KeyValueStore>(session: &SessionStore<S>, mut navigate: impl FnMut(Destination)) {
    session.clear_auth_cookies();
    tracing::info!("Signed out");
    navigate(Destination::SignIn);
}

//! Sign-in, session establishment and route guarding.
//!
//! The flow is split the same way on every platform:
//! [`SignInForm`] validates input, a [`SignInTransport`] talks to the sign-in
//! endpoint, [`reply`] turns a successful response into a session, and
//! [`AuthFlow`] sequences all of it and writes the result to the session store.
//! [`require_auth`] and [`logout`] are the read and clear sides used by views.

mod flow;
mod form;
mod guard;
pub mod reply;
mod transport;

pub use flow::{AuthFlow, AuthPhase, SessionKind, SignInError, SignInOutcome};
pub use form::{Credentials, SignInForm};
pub use guard::{logout, redirect_if_authenticated, require_auth};
pub use transport::{HttpTransport, SignInReply, SignInTransport, TransportError};

//! Sign-in form bound to [`api::auth::AuthFlow`].

use api::auth::{AuthFlow, HttpTransport, SignInError, SignInForm, SignInOutcome};
use api::Destination;
use dioxus::prelude::*;

use crate::icons::{FaEye, FaEyeSlash};
use crate::session::use_session;
use crate::session_store::PlatformStore;
use crate::use_site_config;
use crate::Icon;

type PlatformFlow = AuthFlow<HttpTransport, PlatformStore>;

/// Banners to show once a submission has finished.
#[derive(Debug, PartialEq)]
struct Settled {
    error: Option<String>,
    notice: Option<String>,
}

/// `None` when the submission was refused because another one is in flight.
fn settle(result: Result<SignInOutcome, SignInError>) -> Option<Settled> {
    match result {
        Ok(outcome) => Some(Settled {
            error: None,
            notice: outcome.notice,
        }),
        Err(SignInError::Busy) => None,
        Err(e) => Some(Settled {
            error: Some(e.to_string()),
            notice: None,
        }),
    }
}

/// Username/password form with remember-me and a show-password toggle.
///
/// Visitors who already have a session are sent to their profile on mount.
#[component]
pub fn SignInPanel(on_navigate: EventHandler<Destination>) -> Element {
    let session = use_session();
    let config = use_site_config();

    let flow: Result<PlatformFlow, String> = use_hook(|| {
        HttpTransport::new(&config.auth)
            .map(|transport| AuthFlow::new(transport, session.store().clone(), config.auth.clone()))
            .map_err(|e| {
                tracing::error!("Cannot build sign-in client: {}", e);
                e.to_string()
            })
    });

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect({
        let session = session.clone();
        move || {
            api::auth::redirect_if_authenticated(session.store(), |d| on_navigate.call(d));
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let flow = match &flow {
            Ok(flow) => flow.clone(),
            Err(e) => {
                error.set(Some(e.clone()));
                return;
            }
        };
        if flow.is_loading() {
            return;
        }
        let form = SignInForm {
            username: username(),
            password: password(),
            remember_me: remember_me(),
        };
        let mut session = session.clone();

        spawn(async move {
            error.set(None);
            notice.set(None);
            loading.set(true);

            let result = flow
                .submit(&form, |d| {
                    session.refresh();
                    on_navigate.call(d);
                })
                .await;

            // An overlapping attempt leaves the form to the one in flight.
            if let Some(settled) = settle(result) {
                error.set(settled.error);
                notice.set(settled.notice);
                loading.set(false);
            }
        });
    };

    rsx! {
        div {
            class: "signin-page",
            div {
                class: "signin-card",
                h1 { "Sign In" }
                p { class: "signin-subtitle", "Welcome back. Sign in to follow your projects." }

                if let Some(msg) = error() {
                    div { class: "signin-error", role: "alert", "{msg}" }
                }
                if let Some(msg) = notice() {
                    div { class: "signin-notice", "{msg}" }
                }

                form {
                    onsubmit: handle_submit,
                    div {
                        class: "signin-field",
                        label { r#for: "username", "Username" }
                        input {
                            id: "username",
                            r#type: "text",
                            placeholder: "Enter your username",
                            autocomplete: "username",
                            value: "{username}",
                            disabled: loading(),
                            oninput: move |evt: FormEvent| {
                                username.set(evt.value());
                                error.set(None);
                            },
                        }
                    }
                    div {
                        class: "signin-field",
                        label { r#for: "password", "Password" }
                        div {
                            class: "signin-password",
                            input {
                                id: "password",
                                r#type: if show_password() { "text" } else { "password" },
                                placeholder: "Enter your password",
                                autocomplete: "current-password",
                                value: "{password}",
                                disabled: loading(),
                                oninput: move |evt: FormEvent| {
                                    password.set(evt.value());
                                    error.set(None);
                                },
                            }
                            button {
                                r#type: "button",
                                class: "signin-password-toggle",
                                title: if show_password() { "Hide password" } else { "Show password" },
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon { icon: FaEyeSlash, width: 14, height: 14 }
                                } else {
                                    Icon { icon: FaEye, width: 14, height: 14 }
                                }
                            }
                        }
                    }
                    label {
                        class: "signin-remember",
                        input {
                            r#type: "checkbox",
                            checked: remember_me(),
                            disabled: loading(),
                            onchange: move |evt: FormEvent| remember_me.set(evt.checked()),
                        }
                        "Remember me"
                    }
                    button {
                        r#type: "submit",
                        class: "signin-submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::auth::SessionKind;
    use store::UserRecord;

    #[test]
    fn test_busy_submission_leaves_form_alone() {
        assert_eq!(settle(Err(SignInError::Busy)), None);
    }

    #[test]
    fn test_settled_banners() {
        let rejected = settle(Err(SignInError::Validation("Password is required"))).unwrap();
        assert_eq!(rejected.error.as_deref(), Some("Password is required"));
        assert_eq!(rejected.notice, None);

        let fallback = settle(Ok(SignInOutcome {
            kind: SessionKind::Fallback,
            user: UserRecord::new("alice"),
            notice: Some("server unreachable".to_string()),
        }))
        .unwrap();
        assert_eq!(fallback.error, None);
        assert_eq!(fallback.notice.as_deref(), Some("server unreachable"));
    }
}

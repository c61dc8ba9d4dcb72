use api::Destination;
use dioxus::prelude::*;

use crate::icons::FaRightFromBracket;
use crate::session::{use_require_auth, use_session};
use crate::Icon;

/// Signed-in user's details. Redirects to sign-in when there is no session.
#[component]
pub fn ProfileCard(on_navigate: EventHandler<Destination>) -> Element {
    let Some(user) = use_require_auth(on_navigate) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "profile-card",
            h1 { "Welcome, {user.display_name()}" }
            if user.fallback {
                div {
                    class: "profile-demo-badge",
                    title: "The sign-in server was unreachable. This session was not verified.",
                    "Demo session"
                }
            }
            dl {
                if let Some(email) = &user.email {
                    dt { "Email" }
                    dd { "{email}" }
                }
                if let Some(role) = &user.role {
                    dt { "Role" }
                    dd { "{role}" }
                }
                if let Some(id) = &user.id {
                    dt { "Member ID" }
                    dd { "{id}" }
                }
            }
            LogoutButton { on_navigate }
        }
    }
}

#[component]
pub fn LogoutButton(on_navigate: EventHandler<Destination>) -> Element {
    let mut session = use_session();

    rsx! {
        button {
            class: "logout-button",
            onclick: move |_| session.logout(on_navigate),
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            "Sign Out"
        }
    }
}

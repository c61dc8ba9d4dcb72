use api::Destination;
use dioxus::prelude::*;

use crate::profile::LogoutButton;
use crate::session::use_session;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Top bar. Platform crates pass their router links as children.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        div {
            class: "navbar",
            {children}
        }
    }
}

/// Greeting plus sign-out when signed in, a sign-in button otherwise.
#[component]
pub fn UserMenu(on_navigate: EventHandler<Destination>) -> Element {
    let session = use_session();
    let state = session.state();

    match state.user {
        Some(user) => rsx! {
            div {
                class: "user-menu",
                span { class: "user-menu-name", "{user.display_name()}" }
                if user.fallback {
                    span { class: "user-menu-demo", title: "Unverified demo session", "demo" }
                }
                LogoutButton { on_navigate }
            }
        },
        None => rsx! {
            button {
                class: "user-menu-signin",
                onclick: move |_| on_navigate.call(Destination::SignIn),
                "Sign In"
            }
        },
    }
}

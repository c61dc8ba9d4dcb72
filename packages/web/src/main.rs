use api::Destination;
use dioxus::prelude::*;

use ui::{load_site_config, Navbar, SessionProvider, UserMenu};
use views::{Home, Profile, Projects, SignIn};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/signin")]
        SignIn {},
        #[route("/profile")]
        Profile {},
        #[route("/projects")]
        Projects {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Home => Route::Home {},
            Destination::SignIn => Route::SignIn {},
            Destination::Profile => Route::Profile {},
            Destination::Projects => Route::Projects {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| load_site_config(SITE_TOML));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Navigation handler that maps a [`Destination`] onto the router.
pub(crate) fn use_destination() -> EventHandler<Destination> {
    let nav = use_navigator();
    use_callback(move |destination: Destination| {
        tracing::debug!("Navigating to {}", destination);
        nav.push(Route::from(destination));
    })
}

/// Top bar plus the routed page.
#[component]
fn Shell() -> Element {
    let on_navigate = use_destination();

    rsx! {
        Navbar {
            Link { class: "navbar-brand", to: Route::Home {}, "CB Construct" }
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::Projects {}, "Projects" }
            Link { to: Route::Profile {}, "Profile" }
            UserMenu { on_navigate }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}

//! Landing page with featured projects.

use dioxus::prelude::*;
use ui::ProjectCatalog;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        section {
            class: "hero",
            h1 { "Building Sri Lanka's Future" }
            p { "Commercial, residential and infrastructure projects delivered on time and on budget." }
            Link { class: "hero-cta", to: Route::Projects {}, "Browse all projects" }
        }
        ProjectCatalog {
            title: "Featured Projects",
            custom_items_per_page: Some(3),
            show_filters: false,
        }
    }
}

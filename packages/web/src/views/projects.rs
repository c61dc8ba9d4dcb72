use dioxus::prelude::*;
use store::PageChange;
use ui::ProjectCatalog;

#[component]
pub fn Projects() -> Element {
    rsx! {
        ProjectCatalog {
            title: "Our Projects",
            on_page_change: move |change: PageChange| {
                tracing::debug!("Catalog page {} ({} per page)", change.page, change.items_per_page);
            },
        }
    }
}

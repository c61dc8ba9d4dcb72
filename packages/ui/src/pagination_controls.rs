use dioxus::prelude::*;
use store::PaginationState;

use crate::icons::{FaChevronLeft, FaChevronRight};
use crate::Icon;

/// Page-size selector, page summary, and previous/next plus numbered buttons.
///
/// Renders nothing when there are no items.
#[component]
pub fn PaginationControls(
    state: PaginationState,
    on_page: EventHandler<usize>,
    on_items_per_page: EventHandler<usize>,
    #[props(default = true)] show_info: bool,
    #[props(default = true)] show_selector: bool,
) -> Element {
    if !state.controls_visible() {
        return rsx! {};
    }

    let current = state.current_page();
    let window = state.window();

    rsx! {
        div {
            class: "pagination",
            if show_selector {
                label {
                    class: "pagination-selector",
                    "Show"
                    select {
                        value: "{state.items_per_page()}",
                        onchange: move |evt: FormEvent| {
                            match evt.value().parse::<usize>() {
                                Ok(size) => on_items_per_page.call(size),
                                Err(e) => tracing::warn!("Bad page size {:?}: {}", evt.value(), e),
                            }
                        },
                        for size in state.options().iter().copied() {
                            option {
                                value: "{size}",
                                selected: size == state.items_per_page(),
                                "{size}"
                            }
                        }
                    }
                    "per page"
                }
            }
            if show_info {
                span { class: "pagination-info", "{state.summary()}" }
            }
            nav {
                class: "pagination-buttons",
                button {
                    class: "pagination-step",
                    title: "Previous page",
                    disabled: !state.can_go_previous(),
                    onclick: move |_| on_page.call(current - 1),
                    Icon { icon: FaChevronLeft, width: 12, height: 12 }
                }
                for page in window {
                    button {
                        key: "{page}",
                        class: if page == current { "pagination-page pagination-page--current" } else { "pagination-page" },
                        onclick: move |_| on_page.call(page),
                        "{page}"
                    }
                }
                button {
                    class: "pagination-step",
                    title: "Next page",
                    disabled: !state.can_go_next(),
                    onclick: move |_| on_page.call(current + 1),
                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                }
            }
        }
    }
}

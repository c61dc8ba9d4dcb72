//! Project catalog: loading, filter toolbar, card grid and pagination.

use api::projects::ProjectClient;
use dioxus::prelude::*;
use store::catalog::{categories, refine, ALL_CATEGORIES};
use store::{CatalogState, PageChange, PaginationState, ProjectQuery, ProjectRecord, SortOrder};

use crate::icons::{FaMagnifyingGlass, FaStar};
use crate::pagination_controls::PaginationControls;
use crate::use_site_config;
use crate::Icon;

const CATALOG_CSS: Asset = asset!("/assets/styling/catalog.css");

/// Handle returned by [`use_projects`].
#[derive(Clone, Copy)]
pub struct UseProjects {
    state: Signal<CatalogState>,
    resource: Resource<()>,
}

impl UseProjects {
    pub fn state(&self) -> CatalogState {
        (self.state)()
    }

    /// Discard the current list and load again.
    pub fn refetch(&mut self) {
        self.resource.restart();
    }
}

/// Load the project list once on mount.
pub fn use_projects() -> UseProjects {
    let settings = use_site_config().catalog;
    let mut state = use_signal(CatalogState::loading);

    let resource = use_resource(move || {
        let settings = settings.clone();
        async move {
            state.set(CatalogState::loading());
            let result = match ProjectClient::new(&settings) {
                Ok(client) => client.fetch_projects().await,
                Err(e) => Err(e),
            };
            state.set(match result {
                Ok(projects) => CatalogState::loaded(projects),
                Err(e) => {
                    tracing::error!("Failed to load projects: {}", e);
                    CatalogState::failed(format!("Failed to load projects: {e}"))
                }
            });
        }
    });

    UseProjects { state, resource }
}

/// Searchable, sortable, paginated grid of projects.
#[component]
pub fn ProjectCatalog(
    #[props(default = "Our Projects".to_string())] title: String,
    /// Page size controlled by the parent. Changes reset to page 1.
    #[props(default)]
    custom_items_per_page: Option<usize>,
    #[props(default = true)] show_filters: bool,
    #[props(default)] on_page_change: Option<EventHandler<PageChange>>,
) -> Element {
    let settings = use_site_config().catalog;
    let mut projects = use_projects();
    let mut query = use_signal(ProjectQuery::default);
    let mut pagination = use_signal(|| {
        PaginationState::new(&settings).with_custom_items_per_page(custom_items_per_page)
    });

    let filtered = use_memo(move || query.read().apply(&projects.state.read().projects));

    let notify = move |change: Option<PageChange>| {
        if let (Some(change), Some(handler)) = (change, on_page_change) {
            handler.call(change);
        }
    };

    use_effect(use_reactive!(|custom_items_per_page| {
        let change = pagination
            .write()
            .apply_custom_items_per_page(custom_items_per_page);
        notify(change);
    }));

    let mut update_pagination = move |f: &dyn Fn(&mut PaginationState) -> Option<PageChange>| {
        let change = {
            let mut state = pagination.write();
            state.set_total_items(filtered.read().len());
            f(&mut state)
        };
        notify(change);
    };

    let mut update_query = move |f: &dyn Fn(&mut ProjectQuery)| {
        let change = refine(
            &mut query.write(),
            &mut pagination.write(),
            &projects.state.read().projects,
            f,
        );
        notify(Some(change));
    };

    let catalog = projects.state();
    let list = filtered();
    let view = {
        let mut state = pagination();
        state.set_total_items(list.len());
        state
    };
    let page = view.page(&list);
    let current_query = query();
    let category_options = categories(&catalog.projects);

    rsx! {
        document::Stylesheet { href: CATALOG_CSS }
        section {
            class: "catalog",
            h2 { class: "catalog-title", "{title}" }

            if show_filters {
                div {
                    class: "catalog-toolbar",
                    label {
                        class: "catalog-search",
                        Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        input {
                            r#type: "search",
                            placeholder: "Search projects",
                            value: "{current_query.search}",
                            oninput: move |evt: FormEvent| {
                                let value = evt.value();
                                update_query(&|q| q.search = value.clone());
                            },
                        }
                    }
                    select {
                        class: "catalog-category",
                        value: "{current_query.category}",
                        onchange: move |evt: FormEvent| {
                            let value = evt.value();
                            update_query(&|q| q.category = value.clone());
                        },
                        for category in category_options {
                            option {
                                value: "{category}",
                                selected: category == current_query.category,
                                "{category}"
                            }
                        }
                    }
                    select {
                        class: "catalog-sort",
                        value: "{current_query.sort.label()}",
                        onchange: move |evt: FormEvent| {
                            if let Some(sort) = SortOrder::from_label(&evt.value()) {
                                update_query(&|q| q.sort = sort);
                            }
                        },
                        for order in SortOrder::ALL {
                            option {
                                value: "{order.label()}",
                                selected: order == current_query.sort,
                                "{order.label()}"
                            }
                        }
                    }
                }

                if !current_query.is_default() {
                    div {
                        class: "catalog-active-filters",
                        span { "Active filters:" }
                        if !current_query.search.trim().is_empty() {
                            span { class: "catalog-chip", "Search: {current_query.search.trim()}" }
                        }
                        if current_query.category != ALL_CATEGORIES {
                            span { class: "catalog-chip", "Category: {current_query.category}" }
                        }
                        if current_query.sort != SortOrder::default() {
                            span { class: "catalog-chip", "Sort: {current_query.sort.label()}" }
                        }
                        button {
                            class: "catalog-clear",
                            onclick: move |_| update_query(&|q| *q = ProjectQuery::default()),
                            "Clear all"
                        }
                    }
                }
            }

            if catalog.loading {
                div { class: "catalog-status", "Loading projects..." }
            } else if let Some(error) = catalog.error.clone() {
                div {
                    class: "catalog-status catalog-status--error",
                    p { "{error}" }
                    button { onclick: move |_| projects.refetch(), "Retry" }
                }
            } else if list.is_empty() {
                div { class: "catalog-status", "No projects match your filters." }
            } else {
                div {
                    class: "catalog-grid",
                    for (index, project) in (page.start_index..).zip(page.items.iter()) {
                        ProjectCard {
                            key: "{index}",
                            project: project.clone(),
                            active: index == view.active_index,
                            on_hover: move |_| pagination.write().active_index = index,
                        }
                    }
                }
            }

            PaginationControls {
                state: view.clone(),
                show_info: settings.show_pagination_info,
                show_selector: settings.enable_items_per_page_selector,
                on_page: move |page| update_pagination(&|state| state.change_page(page)),
                on_items_per_page: move |size| update_pagination(&|state| state.change_items_per_page(size)),
            }
        }
    }
}

/// One project tile.
#[component]
pub fn ProjectCard(
    project: ProjectRecord,
    #[props(default)] active: bool,
    #[props(default)] on_hover: EventHandler<()>,
) -> Element {
    let progress = project.progress_percent();
    let rating = format!("{:.1}", project.rating);

    rsx! {
        article {
            class: if active { "project-card project-card--active" } else { "project-card" },
            onmouseenter: move |_| on_hover.call(()),
            img { class: "project-card-image", src: "{project.image}", alt: "{project.title}" }
            div {
                class: "project-card-body",
                div {
                    class: "project-card-meta",
                    span { class: "project-card-category", "{project.category}" }
                    span { class: "project-card-status", "{project.status}" }
                }
                h3 { "{project.title}" }
                p { "{project.description}" }
                div {
                    class: "project-card-tech",
                    for tech in project.tech.iter() {
                        span { key: "{tech}", "{tech}" }
                    }
                }
                div {
                    class: "project-card-progress",
                    div { class: "project-card-progress-bar", style: "width: {progress}%" }
                }
                div {
                    class: "project-card-footer",
                    span { "{progress}% complete" }
                    span { "Completion {project.completion}" }
                    span { "{project.investment}" }
                    span {
                        class: "project-card-rating",
                        Icon { icon: FaStar, width: 12, height: 12 }
                        "{rating}"
                    }
                }
            }
        }
    }
}

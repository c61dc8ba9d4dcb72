//! # Pagination engine
//!
//! Pure paging logic for the project catalog. Nothing here knows about projects or
//! rendering: [`paginate`] slices any sequence, [`page_window`] decides which page
//! buttons to show, and [`PaginationState`] holds the interactive state a catalog
//! component keeps in a signal.
//!
//! ## Invariants
//!
//! - `total_pages == ceil(total_items / items_per_page)`, and `0` for an empty list.
//! - `1 <= current_page <= max(total_pages, 1)`.
//! - Changing the page size resets to page 1.
//! - Every accepted change resets the highlighted item (`active_index`) to 0 and
//!   yields a [`PageChange`] for the caller's change callback.
//! - Out-of-range page requests are ignored, never wrapped.

use crate::config::CatalogSettings;

/// Number of pages needed for `len` items. `0` when there is nothing to page.
pub fn total_pages(len: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    len.div_ceil(items_per_page)
}

/// One page of a sequence.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub total_pages: usize,
    /// Index of `items[0]` in the full sequence.
    pub start_index: usize,
}

/// Slice out `current_page` (1-based). Pages past the end are clamped to the last
/// page; an empty input yields an empty page and `total_pages == 0`.
pub fn paginate<T>(items: &[T], current_page: usize, items_per_page: usize) -> Page<'_, T> {
    let total = total_pages(items.len(), items_per_page);
    if total == 0 {
        return Page {
            items: &[],
            total_pages: 0,
            start_index: 0,
        };
    }
    let page = current_page.clamp(1, total);
    let start_index = (page - 1) * items_per_page;
    let end = (start_index + items_per_page).min(items.len());
    Page {
        items: &items[start_index..end],
        total_pages: total,
        start_index,
    }
}

/// Page numbers to render as buttons.
///
/// Shows every page when they fit. Otherwise shows `max_buttons` consecutive
/// pages: anchored at page 1 near the start, anchored at the last page near the
/// end, and centred on `current_page` in between.
pub fn page_window(current_page: usize, total_pages: usize, max_buttons: usize) -> Vec<usize> {
    if max_buttons == 0 || total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= max_buttons {
        return (1..=total_pages).collect();
    }
    let half = max_buttons / 2;
    let start = if current_page <= half + 1 {
        1
    } else if current_page >= total_pages - half {
        total_pages - max_buttons + 1
    } else {
        current_page - half
    };
    (start..start + max_buttons).collect()
}

/// Emitted whenever the visible page or page size changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageChange {
    pub page: usize,
    pub items_per_page: usize,
}

/// Interactive pagination state for one catalog view.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginationState {
    current_page: usize,
    items_per_page: usize,
    options: Vec<usize>,
    max_buttons: usize,
    total_items: usize,
    /// Highlighted item, as an index into the paged (already filtered) list.
    pub active_index: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new(&CatalogSettings::default())
    }
}

impl PaginationState {
    /// Fresh state on page 1 using the configured defaults.
    ///
    /// A default page size missing from the options list is added to it, so the
    /// selector can always display the current size.
    pub fn new(settings: &CatalogSettings) -> Self {
        let items_per_page = settings.default_items_per_page.max(1);
        let mut options: Vec<usize> = settings
            .items_per_page_options
            .iter()
            .copied()
            .filter(|&n| n > 0)
            .collect();
        if !options.contains(&items_per_page) {
            options.push(items_per_page);
            options.sort_unstable();
        }
        Self {
            current_page: 1,
            items_per_page,
            options,
            max_buttons: settings.max_pagination_buttons,
            total_items: 0,
            active_index: 0,
        }
    }

    /// Builder method for an externally controlled page size.
    pub fn with_custom_items_per_page(mut self, items_per_page: Option<usize>) -> Self {
        self.apply_custom_items_per_page(items_per_page);
        self
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn options(&self) -> &[usize] {
        &self.options
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_items, self.items_per_page)
    }

    /// Whether page controls should render at all.
    pub fn controls_visible(&self) -> bool {
        self.total_pages() > 0
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Index of the first item on the current page.
    pub fn start_index(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }

    /// The slice of `items` on the current page.
    pub fn page<'a, T>(&self, items: &'a [T]) -> Page<'a, T> {
        paginate(items, self.current_page, self.items_per_page)
    }

    /// Page buttons to show for the current state.
    pub fn window(&self) -> Vec<usize> {
        page_window(self.current_page, self.total_pages(), self.max_buttons)
    }

    /// "Page X of Y (N total projects)"
    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} ({} total projects)",
            self.current_page,
            self.total_pages(),
            self.total_items
        )
    }

    /// Record the size of the (filtered) list and pull the current page back into
    /// range if the list shrank.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.current_page = self.current_page.clamp(1, self.total_pages().max(1));
    }

    /// Go to `page`. Requests outside `[1, total_pages]` and requests for the
    /// current page are ignored.
    pub fn change_page(&mut self, page: usize) -> Option<PageChange> {
        if page < 1 || page > self.total_pages() || page == self.current_page {
            return None;
        }
        self.current_page = page;
        self.active_index = 0;
        Some(self.change())
    }

    pub fn previous_page(&mut self) -> Option<PageChange> {
        self.change_page(self.current_page.checked_sub(1)?)
    }

    pub fn next_page(&mut self) -> Option<PageChange> {
        self.change_page(self.current_page + 1)
    }

    /// Switch page size. Sizes outside the configured options are rejected.
    pub fn change_items_per_page(&mut self, items_per_page: usize) -> Option<PageChange> {
        if !self.options.contains(&items_per_page) {
            return None;
        }
        self.items_per_page = items_per_page;
        Some(self.reset_page())
    }

    /// Apply a page size controlled from outside the selector. A size that
    /// differs from the current one replaces it and resets to page 1.
    pub fn apply_custom_items_per_page(&mut self, items_per_page: Option<usize>) -> Option<PageChange> {
        let size = items_per_page.filter(|&n| n > 0 && n != self.items_per_page)?;
        if !self.options.contains(&size) {
            self.options.push(size);
            self.options.sort_unstable();
        }
        self.items_per_page = size;
        Some(self.reset_page())
    }

    /// Back to page 1, e.g. after a filter change.
    pub fn reset_page(&mut self) -> PageChange {
        self.current_page = 1;
        self.active_index = 0;
        self.change()
    }

    fn change(&self) -> PageChange {
        PageChange {
            page: self.current_page,
            items_per_page: self.items_per_page,
        }
    }
}

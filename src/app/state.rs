//! Application state definitions
//!
//! Contains the state types for the browse UI: the mode, source toggles,
//! search query, and the grouped/paginated row model computed from the
//! catalog. The catalog itself is immutable; everything here is derived
//! view state.

use crate::catalog::{AppEntry, Catalog, SourceType};
use std::collections::BTreeMap;

/// Number of rows (category headers + app cards) shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Browsing the grouped application list
    Browse,
    /// Editing the search query
    Search,
    /// Help overlay visible
    Help,
}

/// Per-source-type enable toggles.
///
/// A disabled type is excluded from both the visible list and dispatch.
#[derive(Debug, Clone, Copy)]
pub struct SourceToggles {
    pub winget: bool,
    pub choco: bool,
    pub installer: bool,
}

impl Default for SourceToggles {
    fn default() -> Self {
        // All sources start enabled, matching a fresh launch.
        Self {
            winget: true,
            choco: true,
            installer: true,
        }
    }
}

impl SourceToggles {
    /// The enabled source types, in preference order.
    pub fn enabled(&self) -> Vec<SourceType> {
        let mut types = Vec::new();
        if self.winget {
            types.push(SourceType::Winget);
        }
        if self.choco {
            types.push(SourceType::Choco);
        }
        if self.installer {
            types.push(SourceType::Installer);
        }
        types
    }

    /// Flip one toggle.
    pub fn toggle(&mut self, ty: SourceType) {
        match ty {
            SourceType::Winget => self.winget = !self.winget,
            SourceType::Choco => self.choco = !self.choco,
            SourceType::Installer => self.installer = !self.installer,
        }
    }

    /// Whether a source type is currently enabled.
    pub fn is_enabled(&self, ty: SourceType) -> bool {
        match ty {
            SourceType::Winget => self.winget,
            SourceType::Choco => self.choco,
            SourceType::Installer => self.installer,
        }
    }
}

/// One row of the flattened browse list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A category header.
    Category(String),
    /// An application card; the index points into the catalog entries.
    App(usize),
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// The immutable catalog loaded at startup
    pub catalog: Catalog,
    /// Source type filter toggles
    pub toggles: SourceToggles,
    /// Free-text search query (case-insensitive substring match)
    pub search_query: String,
    /// Current page index (0-based)
    pub current_page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Selected row within the current page
    pub selected_row: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether the status message reports a failure
    pub status_is_error: bool,
    /// Downloads currently in flight
    pub downloads_in_flight: usize,
}

impl AppState {
    /// Create the initial state for a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        let mut state = Self {
            mode: AppMode::Browse,
            catalog,
            toggles: SourceToggles::default(),
            search_query: String::new(),
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            selected_row: 0,
            status_message: "Welcome to WinTUI".to_string(),
            status_is_error: false,
            downloads_in_flight: 0,
        };
        state.snap_selection();
        state
    }

    /// The full filtered, grouped, flattened row list.
    ///
    /// Entries are kept when at least one of their sources is enabled and
    /// they match the search query. Categories sort lexicographically;
    /// within a category, catalog order is preserved. Pagination and
    /// rendering both read from this one list, so the page count always
    /// agrees with what is displayed.
    pub fn visible_rows(&self) -> Vec<Row> {
        let enabled = self.toggles.enabled();
        let mut grouped: BTreeMap<&str, Vec<usize>> = BTreeMap::new();

        for (index, entry) in self.catalog.entries().iter().enumerate() {
            if !entry.matches_sources(&enabled) {
                continue;
            }
            if !entry.matches_query(&self.search_query) {
                continue;
            }
            grouped.entry(entry.category.as_str()).or_default().push(index);
        }

        let mut rows = Vec::new();
        for (category, indices) in grouped {
            rows.push(Row::Category(category.to_string()));
            rows.extend(indices.into_iter().map(Row::App));
        }
        rows
    }

    /// Total number of pages for the current filtered view, at least 1.
    pub fn page_count(&self) -> usize {
        let total = self.visible_rows().len();
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size)
        }
    }

    /// The rows of the current page.
    pub fn page_rows(&self) -> Vec<Row> {
        let rows = self.visible_rows();
        let start = self.current_page * self.page_size;
        let end = (start + self.page_size).min(rows.len());
        if start >= rows.len() {
            Vec::new()
        } else {
            rows[start..end].to_vec()
        }
    }

    /// Advance to the next page if one exists.
    pub fn next_page(&mut self) {
        if self.current_page + 1 < self.page_count() {
            self.current_page += 1;
            self.snap_selection();
        }
    }

    /// Go back to the previous page if there is one.
    pub fn prev_page(&mut self) {
        if self.current_page > 0 {
            self.current_page -= 1;
            self.snap_selection();
        }
    }

    /// Move the selection to the next application row on the page.
    pub fn select_next(&mut self) {
        let rows = self.page_rows();
        let mut index = self.selected_row;
        while index + 1 < rows.len() {
            index += 1;
            if matches!(rows[index], Row::App(_)) {
                self.selected_row = index;
                return;
            }
        }
    }

    /// Move the selection to the previous application row on the page.
    pub fn select_prev(&mut self) {
        let rows = self.page_rows();
        let mut index = self.selected_row;
        while index > 0 {
            index -= 1;
            if matches!(rows[index], Row::App(_)) {
                self.selected_row = index;
                return;
            }
        }
    }

    /// The catalog entry currently selected, if the selection sits on an
    /// application row.
    pub fn selected_entry(&self) -> Option<&AppEntry> {
        let rows = self.page_rows();
        match rows.get(self.selected_row) {
            Some(Row::App(index)) => self.catalog.entries().get(*index),
            _ => None,
        }
    }

    /// Flip a source toggle and re-anchor the view.
    pub fn toggle_source(&mut self, ty: SourceType) {
        self.toggles.toggle(ty);
        self.reset_view();
    }

    /// Replace the search query and re-anchor the view.
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.reset_view();
    }

    /// Record a status message for the status line.
    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = message.into();
        self.status_is_error = is_error;
    }

    /// Jump back to the first page and snap the selection. Called whenever
    /// the filtered view changes shape.
    fn reset_view(&mut self) {
        self.current_page = 0;
        self.selected_row = 0;
        self.snap_selection();
    }

    /// Ensure the selection sits on an application row when one exists on
    /// the current page.
    fn snap_selection(&mut self) {
        let rows = self.page_rows();
        if rows.is_empty() {
            self.selected_row = 0;
            return;
        }
        if self.selected_row >= rows.len()
            || !matches!(rows[self.selected_row], Row::App(_))
        {
            self.selected_row = rows
                .iter()
                .position(|row| matches!(row, Row::App(_)))
                .unwrap_or(0);
        }
    }
}

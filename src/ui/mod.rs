//! User interface rendering module
//!
//! Organized into submodules:
//! - `header` - Title bar, search line, status line, and navigation bar
//! - `browser` - Source toggle panel, grouped application list, help overlay

mod browser;
mod header;

use crate::app::{AppMode, AppState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer for the application
///
/// Main entry point for rendering; delegates to the submodules for the
/// individual regions.
#[derive(Default)]
pub struct UiRenderer;

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + search
                Constraint::Min(1),    // Body
                Constraint::Length(3), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_title_bar(f, main_chunks[0], state);

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(26), // Source toggle panel
                Constraint::Min(1),     // Application list
            ])
            .split(main_chunks[1]);

        browser::render_sources_panel(f, body_chunks[0], state);
        browser::render_app_list(f, body_chunks[1], state);

        header::render_status_line(f, main_chunks[2], state);
        header::render_nav_bar(f, main_chunks[3], state);

        if state.mode == AppMode::Help {
            browser::render_help_overlay(f);
        }
    }
}

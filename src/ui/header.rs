//! Title bar, search line, status line, and navigation bar rendering.

use crate::app::{AppMode, AppState};
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar with the search query and page indicator.
pub fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let search_style = if state.mode == AppMode::Search {
        Style::default().fg(Colors::ACCENT_LIGHT)
    } else {
        Styles::hint()
    };

    let search_text = if state.search_query.is_empty() && state.mode != AppMode::Search {
        "press / to search".to_string()
    } else {
        format!("search: {}_", state.search_query)
    };

    let line = Line::from(vec![
        Span::styled(" WinTUI ", Styles::title()),
        Span::styled("| ", Styles::hint()),
        Span::styled(search_text, search_style),
        Span::styled(
            format!("  |  Page {} / {}", state.current_page + 1, state.page_count()),
            Styles::body(),
        ),
    ]);

    let widget = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Colors::ACCENT))
                .title(" Program Installer "),
        )
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}

/// Render the status line reporting the last action outcome.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.status_is_error {
        Styles::status_err()
    } else {
        Styles::status_ok()
    };

    let mut message = state.status_message.clone();
    if state.downloads_in_flight > 0 {
        message.push_str(&format!(
            "  ({} download{} in progress)",
            state.downloads_in_flight,
            if state.downloads_in_flight == 1 { "" } else { "s" }
        ));
    }

    let widget = Paragraph::new(Line::from(Span::styled(message, style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::ACCENT))
            .title(" Status "),
    );
    f.render_widget(widget, area);
}

/// Render the bottom navigation bar with mode-specific key hints.
pub fn render_nav_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.mode {
        AppMode::Browse => {
            " ↑/↓ select | ←/→ page | Enter install | / search | w/c/d sources | ? help | q quit "
        }
        AppMode::Search => " type to filter | Enter/Esc done ",
        AppMode::Help => " press any key to close help ",
    };

    let widget = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .style(Styles::hint());
    f.render_widget(widget, area);
}

//! Source toggle panel, grouped application list, and help overlay.

use crate::app::{AppState, Row};
use crate::catalog::SourceType;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

/// Render the source toggle panel.
pub fn render_sources_panel(f: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = SourceType::iter()
        .map(|ty| {
            let enabled = state.toggles.is_enabled(ty);
            let marker = if enabled { "[x]" } else { "[ ]" };
            let key = match ty {
                SourceType::Winget => 'w',
                SourceType::Choco => 'c',
                SourceType::Installer => 'd',
            };
            let style = if enabled {
                Styles::toggle_on()
            } else {
                Styles::toggle_off()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} {}", marker, ty.label()), style),
                Span::styled(format!(" ({})", key), Styles::hint()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::ACCENT))
            .title(" Select Source "),
    );
    f.render_widget(list, area);
}

/// Render the grouped, paginated application list.
pub fn render_app_list(f: &mut Frame, area: Rect, state: &AppState) {
    let rows = state.page_rows();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Colors::ACCENT))
        .title(" Applications ");

    if rows.is_empty() {
        let empty = Paragraph::new("No applications match the current filters")
            .style(Styles::hint())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| match row {
            Row::Category(name) => {
                ListItem::new(Line::from(Span::styled(format!(" {} ", name), Styles::title())))
            }
            Row::App(entry_index) => {
                let entry = &state.catalog.entries()[*entry_index];
                let selected = row_index == state.selected_row;

                let name_style = if selected { Styles::selected() } else { Styles::body() };
                let tags: Vec<String> = entry
                    .sources
                    .iter()
                    .map(|s| s.source_type().to_string())
                    .collect();

                let mut spans = vec![
                    Span::styled(format!("   {}", entry.name), name_style),
                    Span::styled(format!("  [{}]", tags.join(", ")), Styles::hint()),
                ];
                if !entry.description.is_empty() {
                    spans.push(Span::styled(
                        format!("  {}", entry.description),
                        Styles::hint(),
                    ));
                }
                ListItem::new(Line::from(spans))
            }
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}

/// Render the centered help overlay on top of the browse view.
pub fn render_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled("Keys", Styles::title())),
        Line::from(""),
        Line::from("  ↑/↓ or j/k     move selection"),
        Line::from("  ←/→ or h/l     previous / next page"),
        Line::from("  Enter or i     install the selected application"),
        Line::from("  /              edit the search filter"),
        Line::from("  w, c, d        toggle winget / Chocolatey / direct download"),
        Line::from("  u              update the winget client"),
        Line::from("  r              refresh winget sources"),
        Line::from("  R              reset winget sources (force)"),
        Line::from("  b              install Chocolatey if missing"),
        Line::from("  q or Esc       quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Installs run in their own terminal window; WinTUI only starts them.",
            Styles::hint(),
        )),
    ];

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Colors::ACCENT))
            .title(" Help "),
    );
    f.render_widget(widget, area);
}

/// Compute a centered rectangle taking the given percentages of the frame.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

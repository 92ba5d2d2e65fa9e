//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and styles used throughout the
//! application. The palette is the product's orange-on-dark scheme.

#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary dark background
    pub const BG_PRIMARY: Color = Color::Rgb(34, 34, 34);

    /// Card/panel background
    pub const BG_CARD: Color = Color::Rgb(41, 41, 41);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::Rgb(221, 221, 221);

    /// Secondary/muted text color
    pub const FG_MUTED: Color = Color::DarkGray;

    /// Primary accent - borders, titles, category headers, selections
    pub const ACCENT: Color = Color::Rgb(255, 136, 0);

    /// Lighter accent for hover/selected emphasis
    pub const ACCENT_LIGHT: Color = Color::Rgb(255, 153, 0);

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Error/danger feedback
    pub const ERROR: Color = Color::Red;

    /// Warning feedback
    pub const WARNING: Color = Color::Yellow;
}

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Title and category header style
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Regular body text
    pub fn body() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted hint text
    pub fn hint() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Selected list row
    pub fn selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Status line for success messages
    pub fn status_ok() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Status line for error messages
    pub fn status_err() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Enabled source toggle
    pub fn toggle_on() -> Style {
        Style::default()
            .fg(Colors::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Disabled source toggle
    pub fn toggle_off() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }
}

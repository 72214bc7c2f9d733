//! Colour palette and text styles used across the UI.

use ratatui::style::{Color, Modifier, Style};

/// Central theme — change colours here and they propagate everywhere.
pub struct Theme;

impl Theme {
    // ── page content ───────────────────────────────────────────
    pub fn heading_style() -> Style {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn paragraph_style() -> Style {
        Style::default().fg(Color::White)
    }

    /// Solid blocks alternate colour down the page so motion is easy
    /// to follow.
    pub fn block_style(index: usize) -> Style {
        const BLOCK_COLORS: &[Color] = &[Color::Cyan, Color::Magenta, Color::Yellow];
        Style::default().bg(BLOCK_COLORS[index % BLOCK_COLORS.len()])
    }

    // ── chrome ─────────────────────────────────────────────────
    pub fn scrollbar_style() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn status_bar_style() -> Style {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    }

    pub fn status_value_style() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }
}

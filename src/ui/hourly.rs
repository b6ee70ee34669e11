//! Hourly forecast strip rendering
//!
//! Lays out the next hours as equal-width columns, each showing the hour
//! label, a condition glyph, and the temperature.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::conditions;
use crate::timefmt;

use super::icon_glyph;

/// Number of hourly columns shown
const HOURLY_COLUMNS: usize = 8;

/// Renders the hourly strip
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Hourly");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = app.forecast.as_ref() else {
        return;
    };
    let slots = &snapshot.hourly;
    if slots.is_empty() {
        return;
    }

    let shown = slots.len().min(HOURLY_COLUMNS);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, shown as u32); shown])
        .split(inner);

    for (slot, column) in slots.iter().take(shown).zip(columns.iter()) {
        let lines = vec![
            Line::from(timefmt::hour_label(slot.time)),
            Line::from(icon_glyph(conditions::icon_kind(slot.weather_code))),
            Line::from(format!("{:.0}\u{B0}", slot.temperature)),
            Line::from(format!("{:.0}%", slot.humidity)),
        ];
        let cell = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));
        frame.render_widget(cell, *column);
    }
}

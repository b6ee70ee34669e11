//! Daily forecast rows rendering
//!
//! One row per day: day label, condition glyph and description, max/min
//! temperatures, precipitation, and peak wind.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::conditions;
use crate::timefmt;

use super::icon_glyph;

/// Renders the daily forecast rows
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Daily");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(snapshot) = app.forecast.as_ref() else {
        return;
    };

    let mut lines = Vec::with_capacity(snapshot.daily.len());
    for (i, slot) in snapshot.daily.iter().enumerate() {
        let label = timefmt::day_label(slot.date, i == 0);
        let label_style = if i == 0 {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", label), label_style),
            Span::raw(format!("{:<3}", icon_glyph(conditions::icon_kind(slot.weather_code)))),
            Span::raw(format!("{:<26}", conditions::describe(slot.weather_code))),
            Span::styled(
                format!("{:>3.0}\u{B0}", slot.temperature_max),
                Style::default().fg(Color::LightRed),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{:>3.0}\u{B0}", slot.temperature_min),
                Style::default().fg(Color::Blue),
            ),
            Span::raw(format!("  {:>5.1} mm", slot.precipitation)),
            Span::raw(format!("  {:>3.0} km/h", slot.wind_speed_max)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

//! Dashboard screen rendering
//!
//! Composes the full dashboard: header with place label and clock, the
//! search bar, current conditions, the hourly strip, the daily rows, and
//! the status line. The search dropdown is rendered last so it overlays
//! the panels beneath it.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::conditions;
use crate::timefmt;
use crate::wind;

use super::{background_color, daily, hourly, icon_glyph, search_bar};

/// Renders the dashboard screen
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // search input
            Constraint::Length(7), // current conditions
            Constraint::Length(6), // hourly strip
            Constraint::Min(5),    // daily rows
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    search_bar::render_input(frame, chunks[1], app);
    render_current(frame, chunks[2], app);
    hourly::render(frame, chunks[3], app);
    daily::render(frame, chunks[4], app);
    render_status(frame, chunks[5], app);

    // Drawn last so the candidate list overlays the panels below the input.
    search_bar::render_dropdown(frame, chunks[1], app);
}

/// Renders the header: place label on the left, wall clock on the right
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Skycast");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = app
        .search
        .selected_label
        .as_deref()
        .unwrap_or("No location selected");
    let place = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(place, inner);

    let clock = Paragraph::new(timefmt::clock_label(app.clock.time()))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Cyan));
    frame.render_widget(clock, inner);
}

/// Renders the current conditions panel
fn render_current(frame: &mut Frame, area: Rect, app: &App) {
    let Some(snapshot) = app.forecast.as_ref() else {
        let placeholder = Paragraph::new("No forecast yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Current"));
        frame.render_widget(placeholder, area);
        return;
    };

    let current = &snapshot.current;
    let accent = background_color(conditions::background_kind(current.weather_code));

    let lines = vec![
        Line::from(vec![
            Span::raw(icon_glyph(conditions::icon_kind(current.weather_code))),
            Span::raw("  "),
            Span::styled(
                format!("{:.0}\u{B0}C", current.temperature),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(conditions::describe(current.weather_code)),
        ]),
        Line::from(format!("Humidity {:.0}%", current.humidity)),
        Line::from(format!(
            "Wind {:.0} km/h {}",
            current.wind_speed,
            wind::compass_direction(current.wind_direction)
        )),
        Line::from(Span::styled(
            format!(
                "{} ({})",
                snapshot.location.timezone, snapshot.location.timezone_abbreviation
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Current")
            .border_style(Style::default().fg(accent)),
    );
    frame.render_widget(panel, area);
}

/// Renders the status line: error banner, loading note, or key hints
fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let status = if let Some(error) = app.request.error.as_deref() {
        Paragraph::new(error).style(Style::default().fg(Color::Red))
    } else if app.request.loading {
        Paragraph::new("Fetching forecast...").style(Style::default().fg(Color::Cyan))
    } else {
        Paragraph::new("Type to search a city \u{B7} Enter to select \u{B7} Esc to quit")
            .style(Style::default().fg(Color::DarkGray))
    };
    frame.render_widget(status, area);
}

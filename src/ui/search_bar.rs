//! Search bar and candidate dropdown rendering
//!
//! The input box sits in the fixed layout; the dropdown is rendered after
//! every other panel so it overlays whatever sits beneath the input while
//! candidates are visible.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Maximum candidate rows shown in the dropdown
const DROPDOWN_ROWS: usize = 5;

/// Renders the search input box
pub fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(app.search.query.as_str())];
    // Trailing cursor mark while the user is typing.
    if !app.search.query.is_empty() {
        spans.push(Span::styled("\u{2590}", Style::default().fg(Color::DarkGray)));
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search city"),
    );
    frame.render_widget(input, area);
}

/// Renders the candidate dropdown under the input box
pub fn render_dropdown(frame: &mut Frame, input_area: Rect, app: &App) {
    let candidates = &app.search.candidates;
    if candidates.is_empty() {
        return;
    }

    let rows = candidates.len().min(DROPDOWN_ROWS);
    let area = Rect {
        x: input_area.x,
        y: input_area.y + input_area.height,
        width: input_area.width,
        height: (rows as u16 + 2).min(frame.area().height.saturating_sub(input_area.bottom())),
    };
    if area.height < 3 {
        return;
    }

    let mut lines = Vec::with_capacity(rows);
    for (i, place) in candidates.iter().take(rows).enumerate() {
        let style = if i == app.search.highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(place.label(), style)));
    }

    let dropdown = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(dropdown, area);
}

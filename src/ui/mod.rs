//! UI rendering module for Skycast
//!
//! This module contains all the rendering logic for the terminal user
//! interface, using the ratatui library for TUI components.

pub mod daily;
pub mod dashboard;
pub mod hourly;
pub mod search_bar;

pub use dashboard::render as render_dashboard;

use ratatui::style::Color;

use crate::conditions::{BackgroundKind, IconKind};

/// Icon category to glyph mapping
pub(crate) fn icon_glyph(kind: IconKind) -> &'static str {
    match kind {
        IconKind::Clear => "\u{2600}",        // ☀
        IconKind::PartlyCloudy => "\u{26C5}", // ⛅
        IconKind::Overcast => "\u{2601}",     // ☁
        IconKind::Fog => "\u{1F32B}",         // 🌫
        IconKind::Drizzle => "\u{1F326}",     // 🌦
        IconKind::Rain => "\u{1F327}",        // 🌧
        IconKind::Snow => "\u{2744}",         // ❄
        IconKind::Showers => "\u{1F326}",     // 🌦
        IconKind::Thunderstorm => "\u{26C8}", // ⛈
        IconKind::Unknown => "\u{2601}",      // ☁
    }
}

/// Background category to accent color mapping
pub(crate) fn background_color(kind: BackgroundKind) -> Color {
    match kind {
        BackgroundKind::Clear => Color::Yellow,
        BackgroundKind::Cloudy => Color::Gray,
        BackgroundKind::Rain => Color::Blue,
        BackgroundKind::Snow => Color::White,
        BackgroundKind::Thunderstorm => Color::Magenta,
        BackgroundKind::Default => Color::Cyan,
    }
}

//! UI color tokens and the bank/heatmap color mappings.
//!
//! Chrome colors (borders, hints, statuses) are fixed tokens; data colors
//! come from the core palette so every chart colors banks identically.
//! Heatmap cells use two-endpoint ramps: blues for physical risk,
//! orange-red for transition risk.

use bancolab_core::palette;
use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Brand color of a bank, falling back to the palette default for names
/// outside the fixed domain.
pub fn bank_color(bank: &str) -> Color {
    hex_color(palette::color_for(bank))
}

fn hex_color(hex: &str) -> Color {
    match palette::hex_to_rgb(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Gray,
    }
}

/// Blues ramp for physical-risk intensity in [0, 1].
pub fn physical_heat(value: f64) -> Color {
    lerp_color((222, 235, 247), (8, 48, 107), value)
}

/// Orange-red ramp for transition-risk intensity in [0, 1].
pub fn transition_heat(value: f64) -> Color {
    lerp_color((255, 245, 235), (127, 39, 4), value)
}

fn lerp_color(low: (u8, u8, u8), high: (u8, u8, u8), value: f64) -> Color {
    let t = value.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Color::Rgb(
        channel(low.0, high.0),
        channel(low.1, high.1),
        channel(low.2, high.2),
    )
}

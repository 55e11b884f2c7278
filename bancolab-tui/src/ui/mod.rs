//! Top-level UI layout — navigation sidebar, active section, status bar.

pub mod comparison_panel;
pub mod esg_panel;
pub mod financials_panel;
pub mod help_panel;
pub mod prices_panel;
pub mod risks_panel;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use bancolab_core::views::EmptyResultWarning;

use crate::app::{AppState, Section};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    // Split main: sidebar + active section.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(chunks[0]);

    sidebar::render(f, columns[0], app);
    draw_section(f, columns[1], app);
    status_bar::render(f, chunks[1], app);
}

/// Draw the active section with its border.
fn draw_section(f: &mut Frame, area: Rect, app: &AppState) {
    let section = app.section;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(format!(" {} [{}] ", section.label(), section.index() + 1))
        .title_style(theme::panel_title());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match section {
        Section::Prices => prices_panel::render(f, inner, app),
        Section::Financials => financials_panel::render(f, inner, app),
        Section::Esg => esg_panel::render(f, inner, app),
        Section::Comparison => comparison_panel::render(f, inner, app),
        Section::Risks => risks_panel::render(f, inner, app),
        Section::Help => help_panel::render(f, inner, app),
    }
}

/// Neutral notice for an empty filtered view — informational, not an error.
pub fn render_no_data(f: &mut Frame, area: Rect, warning: &EmptyResultWarning) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(warning.to_string(), theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

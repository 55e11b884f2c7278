//! Navigation sidebar — section list and bank selector.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Section};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border())
        .title(" Navegación ")
        .title_style(theme::panel_title());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled("Sección", theme::accent_bold())));
    for i in 0..6 {
        let section = Section::from_index(i).unwrap();
        let marker = if section == app.section { "▸" } else { " " };
        let style = if section == app.section {
            theme::accent()
        } else {
            theme::secondary()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {} {}", i + 1, section.label()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Banco (j/k)", theme::accent_bold())));
    for bank in app.store.banks() {
        let selected = bank == app.selected_bank();
        let marker = if selected { "▸" } else { " " };
        let mut style = Style::default().fg(theme::bank_color(bank));
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(Span::styled(format!("{marker} {bank}"), style)));
    }

    // Context selectors for the sections that use them.
    match app.section {
        Section::Esg => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Proveedor (p)", theme::accent_bold())));
            let selected = app.selected_provider();
            for provider in app.store.rating_providers() {
                let is_selected = selected.as_deref() == Some(provider);
                let marker = if is_selected { "▸" } else { " " };
                let style = if is_selected {
                    theme::accent()
                } else {
                    theme::secondary()
                };
                lines.push(Line::from(Span::styled(format!("{marker} {provider}"), style)));
            }
        }
        Section::Risks => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Horizonte (t)", theme::accent_bold())));
            for horizon in bancolab_core::domain::Horizon::ALL {
                let is_selected = horizon == app.horizon;
                let marker = if is_selected { "▸" } else { " " };
                let style = if is_selected {
                    theme::accent()
                } else {
                    theme::secondary()
                };
                lines.push(Line::from(Span::styled(
                    format!("{marker} {} ({})", horizon.label(), horizon.description()),
                    style,
                )));
            }
        }
        _ => {}
    }

    f.render_widget(Paragraph::new(lines), inner);
}

//! Sección 5 — Riesgos: intensity heatmaps by (risk type × bank), split
//! into physical and transition risks for the selected horizon.

use std::collections::HashMap;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use bancolab_core::domain::RiskClass;
use bancolab_core::views::EmptyResultWarning;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_heatmap(f, halves[0], app, RiskClass::Physical);
    render_heatmap(f, halves[1], app, RiskClass::Transition);
}

fn render_heatmap(f: &mut Frame, area: Rect, app: &AppState, class: RiskClass) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::panel_border())
        .title(format!(
            " {} — Horizonte {} ",
            class.label(),
            app.horizon.label()
        ))
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = app.store.risk_cells(app.horizon, class);
    if cells.is_empty() {
        let warning = EmptyResultWarning::new(format!(
            "{} en horizonte {}",
            class.label(),
            app.horizon.label()
        ));
        super::render_no_data(f, inner, &warning);
        return;
    }

    let types = app.store.risk_types(app.horizon, class);
    let banks = app.store.risk_banks(app.horizon, class);

    let mut values: HashMap<(&str, &str), Option<f64>> = HashMap::new();
    for cell in &cells {
        values.insert((cell.bank.as_str(), cell.risk_type.as_str()), cell.value);
    }

    let header = Row::new(
        std::iter::once(Cell::from("Banco").style(theme::muted()))
            .chain(types.iter().map(|t| Cell::from(truncate(t, 14)).style(theme::muted())))
            .collect::<Vec<Cell>>(),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = banks
        .iter()
        .map(|bank| {
            let mut row_cells =
                vec![Cell::from(bank.to_string()).style(Style::default().fg(theme::bank_color(bank)))];
            for risk_type in &types {
                row_cells.push(heat_cell(values.get(&(*bank, *risk_type)).copied().flatten(), class));
            }
            Row::new(row_cells)
        })
        .collect();

    let mut widths = vec![Constraint::Length(12)];
    widths.extend(types.iter().map(|_| Constraint::Length(14)));

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, inner);
}

/// A colored intensity cell; missing values render blank.
fn heat_cell(value: Option<f64>, class: RiskClass) -> Cell<'static> {
    let Some(value) = value else {
        return Cell::from("");
    };
    let background = match class {
        RiskClass::Physical => theme::physical_heat(value),
        RiskClass::Transition => theme::transition_heat(value),
    };
    // Dark ramp ends need light text and vice versa.
    let foreground = if value > 0.5 { Color::White } else { Color::Black };
    Cell::from(format!(" {value:.2}")).style(Style::default().bg(background).fg(foreground))
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{head}…")
    }
}

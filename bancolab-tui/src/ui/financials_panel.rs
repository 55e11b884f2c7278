//! Sección 2 — Financieros: ROE, net income and revenue by year.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use bancolab_core::domain::{FinancialRecord, Year};
use bancolab_core::views::EmptyResultWarning;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let bank = app.selected_bank();
    let rows = app.store.financials_for(bank);

    if rows.is_empty() {
        let warning = EmptyResultWarning::new(format!("indicadores financieros de {bank}"));
        super::render_no_data(f, area, &warning);
        return;
    }

    let thirds = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_indicator(f, thirds[0], bank, "ROE (%)", &rows, |r| r.roe);
    render_indicator(f, thirds[1], bank, "Beneficio Neto", &rows, |r| r.net_income);
    render_indicator(f, thirds[2], bank, "Ingresos", &rows, |r| r.revenue);
}

fn render_indicator(
    f: &mut Frame,
    area: Rect,
    bank: &str,
    title: &str,
    rows: &[&FinancialRecord],
    select: impl Fn(&FinancialRecord) -> Option<f64>,
) {
    let points: Vec<(Year, f64)> = rows
        .iter()
        .filter_map(|r| select(r).map(|v| (r.year, v)))
        .collect();

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::panel_border())
        .title(format!(" Evolución de {title} "))
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    if points.is_empty() {
        let warning = EmptyResultWarning::new(format!("{title} de {bank}"));
        super::render_no_data(f, inner, &warning);
        return;
    }

    // BarChart heights are u64; scale the values against the maximum and
    // keep the real number as the printed text.
    let max = points.iter().map(|&(_, v)| v).fold(f64::MIN, f64::max);
    let bars: Vec<Bar> = points
        .iter()
        .map(|&(year, value)| {
            Bar::default()
                .label(Line::from(year.to_string()))
                .value(scale_bar(value, max))
                .text_value(format!("{value:.1}"))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(2)
        .bar_style(Style::default().fg(theme::bank_color(bank)))
        .value_style(theme::secondary())
        .label_style(theme::muted());

    f.render_widget(chart, inner);
}

/// Map a value into 0..=100 against the column maximum. Values at or below
/// zero render as flat bars; the printed text still carries the real number.
fn scale_bar(value: f64, max: f64) -> u64 {
    if value <= 0.0 || max <= 0.0 {
        return 0;
    }
    ((value / max) * 100.0).round() as u64
}

//! Sección 1 — Cotizaciones: daily close line chart for the selected bank.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType};
use ratatui::Frame;

use bancolab_core::views::EmptyResultWarning;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let bank = app.selected_bank();
    let points = app.store.price_points(bank);

    if points.is_empty() {
        let warning = EmptyResultWarning::new(format!("cotizaciones de {bank}"));
        super::render_no_data(f, area, &warning);
        return;
    }

    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, &(_, price))| (i as f64, price))
        .collect();

    let min_y = data.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let max_y = data
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    let padding = (max_y - min_y).abs().max(0.01) * 0.05;
    let y_min = min_y - padding;
    let y_max = max_y + padding;
    let x_max = data.len().saturating_sub(1) as f64;

    let first_date = points.first().map(|&(d, _)| d.to_string()).unwrap_or_default();
    let last_date = points.last().map(|&(d, _)| d.to_string()).unwrap_or_default();

    let dataset = Dataset::default()
        .name(bank.to_string())
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::bank_color(bank)))
        .graph_type(GraphType::Line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .x_axis(
            Axis::default()
                .title(Span::styled("Fecha", theme::muted()))
                .style(theme::muted())
                .bounds([0.0, x_max.max(1.0)])
                .labels(vec![
                    Span::styled(first_date, theme::muted()),
                    Span::styled(last_date, theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Precio", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.2}"), theme::muted()),
                    Span::styled(format!("{y_max:.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

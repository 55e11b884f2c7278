//! Sección 4 — Comparativa: multi-bank year charts for weighted GAR,
//! mean ROE and annual stock returns.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use bancolab_core::domain::Year;
use bancolab_core::views::EmptyResultWarning;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let thirds = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let store = &app.store;
    let gar = per_bank_series(app, |bank| store.weighted_gar_series(bank));
    let roe = per_bank_series(app, |bank| store.roe_series(bank));
    let returns = per_bank_series(app, |bank| store.return_series(bank));

    render_year_chart(f, thirds[0], "Evolución del GAR Ponderado (%)", &gar);
    render_year_chart(f, thirds[1], "Evolución del ROE (%)", &roe);
    render_year_chart(f, thirds[2], "Rentabilidad Bursátil anual", &returns);
}

type BankSeries = (String, Vec<(f64, f64)>);

fn per_bank_series(app: &AppState, series: impl Fn(&str) -> Vec<(Year, f64)>) -> Vec<BankSeries> {
    app.store
        .banks()
        .iter()
        .map(|bank| {
            let points = series(bank)
                .into_iter()
                .map(|(year, value)| (year as f64, value))
                .collect();
            (bank.clone(), points)
        })
        .collect()
}

fn render_year_chart(f: &mut Frame, area: Rect, title: &str, series: &[BankSeries]) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::panel_border())
        .title(format!(" {title} "))
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let all_points: Vec<(f64, f64)> = series.iter().flat_map(|(_, pts)| pts.iter().copied()).collect();
    if all_points.is_empty() {
        let warning = EmptyResultWarning::new(title.to_string());
        super::render_no_data(f, inner, &warning);
        return;
    }

    let min_x = all_points.iter().map(|&(x, _)| x).fold(f64::INFINITY, f64::min);
    let max_x = all_points
        .iter()
        .map(|&(x, _)| x)
        .fold(f64::NEG_INFINITY, f64::max);
    let min_y = all_points.iter().map(|&(_, y)| y).fold(f64::INFINITY, f64::min);
    let max_y = all_points
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    let padding = (max_y - min_y).abs().max(0.01) * 0.1;
    let y_min = min_y - padding;
    let y_max = max_y + padding;

    let datasets: Vec<Dataset> = series
        .iter()
        .filter(|(_, points)| !points.is_empty())
        .map(|(bank, points)| {
            Dataset::default()
                .name(bank.clone())
                .marker(symbols::Marker::Braille)
                .style(Style::default().fg(theme::bank_color(bank)))
                .graph_type(GraphType::Line)
                .data(points)
        })
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Año", theme::muted()))
                .style(theme::muted())
                .bounds([min_x - 0.5, max_x + 0.5])
                .labels(vec![
                    Span::styled(format!("{min_x:.0}"), theme::muted()),
                    Span::styled(format!("{max_x:.0}"), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.2}"), theme::muted()),
                    Span::styled(format!("{y_max:.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, inner);
}

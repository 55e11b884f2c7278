//! Sección 3 — ESG: GAR scorecards, rating scorecards, emissions tables.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use bancolab_core::views::EmptyResultWarning;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(40),
        ])
        .split(area);

    render_gar_scorecards(f, chunks[0], app);
    render_ratings(f, chunks[1], app);
    render_emissions(f, chunks[2], app);
}

/// GAR per type and year, big numbers in the bank's color.
fn render_gar_scorecards(f: &mut Frame, area: Rect, app: &AppState) {
    let bank = app.selected_bank();
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::panel_border())
        .title(" GAR por tipo y año ")
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cards = app.store.gar_scorecards(bank);
    if cards.is_empty() {
        let warning = EmptyResultWarning::new(format!("GAR de {bank}"));
        super::render_no_data(f, inner, &warning);
        return;
    }

    let value_style = Style::default()
        .fg(theme::bank_color(bank))
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    let mut current_type: Option<&str> = None;
    let mut row: Vec<Span> = Vec::new();
    for card in &cards {
        if current_type != Some(card.gar_type.as_str()) {
            if !row.is_empty() {
                lines.push(Line::from(std::mem::take(&mut row)));
            }
            lines.push(Line::from(Span::styled(
                card.gar_type.clone(),
                theme::secondary(),
            )));
            current_type = Some(card.gar_type.as_str());
        }
        // gar_scorecards only returns rows with a present value.
        let value = card.gar.unwrap_or_default();
        row.push(Span::styled(format!("  {value:.1}%"), value_style));
        row.push(Span::styled(format!(" ({})", card.year), theme::muted()));
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }

    f.render_widget(Paragraph::new(lines), inner);
}

/// Verbatim ESG scores from the selected provider.
fn render_ratings(f: &mut Frame, area: Rect, app: &AppState) {
    let bank = app.selected_bank();
    let provider = app.selected_provider();

    let title = match &provider {
        Some(p) => format!(" Ratings ESG — {p} "),
        None => " Ratings ESG ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme::panel_border())
        .title(title)
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(provider) = provider else {
        let warning = EmptyResultWarning::new("ratings ESG");
        super::render_no_data(f, inner, &warning);
        return;
    };

    let rows = app.store.ratings_for(bank, &provider);
    if rows.is_empty() {
        let warning = EmptyResultWarning::new(format!("{bank} con proveedor {provider}"));
        super::render_no_data(f, inner, &warning);
        return;
    }

    let score_style = Style::default()
        .fg(theme::bank_color(bank))
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = Vec::new();
    for record in rows {
        spans.push(Span::styled(format!("  {}", record.score), score_style));
        spans.push(Span::styled(format!(" Año {}", record.year), theme::muted()));
    }

    let lines = vec![Line::from(""), Line::from(spans)];
    f.render_widget(Paragraph::new(lines), inner);
}

/// One emissions table per year, side by side.
fn render_emissions(f: &mut Frame, area: Rect, app: &AppState) {
    let bank = app.selected_bank();
    let block = Block::default()
        .border_style(theme::panel_border())
        .title(" Emisiones de GEI ")
        .title_style(theme::accent_bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let years = app.store.emission_years(bank);
    if years.is_empty() {
        let warning = EmptyResultWarning::new(format!("emisiones de {bank}"));
        super::render_no_data(f, inner, &warning);
        return;
    }

    let constraints: Vec<Constraint> =
        years.iter().map(|_| Constraint::Ratio(1, years.len() as u32)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    let emissions = app.store.emissions_for(bank);
    for (column, &year) in columns.iter().zip(&years) {
        let rows: Vec<Row> = emissions
            .iter()
            .filter(|r| r.year == year)
            .map(|r| {
                Row::new(vec![
                    Cell::from(r.emission_type.clone()).style(theme::secondary()),
                    Cell::from(format_emission(r.value)).style(theme::accent()),
                ])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Min(16), Constraint::Length(12)])
            .header(
                Row::new(vec![
                    Cell::from(format!("Año {year}")).style(theme::accent_bold()),
                    Cell::from("tCO2e").style(theme::muted()),
                ])
                .bottom_margin(1),
            )
            .column_spacing(1);

        f.render_widget(table, *column);
    }
}

/// Round to whole tonnes and group thousands with dots; missing values
/// render blank rather than crashing the table.
fn format_emission(value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let negative = value < 0.0;
    let mut digits = format!("{:.0}", value.abs());
    let mut grouped = String::new();
    while digits.len() > 3 {
        let tail = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            tail
        } else {
            format!("{tail}.{grouped}")
        };
    }
    let head = digits;
    let joined = if grouped.is_empty() {
        head
    } else {
        format!("{head}.{grouped}")
    };
    if negative {
        format!("-{joined}")
    } else {
        joined
    }
}

//! Bottom status bar — selection summary and last status message.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " 1:Cotizaciones 2:Financieros 3:ESG 4:Comparativa 5:Riesgos 6:Ayuda",
        theme::muted(),
    ));

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        format!("Banco: {}", app.selected_bank()),
        Style::default().fg(theme::bank_color(app.selected_bank())),
    ));

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    let para = Paragraph::new(Line::from(spans));
    f.render_widget(para, area);
}

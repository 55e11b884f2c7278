//! Sección 6 — Ayuda: keyboard shortcuts.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-6", "Switch to section by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle sections forward / back");
    key(&mut lines, "j / k", "Next / previous bank");
    key(&mut lines, "q / Esc", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Sección 3 — ESG");
    key(&mut lines, "p", "Cycle ESG rating provider");
    lines.push(Line::from(""));

    section(&mut lines, "Sección 5 — Riesgos");
    key(&mut lines, "t", "Cycle horizon (CP → MP → LP)");
    lines.push(Line::from(""));

    section(&mut lines, "Data");
    key(&mut lines, "", "All datasets load once at startup; selections");
    key(&mut lines, "", "re-query the cached tables on every key press.");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section(lines: &mut Vec<Line<'_>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key(lines: &mut Vec<Line<'_>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>18}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}

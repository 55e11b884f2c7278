//! Bancolab TUI — terminal dashboard over the bank datasets.
//!
//! Sections (sidebar navigation, one active at a time):
//! 1. Cotizaciones — daily close line chart per bank
//! 2. Financieros — ROE / net income / revenue bar charts
//! 3. ESG — GAR scorecards, rating scorecards, emissions tables
//! 4. Comparativa — multi-bank charts of the derived tables
//! 5. Riesgos — physical/transition heatmaps per horizon
//! 6. Ayuda — keyboard shortcuts
//!
//! The model is synchronous: datasets load once before raw mode, every key
//! press mutates a selection and the next frame re-queries the cached store.

pub mod app;
pub mod input;
pub mod persistence;
pub mod theme;
pub mod ui;

#[cfg(test)]
mod test_helpers;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use bancolab_core::data::DataStore;

use crate::app::AppState;

/// Run the dashboard over an already-loaded store until the user quits.
pub fn run(store: DataStore) -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let state_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bancolab")
        .join("state.json");

    let mut app = AppState::new(store);
    persistence::apply(&mut app, persistence::load(&state_path));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Save selections before exit
    let _ = persistence::save(&state_path, &persistence::extract(&app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render from the cached tables.
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Poll for input (50ms timeout for ~20 FPS tick).
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 3. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

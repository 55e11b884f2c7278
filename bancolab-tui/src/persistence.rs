//! Selection persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use bancolab_core::domain::Horizon;

use crate::app::{AppState, Section};

/// Serializable subset of app state that persists across restarts.
/// The bank and provider are stored by name so a changed column order in
/// the price file cannot silently reselect a different bank.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub section: Section,
    pub bank: Option<String>,
    pub provider: Option<String>,
    pub horizon: Horizon,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            section: Section::Prices,
            bank: None,
            provider: None,
            horizon: Horizon::Cp,
        }
    }
}

/// Load persisted state from disk. Returns defaults if file is missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the live app.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        section: app.section,
        bank: Some(app.selected_bank().to_string()),
        provider: app.selected_provider(),
        horizon: app.horizon,
    }
}

/// Apply persisted state to a freshly constructed app. Names that no longer
/// exist in the loaded data are ignored.
pub fn apply(app: &mut AppState, state: PersistedState) {
    app.section = state.section;
    app.horizon = state.horizon;
    if let Some(bank) = &state.bank {
        app.select_bank(bank);
    }
    if let Some(provider) = &state.provider {
        app.select_provider(provider);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::fixture_store;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("bancolab_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            section: Section::Risks,
            bank: Some("BBVA".into()),
            provider: Some("MSCI".into()),
            horizon: Horizon::Lp,
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.section, Section::Risks);
        assert_eq!(loaded.bank.as_deref(), Some("BBVA"));
        assert_eq!(loaded.horizon, Horizon::Lp);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.section, Section::Prices);
        assert!(loaded.bank.is_none());
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("bancolab_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.section, Section::Prices);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_ignores_names_missing_from_the_data() {
        let mut app = AppState::new(fixture_store());
        apply(
            &mut app,
            PersistedState {
                section: Section::Esg,
                bank: Some("Kutxabank".into()),
                provider: Some("MSCI".into()),
                horizon: Horizon::Mp,
            },
        );
        assert_eq!(app.section, Section::Esg);
        assert_eq!(app.selected_bank(), "Santander");
        assert_eq!(app.horizon, Horizon::Mp);
    }
}

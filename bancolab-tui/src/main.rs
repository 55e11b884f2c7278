//! Standalone dashboard entry point: load the datasets from `./data` (or
//! `$BANCOLAB_DATA`) and hand the store to the UI. The `bancolab` CLI wraps
//! this with config-file handling.

use anyhow::{Context, Result};

use bancolab_core::data::{DataConfig, DataStore};

fn main() -> Result<()> {
    let config = match std::env::var_os("BANCOLAB_DATA") {
        Some(dir) => DataConfig::with_data_dir(dir),
        None => DataConfig::default(),
    };

    let store = DataStore::load(&config)
        .with_context(|| format!("failed to load datasets from {}", config.data_dir.display()))?;

    bancolab_tui::run(store)
}

//! Application state — single-owner, main-thread only.
//!
//! The dashboard is synchronous: the store is loaded once before the
//! terminal enters raw mode, and every key press just changes a selection
//! and re-renders from the cached tables.

use serde::{Deserialize, Serialize};

use bancolab_core::data::DataStore;
use bancolab_core::domain::Horizon;

/// Which dashboard section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Prices,
    Financials,
    Esg,
    Comparison,
    Risks,
    Help,
}

impl Section {
    pub fn index(self) -> usize {
        match self {
            Section::Prices => 0,
            Section::Financials => 1,
            Section::Esg => 2,
            Section::Comparison => 3,
            Section::Risks => 4,
            Section::Help => 5,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Section::Prices),
            1 => Some(Section::Financials),
            2 => Some(Section::Esg),
            3 => Some(Section::Comparison),
            4 => Some(Section::Risks),
            5 => Some(Section::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Prices => "Cotizaciones",
            Section::Financials => "Financieros",
            Section::Esg => "ESG",
            Section::Comparison => "Comparativa",
            Section::Risks => "Riesgos",
            Section::Help => "Ayuda",
        }
    }

    pub fn next(self) -> Section {
        Section::from_index((self.index() + 1) % 6).unwrap()
    }

    pub fn prev(self) -> Section {
        Section::from_index((self.index() + 5) % 6).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// All TUI state. Owns the loaded store; views borrow from it per frame.
pub struct AppState {
    pub store: DataStore,
    pub section: Section,
    pub bank_idx: usize,
    pub provider_idx: usize,
    pub horizon: Horizon,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(store: DataStore) -> Self {
        Self {
            store,
            section: Section::Prices,
            bank_idx: 0,
            provider_idx: 0,
            horizon: Horizon::Cp,
            status_message: None,
            running: true,
        }
    }

    /// Currently selected bank. The loader guarantees at least one bank
    /// column, so the list is never empty.
    pub fn selected_bank(&self) -> &str {
        let banks = self.store.banks();
        banks
            .get(self.bank_idx.min(banks.len().saturating_sub(1)))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn next_bank(&mut self) {
        let count = self.store.banks().len();
        if count > 0 {
            self.bank_idx = (self.bank_idx + 1) % count;
        }
    }

    pub fn prev_bank(&mut self) {
        let count = self.store.banks().len();
        if count > 0 {
            self.bank_idx = (self.bank_idx + count - 1) % count;
        }
    }

    /// Select a bank by name, keeping the current selection when unknown.
    pub fn select_bank(&mut self, bank: &str) {
        if let Some(idx) = self.store.banks().iter().position(|b| b == bank) {
            self.bank_idx = idx;
        }
    }

    /// Currently selected rating provider, if the ratings table has any.
    pub fn selected_provider(&self) -> Option<String> {
        let providers = self.store.rating_providers();
        providers
            .get(self.provider_idx.min(providers.len().saturating_sub(1)))
            .map(|p| p.to_string())
    }

    pub fn next_provider(&mut self) {
        let count = self.store.rating_providers().len();
        if count > 0 {
            self.provider_idx = (self.provider_idx + 1) % count;
        }
    }

    pub fn select_provider(&mut self, provider: &str) {
        if let Some(idx) = self
            .store
            .rating_providers()
            .iter()
            .position(|p| *p == provider)
        {
            self.provider_idx = idx;
        }
    }

    pub fn next_horizon(&mut self) {
        self.horizon = self.horizon.next();
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), StatusLevel::Warning));
    }
}

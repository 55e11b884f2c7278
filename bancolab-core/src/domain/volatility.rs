//! Monthly volatility per bank.
//!
//! Loaded and schema-validated like every other dataset, but consumed by no
//! dashboard section — only the `check`/`summary` reports touch it.

use serde::{Deserialize, Serialize};

use super::{Bank, Year};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolatilityRecord {
    pub bank: Bank,
    pub year: Year,
    /// Month number, 1–12.
    pub month: u32,
    pub value: Option<f64>,
}

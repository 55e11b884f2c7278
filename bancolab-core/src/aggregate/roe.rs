//! Mean ROE per bank-year.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Bank, FinancialRecord, Year};

use super::mean_present;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoePoint {
    pub bank: Bank,
    pub year: Year,
    pub roe: Option<f64>,
}

/// Average ROE over all financial rows per (bank, year). With a clean
/// source this is a pass-through — the mean only matters when duplicate
/// (bank, year) rows slipped into the export. Output sorted by bank, year.
pub fn mean_roe(records: &[FinancialRecord]) -> Vec<RoePoint> {
    let mut groups: BTreeMap<(&str, Year), Vec<Option<f64>>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.bank.as_str(), record.year))
            .or_default()
            .push(record.roe);
    }
    groups
        .into_iter()
        .map(|((bank, year), values)| RoePoint {
            bank: bank.to_string(),
            year,
            roe: mean_present(&values),
        })
        .collect()
}

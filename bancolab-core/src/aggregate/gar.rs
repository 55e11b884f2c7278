//! Weighted GAR: mean GAR percent per bank-year across GAR types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::{Bank, GarRecord, Year};

use super::mean_present;

/// One point of the derived GAR table. `gar` is `None` when every raw entry
/// for the (bank, year) group is missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarWeighted {
    pub bank: Bank,
    pub year: Year,
    pub gar: Option<f64>,
}

/// Group raw GAR rows by (bank, year) and average the present GAR percents.
/// Output is sorted by bank, then year.
pub fn weighted_gar(records: &[GarRecord]) -> Vec<GarWeighted> {
    let mut groups: BTreeMap<(&str, Year), Vec<Option<f64>>> = BTreeMap::new();
    for record in records {
        groups
            .entry((record.bank.as_str(), record.year))
            .or_default()
            .push(record.gar);
    }
    groups
        .into_iter()
        .map(|((bank, year), values)| GarWeighted {
            bank: bank.to_string(),
            year,
            gar: mean_present(&values),
        })
        .collect()
}

//! Greenhouse gas emissions per bank, year and scope.

use serde::{Deserialize, Serialize};

use super::{Bank, Year};

/// One emissions row. The source value column is numeric-as-text and may
/// hold non-numeric notes, which coerce to `None` at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionRecord {
    pub bank: Bank,
    pub year: Year,
    /// "Tipo de emisión" in the source (e.g. scope labels).
    pub emission_type: String,
    pub value: Option<f64>,
}

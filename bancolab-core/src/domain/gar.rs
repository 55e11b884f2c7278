//! Green Asset Ratio rows per bank, year and GAR type.

use serde::{Deserialize, Serialize};

use super::{Bank, Year};

/// One raw GAR row. Both percent columns arrive as text like "12,5%" and
/// are normalized to plain floats (12.5); unparseable cells become `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarRecord {
    pub bank: Bank,
    pub year: Year,
    /// "Tipo de GAR" in the source (Mortgages, Corporates, …).
    pub gar_type: String,
    /// GAR percent.
    pub gar: Option<f64>,
    /// "Cobertura" in the source: coverage percent of the GAR figure.
    pub coverage: Option<f64>,
}

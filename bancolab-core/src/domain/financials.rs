//! Annual financial indicators per bank.

use serde::{Deserialize, Serialize};

use super::{Bank, Year};

/// One (bank, year) row of the financial-indicators dataset.
///
/// At most one record per (bank, year) is expected; duplicates survive the
/// load and are averaged by the ROE aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialRecord {
    pub bank: Bank,
    pub year: Year,
    /// Return on equity, percent.
    pub roe: Option<f64>,
    /// Beneficio Neto in the source, millions of euros.
    pub net_income: Option<f64>,
    /// Ingresos in the source, millions of euros.
    pub revenue: Option<f64>,
}

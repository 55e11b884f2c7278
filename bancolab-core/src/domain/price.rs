//! Daily price table — one row per trading date, one column per bank.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single trading date: closing prices positionally aligned with
/// [`PriceSeries::banks`]. A missing cell in the source stays `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRow {
    pub date: NaiveDate,
    pub prices: Vec<Option<f64>>,
}

/// The full price table, indexed by trading date.
///
/// Invariant (checked at load time): dates are strictly increasing, so there
/// are no duplicate dates and rows are already in chronological order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    banks: Vec<String>,
    rows: Vec<PriceRow>,
}

impl PriceSeries {
    pub fn new(banks: Vec<String>, rows: Vec<PriceRow>) -> Self {
        Self { banks, rows }
    }

    /// Bank names in price-file column order. This is the canonical bank
    /// list for the whole dashboard.
    pub fn banks(&self) -> &[String] {
        &self.banks
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column index of a bank, by exact name.
    pub fn bank_index(&self, bank: &str) -> Option<usize> {
        self.banks.iter().position(|b| b == bank)
    }

    /// Present (date, price) observations for one bank, in date order.
    /// Unknown banks and missing cells simply produce no points.
    pub fn points_for(&self, bank: &str) -> Vec<(NaiveDate, f64)> {
        let Some(col) = self.bank_index(bank) else {
            return Vec::new();
        };
        self.rows
            .iter()
            .filter_map(|row| row.prices[col].map(|p| (row.date, p)))
            .collect()
    }

    /// First pair of out-of-order (or duplicate) dates, if any.
    /// The loader turns this into a fatal error.
    pub fn first_unordered_dates(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.rows
            .windows(2)
            .find(|w| w[0].date >= w[1].date)
            .map(|w| (w[0].date, w[1].date))
    }
}

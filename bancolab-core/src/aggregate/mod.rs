//! Derived tables, computed once at load time.
//!
//! All three aggregations are pure functions of the normalized inputs.
//! Grouping joins on exact bank-name equality and integer year equality —
//! there is no fuzzy matching anywhere.

pub mod gar;
pub mod returns;
pub mod roe;

pub use gar::{weighted_gar, GarWeighted};
pub use returns::{annual_returns, AnnualReturn};
pub use roe::{mean_roe, RoePoint};

/// Mean of the present values; `None` when every value is missing.
/// The distinction matters: an all-missing group must stay missing, not
/// collapse to zero.
pub(crate) fn mean_present(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

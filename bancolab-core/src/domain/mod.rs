//! Record types for the bank datasets.

pub mod emissions;
pub mod financials;
pub mod gar;
pub mod price;
pub mod ratings;
pub mod risk;
pub mod volatility;

pub use emissions::EmissionRecord;
pub use financials::FinancialRecord;
pub use gar::GarRecord;
pub use price::{PriceRow, PriceSeries};
pub use ratings::RatingRecord;
pub use risk::{Horizon, RiskClass, RiskRecord};
pub use volatility::VolatilityRecord;

/// Bank name type alias — join keys compare these with exact string equality.
pub type Bank = String;

/// Calendar year type alias.
pub type Year = i32;

//! ESG ratings per bank, year and rating provider.

use serde::{Deserialize, Serialize};

use super::{Bank, Year};

/// One ESG rating row. Scores are free-form ("AA", "B-", "23.4", …) and are
/// rendered verbatim, never parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRecord {
    pub bank: Bank,
    pub year: Year,
    /// "Rating" in the source: the provider name (MSCI, Sustainalytics, …).
    pub provider: String,
    /// "Nota" in the source.
    pub score: String,
}

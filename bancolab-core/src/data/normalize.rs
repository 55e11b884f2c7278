//! Field-level coercions from locale-formatted text to floats.
//!
//! The sources use a decimal comma throughout, percent columns carry a
//! trailing `%`, and the risk dataset marks missing values with the literal
//! token `ND`. All coercions here are idempotent: a value that is already
//! clean (dot decimal, no suffix) passes through unchanged, so normalizing
//! the canonical rendering of a normalized value is a no-op.

use super::error::ParseError;

/// Decimal-comma numeric: `"3,81"` → `3.81`. Plain dot-decimal input parses
/// unchanged.
pub fn parse_decimal(raw: &str) -> Result<f64, ParseError> {
    let cleaned = raw.trim().replace(',', ".");
    cleaned.parse::<f64>().map_err(|_| ParseError::new(raw))
}

/// Percent-as-text: `"12,5%"` → `12.5`. The result stays in percent units;
/// only the suffix and the decimal separator are normalized.
pub fn parse_percent(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    let without_suffix = trimmed.strip_suffix('%').unwrap_or(trimmed);
    parse_decimal(without_suffix).map_err(|_| ParseError::new(raw))
}

/// Risk intensity: the sentinel `ND` means "no data" and maps to `None`.
/// Anything else goes through [`parse_decimal`]; failures also become
/// `None` (policy: a malformed field never aborts the load).
pub fn risk_value(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed == "ND" {
        return None;
    }
    parse_decimal(trimmed).ok()
}

/// Emission value: numeric-but-possibly-text, coerced to `None` on failure
/// so the presentation renders a blank instead of crashing.
pub fn emission_value(raw: &str) -> Option<f64> {
    parse_decimal(raw).ok()
}

/// True when the field is semantically empty (as opposed to malformed).
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

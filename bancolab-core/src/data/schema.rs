//! Expected source headers, validated before any row is read.
//!
//! The Spanish column names are the wire contract of the upstream export;
//! a dataset whose header deviates fails the whole load (there is no
//! degraded mode for a malformed file).

use csv::StringRecord;

use super::error::LoadError;

pub const FINANCIALS: &str = "datosfinancieros";
pub const EMISSIONS: &str = "emisiones";
pub const RATINGS: &str = "ratings";
pub const RISKS: &str = "gestionriesgos";
pub const VOLATILITY: &str = "volatilidadmensual";
pub const GAR: &str = "gar";
pub const PRICES: &str = "cotizaciones";

pub const FINANCIALS_HEADER: [&str; 5] = ["Banco", "Año", "ROE", "Beneficio Neto", "Ingresos"];
pub const EMISSIONS_HEADER: [&str; 4] = ["Banco", "Año", "Tipo de emisión", "Emisión"];
pub const RATINGS_HEADER: [&str; 4] = ["Banco", "Año", "Rating", "Nota"];
pub const RISKS_HEADER: [&str; 5] = ["Banco", "Horizonte", "Riesgo", "Tipo de riesgo", "Valor"];
pub const VOLATILITY_HEADER: [&str; 4] = ["Banco", "Año", "Mes", "Valor"];
pub const GAR_HEADER: [&str; 5] = ["Banco", "Año", "Tipo de GAR", "GAR", "Cobertura"];

/// Date column of the price file; the remaining columns are bank names.
pub const PRICE_DATE_COLUMN: &str = "Fecha";

/// Check a fixed header against the expected column sequence.
pub fn validate_header(
    dataset: &'static str,
    expected: &[&str],
    found: &StringRecord,
) -> Result<(), LoadError> {
    let found_cols: Vec<String> = found.iter().map(|c| c.trim().to_string()).collect();
    if found_cols.len() != expected.len() || found_cols.iter().zip(expected).any(|(f, e)| f != e) {
        return Err(LoadError::HeaderMismatch {
            dataset,
            expected: expected.iter().map(|c| c.to_string()).collect(),
            found: found_cols,
        });
    }
    Ok(())
}

/// Check the price header: `Fecha` first, then at least one bank column.
/// Returns the bank names in column order.
pub fn validate_price_header(found: &StringRecord) -> Result<Vec<String>, LoadError> {
    let found_cols: Vec<String> = found.iter().map(|c| c.trim().to_string()).collect();
    let valid = found_cols.first().is_some_and(|c| c == PRICE_DATE_COLUMN) && found_cols.len() >= 2;
    if !valid {
        return Err(LoadError::HeaderMismatch {
            dataset: PRICES,
            expected: vec![PRICE_DATE_COLUMN.to_string(), "<bank>…".to_string()],
            found: found_cols,
        });
    }
    Ok(found_cols[1..].to_vec())
}

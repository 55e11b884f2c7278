//! ESG risk intensities per bank, horizon and risk type.

use serde::{Deserialize, Serialize};

use super::Bank;

/// Risk time horizon: corto / medio / largo plazo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    Cp,
    Mp,
    Lp,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::Cp, Horizon::Mp, Horizon::Lp];

    /// Parse a source token. Tokens outside {CP, MP, LP} are malformed rows,
    /// not missing values — the loader fails the load on `None`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "CP" => Some(Horizon::Cp),
            "MP" => Some(Horizon::Mp),
            "LP" => Some(Horizon::Lp),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Horizon::Cp => "CP",
            Horizon::Mp => "MP",
            Horizon::Lp => "LP",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Horizon::Cp => "corto plazo",
            Horizon::Mp => "medio plazo",
            Horizon::Lp => "largo plazo",
        }
    }

    pub fn next(self) -> Horizon {
        match self {
            Horizon::Cp => Horizon::Mp,
            Horizon::Mp => Horizon::Lp,
            Horizon::Lp => Horizon::Cp,
        }
    }
}

/// Physical vs. transition risk, derived from the marker substring in the
/// free-text category column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskClass {
    Physical,
    Transition,
}

impl RiskClass {
    /// Classify a category like "Riesgo físico agudo" or
    /// "Riesgos de transición". Accented and unaccented markers both match;
    /// a category with neither marker is unclassified.
    pub fn from_category(category: &str) -> Option<Self> {
        let lower = category.to_lowercase();
        if lower.contains("fisico") || lower.contains("físico") {
            Some(RiskClass::Physical)
        } else if lower.contains("transicion") || lower.contains("transición") {
            Some(RiskClass::Transition)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskClass::Physical => "Riesgos Físicos",
            RiskClass::Transition => "Riesgos de Transición",
        }
    }
}

/// One risk-intensity cell. Values live in [0, 1] in practice; the source
/// sentinel "ND" becomes `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRecord {
    pub bank: Bank,
    pub horizon: Horizon,
    /// "Riesgo" in the source: free-text category carrying the class marker.
    pub category: String,
    pub class: Option<RiskClass>,
    /// "Tipo de riesgo" in the source.
    pub risk_type: String,
    pub value: Option<f64>,
}

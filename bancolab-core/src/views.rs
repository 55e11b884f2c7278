//! Read-only query views over the loaded store.
//!
//! These are the accessors the presentation layer renders from. They filter
//! and sort; they never mutate the underlying tables. An empty result is a
//! normal outcome (see [`EmptyResultWarning`]), not an error.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;

use crate::data::DataStore;
use crate::domain::{
    EmissionRecord, FinancialRecord, GarRecord, Horizon, RatingRecord, RiskClass, RiskRecord, Year,
};

/// A filtered view came back empty. Informational: rendered as a neutral
/// "no data" notice, never raised as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyResultWarning {
    context: String,
}

impl EmptyResultWarning {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl fmt::Display for EmptyResultWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no data available for {}", self.context)
    }
}

impl DataStore {
    /// Canonical bank list, in price-file column order.
    pub fn banks(&self) -> &[String] {
        self.prices.banks()
    }

    /// Present daily prices for one bank.
    pub fn price_points(&self, bank: &str) -> Vec<(NaiveDate, f64)> {
        self.prices.points_for(bank)
    }

    /// Financial-indicator rows for one bank, years ascending. A bank
    /// absent from the table yields an empty view.
    pub fn financials_for(&self, bank: &str) -> Vec<&FinancialRecord> {
        let mut rows: Vec<&FinancialRecord> =
            self.financials.iter().filter(|r| r.bank == bank).collect();
        rows.sort_by_key(|r| r.year);
        rows
    }

    /// Raw GAR rows with a present value for one bank, sorted by GAR type
    /// then year — the order the scorecard grid renders in.
    pub fn gar_scorecards(&self, bank: &str) -> Vec<&GarRecord> {
        let mut rows: Vec<&GarRecord> = self
            .gar
            .iter()
            .filter(|r| r.bank == bank && r.gar.is_some())
            .collect();
        rows.sort_by(|a, b| a.gar_type.cmp(&b.gar_type).then(a.year.cmp(&b.year)));
        rows
    }

    /// Distinct rating providers across all banks, sorted.
    pub fn rating_providers(&self) -> Vec<&str> {
        let providers: BTreeSet<&str> = self
            .ratings
            .iter()
            .map(|r| r.provider.as_str())
            .filter(|p| !p.is_empty())
            .collect();
        providers.into_iter().collect()
    }

    /// Ratings for one bank from one provider, years ascending.
    pub fn ratings_for(&self, bank: &str, provider: &str) -> Vec<&RatingRecord> {
        let mut rows: Vec<&RatingRecord> = self
            .ratings
            .iter()
            .filter(|r| r.bank == bank && r.provider == provider)
            .collect();
        rows.sort_by_key(|r| r.year);
        rows
    }

    /// Emission rows for one bank, sorted by year then emission type.
    pub fn emissions_for(&self, bank: &str) -> Vec<&EmissionRecord> {
        let mut rows: Vec<&EmissionRecord> =
            self.emissions.iter().filter(|r| r.bank == bank).collect();
        rows.sort_by(|a, b| a.year.cmp(&b.year).then(a.emission_type.cmp(&b.emission_type)));
        rows
    }

    /// Distinct emission years for one bank, ascending.
    pub fn emission_years(&self, bank: &str) -> Vec<Year> {
        let years: BTreeSet<Year> = self
            .emissions
            .iter()
            .filter(|r| r.bank == bank)
            .map(|r| r.year)
            .collect();
        years.into_iter().collect()
    }

    /// Heatmap cells: risk rows of one class at one horizon. Rows whose
    /// category carries no class marker appear in neither heatmap.
    pub fn risk_cells(&self, horizon: Horizon, class: RiskClass) -> Vec<&RiskRecord> {
        self.risks
            .iter()
            .filter(|r| r.horizon == horizon && r.class == Some(class))
            .collect()
    }

    /// Distinct risk types on the heatmap's x-axis, sorted.
    pub fn risk_types(&self, horizon: Horizon, class: RiskClass) -> Vec<&str> {
        let types: BTreeSet<&str> = self
            .risk_cells(horizon, class)
            .into_iter()
            .map(|r| r.risk_type.as_str())
            .collect();
        types.into_iter().collect()
    }

    /// Distinct banks on the heatmap's y-axis, sorted.
    pub fn risk_banks(&self, horizon: Horizon, class: RiskClass) -> Vec<&str> {
        let banks: BTreeSet<&str> = self
            .risk_cells(horizon, class)
            .into_iter()
            .map(|r| r.bank.as_str())
            .collect();
        banks.into_iter().collect()
    }

    /// Weighted-GAR points for one bank, (year, value), years ascending.
    pub fn weighted_gar_series(&self, bank: &str) -> Vec<(Year, f64)> {
        self.gar_weighted
            .iter()
            .filter(|p| p.bank == bank)
            .filter_map(|p| p.gar.map(|v| (p.year, v)))
            .collect()
    }

    /// Mean-ROE points for one bank, (year, value), years ascending.
    pub fn roe_series(&self, bank: &str) -> Vec<(Year, f64)> {
        self.roe
            .iter()
            .filter(|p| p.bank == bank)
            .filter_map(|p| p.roe.map(|v| (p.year, v)))
            .collect()
    }

    /// Annual-return points for one bank, (year, fraction), years ascending.
    pub fn return_series(&self, bank: &str) -> Vec<(Year, f64)> {
        self.returns
            .iter()
            .filter(|p| p.bank == bank)
            .map(|p| (p.year, p.ret))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate;
    use crate::data::LoadStats;
    use crate::domain::{PriceRow, PriceSeries, VolatilityRecord};

    fn fixture_store() -> DataStore {
        let prices = PriceSeries::new(
            vec!["Santander".into(), "BBVA".into()],
            vec![
                PriceRow {
                    date: NaiveDate::from_ymd_opt(2023, 12, 29).unwrap(),
                    prices: vec![Some(100.0), Some(8.0)],
                },
                PriceRow {
                    date: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
                    prices: vec![Some(120.0), Some(10.0)],
                },
            ],
        );
        let financials = vec![
            FinancialRecord {
                bank: "Santander".into(),
                year: 2024,
                roe: Some(12.0),
                net_income: Some(11_000.0),
                revenue: Some(60_000.0),
            },
            FinancialRecord {
                bank: "Santander".into(),
                year: 2023,
                roe: Some(10.0),
                net_income: Some(9_000.0),
                revenue: Some(52_000.0),
            },
        ];
        let emissions = vec![EmissionRecord {
            bank: "Santander".into(),
            year: 2023,
            emission_type: "Alcance 1".into(),
            value: Some(24_000.0),
        }];
        let ratings = vec![
            RatingRecord {
                bank: "Santander".into(),
                year: 2023,
                provider: "MSCI".into(),
                score: "AA".into(),
            },
            RatingRecord {
                bank: "BBVA".into(),
                year: 2023,
                provider: "Sustainalytics".into(),
                score: "18,2".into(),
            },
        ];
        let risks = vec![
            RiskRecord {
                bank: "Santander".into(),
                horizon: Horizon::Cp,
                category: "Riesgo fisico".into(),
                class: Some(RiskClass::Physical),
                risk_type: "Inundaciones".into(),
                value: Some(0.4),
            },
            RiskRecord {
                bank: "Santander".into(),
                horizon: Horizon::Cp,
                category: "Riesgo de transicion".into(),
                class: Some(RiskClass::Transition),
                risk_type: "Regulatorio".into(),
                value: Some(0.7),
            },
            RiskRecord {
                bank: "BBVA".into(),
                horizon: Horizon::Lp,
                category: "Riesgo fisico".into(),
                class: Some(RiskClass::Physical),
                risk_type: "Inundaciones".into(),
                value: None,
            },
        ];
        let volatility: Vec<VolatilityRecord> = Vec::new();
        let gar = vec![
            GarRecord {
                bank: "Santander".into(),
                year: 2023,
                gar_type: "Mortgages".into(),
                gar: Some(30.0),
                coverage: Some(80.0),
            },
            GarRecord {
                bank: "Santander".into(),
                year: 2023,
                gar_type: "Corporates".into(),
                gar: Some(50.0),
                coverage: Some(75.0),
            },
        ];

        let gar_weighted = aggregate::weighted_gar(&gar);
        let roe = aggregate::mean_roe(&financials);
        let returns = aggregate::annual_returns(&prices);

        DataStore {
            prices,
            financials,
            emissions,
            ratings,
            risks,
            volatility,
            gar,
            gar_weighted,
            roe,
            returns,
            stats: LoadStats::default(),
        }
    }

    #[test]
    fn financials_view_sorts_by_year() {
        let store = fixture_store();
        let rows = store.financials_for("Santander");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2023);
        assert_eq!(rows[1].year, 2024);
    }

    #[test]
    fn absent_bank_yields_empty_view_not_error() {
        let store = fixture_store();
        assert!(store.financials_for("Kutxabank").is_empty());
        assert!(store.ratings_for("Kutxabank", "MSCI").is_empty());
    }

    #[test]
    fn ratings_filter_by_bank_and_provider() {
        let store = fixture_store();
        assert_eq!(store.ratings_for("Santander", "MSCI").len(), 1);
        assert!(store.ratings_for("Santander", "Sustainalytics").is_empty());
    }

    #[test]
    fn providers_are_sorted_and_distinct() {
        let store = fixture_store();
        assert_eq!(store.rating_providers(), vec!["MSCI", "Sustainalytics"]);
    }

    #[test]
    fn risk_cells_split_by_class_and_horizon() {
        let store = fixture_store();
        let physical = store.risk_cells(Horizon::Cp, RiskClass::Physical);
        assert_eq!(physical.len(), 1);
        assert_eq!(physical[0].risk_type, "Inundaciones");

        let transition = store.risk_cells(Horizon::Cp, RiskClass::Transition);
        assert_eq!(transition.len(), 1);
        assert_eq!(transition[0].value, Some(0.7));

        assert!(store.risk_cells(Horizon::Mp, RiskClass::Physical).is_empty());
    }

    #[test]
    fn gar_series_uses_the_derived_table() {
        let store = fixture_store();
        assert_eq!(store.weighted_gar_series("Santander"), vec![(2023, 40.0)]);
        assert!(store.weighted_gar_series("BBVA").is_empty());
    }

    #[test]
    fn return_series_excludes_the_first_year() {
        let store = fixture_store();
        let series = store.return_series("Santander");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].0, 2024);
        assert!((series[0].1 - 0.20).abs() < 1e-12);
    }

    #[test]
    fn empty_warning_displays_its_context() {
        let warning = EmptyResultWarning::new("Kutxabank / MSCI");
        assert_eq!(warning.to_string(), "no data available for Kutxabank / MSCI");
    }
}

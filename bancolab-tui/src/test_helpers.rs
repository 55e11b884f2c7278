//! Shared fixture store for TUI state tests.

use bancolab_core::aggregate;
use bancolab_core::data::{DataStore, LoadStats};
use bancolab_core::domain::{
    EmissionRecord, FinancialRecord, GarRecord, Horizon, PriceRow, PriceSeries, RatingRecord,
    RiskClass, RiskRecord,
};
use chrono::NaiveDate;

/// Two banks, two years of prices, one rating per provider, a couple of
/// risk cells. Enough to drive every selector.
pub fn fixture_store() -> DataStore {
    let prices = PriceSeries::new(
        vec!["Santander".into(), "BBVA".into()],
        vec![
            PriceRow {
                date: NaiveDate::from_ymd_opt(2023, 12, 29).unwrap(),
                prices: vec![Some(100.0), Some(8.0)],
            },
            PriceRow {
                date: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
                prices: vec![Some(120.0), Some(8.8)],
            },
        ],
    );
    let financials = vec![FinancialRecord {
        bank: "Santander".into(),
        year: 2023,
        roe: Some(10.5),
        net_income: Some(9_000.0),
        revenue: Some(52_000.0),
    }];
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
            bank: "BBVA".into(),
            horizon: Horizon::Cp,
            category: "Riesgo de transicion".into(),
            class: Some(RiskClass::Transition),
            risk_type: "Regulatorio".into(),
            value: None,
        },
    ];
    let gar = vec![GarRecord {
        bank: "Santander".into(),
        year: 2023,
        gar_type: "Mortgages".into(),
        gar: Some(30.0),
        coverage: Some(80.0),
    }];

    let gar_weighted = aggregate::weighted_gar(&gar);
    let roe = aggregate::mean_roe(&financials);
    let returns = aggregate::annual_returns(&prices);

    DataStore {
        prices,
        financials,
        emissions,
        ratings,
        risks,
        volatility: Vec::new(),
        gar,
        gar_weighted,
        roe,
        returns,
        stats: LoadStats::default(),
    }
}

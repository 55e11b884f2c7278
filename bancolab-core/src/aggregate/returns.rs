//! Annual stock returns from the daily price series.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use chrono::Datelike;

use crate::domain::{Bank, PriceSeries, Year};

/// Year-over-year percent change of a bank's year-end price, as a fraction
/// (0.20 = +20%). Keyed by the later year of each pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualReturn {
    pub bank: Bank,
    pub year: Year,
    pub ret: f64,
}

/// Resample each bank's series to one price per calendar year — the last
/// observed price within that year, not a fixed calendar date — then compute
/// `(p[y] - p[prev]) / p[prev]` between consecutive present years.
///
/// The first present year has no prior year and yields no entry, so each
/// bank contributes exactly `years_present - 1` returns. Output follows the
/// price-header bank order, years ascending within a bank.
pub fn annual_returns(prices: &PriceSeries) -> Vec<AnnualReturn> {
    let mut returns = Vec::new();
    for bank in prices.banks() {
        // Later observations within a year overwrite earlier ones, leaving
        // the last observed price per year.
        let mut by_year: BTreeMap<Year, f64> = BTreeMap::new();
        for (date, price) in prices.points_for(bank) {
            by_year.insert(date.year(), price);
        }
        let mut prev: Option<(Year, f64)> = None;
        for (&year, &price) in &by_year {
            if let Some((_, prev_price)) = prev {
                returns.push(AnnualReturn {
                    bank: bank.clone(),
                    year,
                    ret: (price - prev_price) / prev_price,
                });
            }
            prev = Some((year, price));
        }
    }
    returns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceRow;
    use chrono::NaiveDate;

    fn series(observations: &[(i32, u32, u32, f64)]) -> PriceSeries {
        let rows = observations
            .iter()
            .map(|&(y, m, d, price)| PriceRow {
                date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                prices: vec![Some(price)],
            })
            .collect();
        PriceSeries::new(vec!["Santander".into()], rows)
    }

    #[test]
    fn uses_last_observation_within_each_year() {
        // 2023 closes at 100; 2024 trades at 110 then 120 — the later
        // observation wins, so the 2024 return is (120 - 100) / 100.
        let prices = series(&[
            (2023, 12, 29, 100.0),
            (2024, 6, 3, 110.0),
            (2024, 12, 30, 120.0),
        ]);
        let returns = annual_returns(&prices);
        assert_eq!(returns.len(), 1);
        assert_eq!(returns[0].year, 2024);
        assert!((returns[0].ret - 0.20).abs() < 1e-12);
    }

    #[test]
    fn first_year_yields_no_return() {
        let prices = series(&[(2023, 12, 29, 100.0)]);
        assert!(annual_returns(&prices).is_empty());
    }

    #[test]
    fn one_return_per_consecutive_year_pair() {
        let prices = series(&[
            (2022, 12, 30, 80.0),
            (2023, 12, 29, 100.0),
            (2024, 12, 30, 90.0),
        ]);
        let returns = annual_returns(&prices);
        assert_eq!(returns.len(), 2);
        assert_eq!(returns[0].year, 2023);
        assert!((returns[0].ret - 0.25).abs() < 1e-12);
        assert_eq!(returns[1].year, 2024);
        assert!((returns[1].ret - (-0.10)).abs() < 1e-12);
    }

    #[test]
    fn banks_with_missing_cells_still_resample() {
        let rows = vec![
            PriceRow {
                date: NaiveDate::from_ymd_opt(2023, 12, 29).unwrap(),
                prices: vec![Some(100.0), Some(8.0)],
            },
            PriceRow {
                date: NaiveDate::from_ymd_opt(2024, 12, 30).unwrap(),
                // Santander has no observation on the last trading day …
                prices: vec![None, Some(9.0)],
            },
            PriceRow {
                date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                prices: vec![Some(110.0), None],
            },
        ];
        let prices = PriceSeries::new(vec!["Santander".into(), "BBVA".into()], rows);
        let returns = annual_returns(&prices);
        // … yet both banks resolve a last-observed price for 2024.
        assert_eq!(returns.len(), 2);
        let santander = returns.iter().find(|r| r.bank == "Santander").unwrap();
        assert!((santander.ret - 0.10).abs() < 1e-12);
        let bbva = returns.iter().find(|r| r.bank == "BBVA").unwrap();
        assert!((bbva.ret - 0.125).abs() < 1e-12);
    }
}

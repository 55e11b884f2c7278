//! CSV readers for the seven datasets and the process-wide store.
//!
//! `DataStore::load` is a pure function of a [`DataConfig`] so tests can
//! point it at fixture files. `DataStore::global` memoizes the first
//! successful load behind an initialization guard: concurrent sessions
//! serialize on the first load and every later call reuses the cached
//! tables without touching disk.

use std::fs::File;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use chrono::NaiveDate;
use csv::{Reader, ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

use crate::aggregate::{self, AnnualReturn, GarWeighted, RoePoint};
use crate::domain::{
    EmissionRecord, FinancialRecord, GarRecord, Horizon, PriceRow, PriceSeries, RatingRecord,
    RiskClass, RiskRecord, VolatilityRecord,
};

use super::config::DataConfig;
use super::error::LoadError;
use super::normalize;
use super::schema;

/// Accepted renderings of the price-file date column.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Row count and coercion tally for one dataset.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetStats {
    pub rows: usize,
    /// Non-empty fields that failed numeric coercion and became missing.
    pub coerced: usize,
}

/// Per-dataset load statistics, reported by the `check` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadStats {
    pub prices: DatasetStats,
    pub financials: DatasetStats,
    pub emissions: DatasetStats,
    pub ratings: DatasetStats,
    pub risks: DatasetStats,
    pub volatility: DatasetStats,
    pub gar: DatasetStats,
}

impl LoadStats {
    pub fn total_coerced(&self) -> usize {
        self.prices.coerced
            + self.financials.coerced
            + self.emissions.coerced
            + self.ratings.coerced
            + self.risks.coerced
            + self.volatility.coerced
            + self.gar.coerced
    }
}

/// All loaded tables plus the derived aggregates, immutable after load.
#[derive(Debug)]
pub struct DataStore {
    pub prices: PriceSeries,
    pub financials: Vec<FinancialRecord>,
    pub emissions: Vec<EmissionRecord>,
    pub ratings: Vec<RatingRecord>,
    pub risks: Vec<RiskRecord>,
    pub volatility: Vec<VolatilityRecord>,
    pub gar: Vec<GarRecord>,

    // Derived once at load time, never mutated afterwards.
    pub gar_weighted: Vec<GarWeighted>,
    pub roe: Vec<RoePoint>,
    pub returns: Vec<AnnualReturn>,

    pub stats: LoadStats,
}

static STORE: OnceLock<DataStore> = OnceLock::new();
static FIRST_LOAD: Mutex<()> = Mutex::new(());

impl DataStore {
    /// Read, normalize and aggregate all seven datasets.
    pub fn load(config: &DataConfig) -> Result<Self, LoadError> {
        info!(data_dir = %config.data_dir.display(), "loading datasets");

        let mut stats = LoadStats::default();
        let prices = load_prices(&config.prices_path(), &mut stats.prices)?;
        let financials = load_financials(&config.financials_path(), &mut stats.financials)?;
        let emissions = load_emissions(&config.emissions_path(), &mut stats.emissions)?;
        let ratings = load_ratings(&config.ratings_path(), &mut stats.ratings)?;
        let risks = load_risks(&config.risks_path(), &mut stats.risks)?;
        let volatility = load_volatility(&config.volatility_path(), &mut stats.volatility)?;
        let gar = load_gar(&config.gar_path(), &mut stats.gar)?;

        if stats.total_coerced() > 0 {
            warn!(
                coerced = stats.total_coerced(),
                "non-numeric fields coerced to missing"
            );
        }

        let gar_weighted = aggregate::weighted_gar(&gar);
        let roe = aggregate::mean_roe(&financials);
        let returns = aggregate::annual_returns(&prices);

        debug!(
            banks = prices.banks().len(),
            trading_days = prices.len(),
            gar_groups = gar_weighted.len(),
            return_points = returns.len(),
            "datasets loaded"
        );

        Ok(Self {
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
            stats,
        })
    }

    /// Process-wide cached load.
    ///
    /// The first call reads disk; every later call returns the same tables.
    /// A mutex serializes racing first loads so a second concurrent session
    /// waits for the winner instead of re-reading the files.
    pub fn global(config: &DataConfig) -> Result<&'static DataStore, LoadError> {
        if let Some(store) = STORE.get() {
            return Ok(store);
        }
        let _guard = FIRST_LOAD.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(store) = STORE.get() {
            return Ok(store);
        }
        let store = Self::load(config)?;
        Ok(STORE.get_or_init(|| store))
    }
}

// ── Per-dataset readers ─────────────────────────────────────────────

fn load_prices(path: &Path, stats: &mut DatasetStats) -> Result<PriceSeries, LoadError> {
    let mut reader = open_reader(path, schema::PRICES)?;
    let header = headers(&mut reader, schema::PRICES)?;
    let banks = schema::validate_price_header(&header)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = csv_record(result, schema::PRICES)?;
        let row = i + 1;
        let raw_date = record.get(0).unwrap_or("");
        let date = parse_date(raw_date).ok_or_else(|| LoadError::MalformedRow {
            dataset: schema::PRICES,
            row,
            message: format!("unparseable date {raw_date:?}"),
        })?;
        let prices = (1..=banks.len())
            .map(|col| optional_decimal(record.get(col).unwrap_or(""), stats))
            .collect();
        rows.push(PriceRow { date, prices });
    }
    stats.rows = rows.len();

    let series = PriceSeries::new(banks, rows);
    if let Some((prev, next)) = series.first_unordered_dates() {
        return Err(LoadError::UnorderedDates { prev, next });
    }
    Ok(series)
}

fn load_financials(path: &Path, stats: &mut DatasetStats) -> Result<Vec<FinancialRecord>, LoadError> {
    read_rows(path, schema::FINANCIALS, &schema::FINANCIALS_HEADER, stats, |record, row, stats| {
        Ok(FinancialRecord {
            bank: field(record, 0),
            year: parse_year(record.get(1).unwrap_or(""), schema::FINANCIALS, row)?,
            roe: optional_decimal(record.get(2).unwrap_or(""), stats),
            net_income: optional_decimal(record.get(3).unwrap_or(""), stats),
            revenue: optional_decimal(record.get(4).unwrap_or(""), stats),
        })
    })
}

fn load_emissions(path: &Path, stats: &mut DatasetStats) -> Result<Vec<EmissionRecord>, LoadError> {
    read_rows(path, schema::EMISSIONS, &schema::EMISSIONS_HEADER, stats, |record, row, stats| {
        let raw_value = record.get(3).unwrap_or("");
        let value = normalize::emission_value(raw_value);
        if value.is_none() && !normalize::is_blank(raw_value) {
            stats.coerced += 1;
        }
        Ok(EmissionRecord {
            bank: field(record, 0),
            year: parse_year(record.get(1).unwrap_or(""), schema::EMISSIONS, row)?,
            emission_type: field(record, 2),
            value,
        })
    })
}

fn load_ratings(path: &Path, stats: &mut DatasetStats) -> Result<Vec<RatingRecord>, LoadError> {
    read_rows(path, schema::RATINGS, &schema::RATINGS_HEADER, stats, |record, row, _stats| {
        Ok(RatingRecord {
            bank: field(record, 0),
            year: parse_year(record.get(1).unwrap_or(""), schema::RATINGS, row)?,
            provider: field(record, 2),
            score: field(record, 3),
        })
    })
}

fn load_risks(path: &Path, stats: &mut DatasetStats) -> Result<Vec<RiskRecord>, LoadError> {
    read_rows(path, schema::RISKS, &schema::RISKS_HEADER, stats, |record, row, stats| {
        let raw_horizon = record.get(1).unwrap_or("");
        let horizon = Horizon::parse(raw_horizon).ok_or_else(|| LoadError::MalformedRow {
            dataset: schema::RISKS,
            row,
            message: format!("unknown horizon {raw_horizon:?} (expected CP, MP or LP)"),
        })?;
        let category = field(record, 2);
        let raw_value = record.get(4).unwrap_or("");
        let value = normalize::risk_value(raw_value);
        if value.is_none() && !normalize::is_blank(raw_value) && raw_value.trim() != "ND" {
            stats.coerced += 1;
        }
        Ok(RiskRecord {
            bank: field(record, 0),
            horizon,
            class: RiskClass::from_category(&category),
            category,
            risk_type: field(record, 3),
            value,
        })
    })
}

fn load_volatility(path: &Path, stats: &mut DatasetStats) -> Result<Vec<VolatilityRecord>, LoadError> {
    read_rows(path, schema::VOLATILITY, &schema::VOLATILITY_HEADER, stats, |record, row, stats| {
        let raw_month = record.get(2).unwrap_or("");
        let month: u32 = raw_month.trim().parse().map_err(|_| LoadError::MalformedRow {
            dataset: schema::VOLATILITY,
            row,
            message: format!("unparseable month {raw_month:?}"),
        })?;
        if !(1..=12).contains(&month) {
            return Err(LoadError::MalformedRow {
                dataset: schema::VOLATILITY,
                row,
                message: format!("month {month} out of range"),
            });
        }
        Ok(VolatilityRecord {
            bank: field(record, 0),
            year: parse_year(record.get(1).unwrap_or(""), schema::VOLATILITY, row)?,
            month,
            value: optional_decimal(record.get(3).unwrap_or(""), stats),
        })
    })
}

fn load_gar(path: &Path, stats: &mut DatasetStats) -> Result<Vec<GarRecord>, LoadError> {
    read_rows(path, schema::GAR, &schema::GAR_HEADER, stats, |record, row, stats| {
        Ok(GarRecord {
            bank: field(record, 0),
            year: parse_year(record.get(1).unwrap_or(""), schema::GAR, row)?,
            gar_type: field(record, 2),
            gar: optional_percent(record.get(3).unwrap_or(""), stats),
            coverage: optional_percent(record.get(4).unwrap_or(""), stats),
        })
    })
}

// ── Shared reader plumbing ──────────────────────────────────────────

fn read_rows<T>(
    path: &Path,
    dataset: &'static str,
    expected_header: &[&str],
    stats: &mut DatasetStats,
    mut parse_row: impl FnMut(&StringRecord, usize, &mut DatasetStats) -> Result<T, LoadError>,
) -> Result<Vec<T>, LoadError> {
    let mut reader = open_reader(path, dataset)?;
    let header = headers(&mut reader, dataset)?;
    schema::validate_header(dataset, expected_header, &header)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = csv_record(result, dataset)?;
        rows.push(parse_row(&record, i + 1, stats)?);
    }
    stats.rows = rows.len();
    Ok(rows)
}

fn open_reader(path: &Path, dataset: &'static str) -> Result<Reader<File>, LoadError> {
    if !path.exists() {
        return Err(LoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_path(path)
        .map_err(|e| LoadError::Csv {
            dataset,
            message: e.to_string(),
        })
}

fn headers(reader: &mut Reader<File>, dataset: &'static str) -> Result<StringRecord, LoadError> {
    reader
        .headers()
        .map(Clone::clone)
        .map_err(|e| LoadError::Csv {
            dataset,
            message: e.to_string(),
        })
}

fn csv_record(
    result: Result<StringRecord, csv::Error>,
    dataset: &'static str,
) -> Result<StringRecord, LoadError> {
    result.map_err(|e| LoadError::Csv {
        dataset,
        message: e.to_string(),
    })
}

fn field(record: &StringRecord, idx: usize) -> String {
    record.get(idx).unwrap_or("").trim().to_string()
}

fn parse_year(raw: &str, dataset: &'static str, row: usize) -> Result<i32, LoadError> {
    raw.trim().parse::<i32>().map_err(|_| LoadError::MalformedRow {
        dataset,
        row,
        message: format!("unparseable year {raw:?}"),
    })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

fn optional_decimal(raw: &str, stats: &mut DatasetStats) -> Option<f64> {
    if normalize::is_blank(raw) {
        return None;
    }
    match normalize::parse_decimal(raw) {
        Ok(v) => Some(v),
        Err(_) => {
            stats.coerced += 1;
            None
        }
    }
}

fn optional_percent(raw: &str, stats: &mut DatasetStats) -> Option<f64> {
    if normalize::is_blank(raw) {
        return None;
    }
    match normalize::parse_percent(raw) {
        Ok(v) => Some(v),
        Err(_) => {
            stats.coerced += 1;
            None
        }
    }
}

//! End-to-end loader tests against CSV fixtures on disk.
//!
//! Each test writes the seven dataset files into a temp dir, points a
//! `DataConfig` at it, and loads the full store — the same path the
//! dashboard takes at startup.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use bancolab_core::data::{DataConfig, DataStore, LoadError};
use bancolab_core::domain::{Horizon, RiskClass};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// A small but complete set of source files covering the interesting cases:
/// intra-year price resampling, percent normalization, the ND sentinel,
/// non-numeric emissions, and a provider split in the ratings.
fn write_standard_fixture(dir: &Path) {
    write(
        dir,
        "cotizaciones.csv",
        "Fecha;Santander;BBVA\n\
         2023-12-29;100,0;8,00\n\
         2024-06-28;110,0;8,40\n\
         2024-12-30;120,0;8,80\n",
    );
    write(
        dir,
        "datosfinancieros.csv",
        "Banco;Año;ROE;Beneficio Neto;Ingresos\n\
         Santander;2023;10,5;9000;52000\n\
         Santander;2024;12,0;11000;60000\n\
         BBVA;2023;14,2;8000;41000\n",
    );
    write(
        dir,
        "emisiones.csv",
        "Banco;Año;Tipo de emisión;Emisión\n\
         Santander;2023;Alcance 1;24000\n\
         Santander;2023;Alcance 2;no disponible\n\
         BBVA;2023;Alcance 1;18500,5\n",
    );
    write(
        dir,
        "ratings.csv",
        "Banco;Año;Rating;Nota\n\
         Santander;2023;MSCI;AA\n\
         Santander;2024;MSCI;AA\n\
         BBVA;2023;Sustainalytics;18,2\n",
    );
    write(
        dir,
        "gestionriesgos.csv",
        "Banco;Horizonte;Riesgo;Tipo de riesgo;Valor\n\
         Santander;CP;Riesgo fisico;Inundaciones;0,40\n\
         Santander;CP;Riesgo de transición;Regulatorio;0,75\n\
         BBVA;LP;Riesgo fisico;Inundaciones;ND\n",
    );
    write(
        dir,
        "volatilidadmensual.csv",
        "Banco;Año;Mes;Valor\n\
         Santander;2023;1;0,22\n\
         Santander;2023;2;0,19\n",
    );
    write(
        dir,
        "gar.csv",
        "Banco;Año;Tipo de GAR;GAR;Cobertura\n\
         Santander;2023;Mortgages;30%;80%\n\
         Santander;2023;Corporates;50%;75,5%\n\
         BBVA;2023;Mortgages;22,4%;90%\n",
    );
}

fn load_standard() -> (TempDir, DataStore) {
    let dir = TempDir::new().unwrap();
    write_standard_fixture(dir.path());
    let config = DataConfig::with_data_dir(dir.path());
    let store = DataStore::load(&config).unwrap();
    (dir, store)
}

#[test]
fn full_load_populates_every_table() {
    let (_dir, store) = load_standard();

    assert_eq!(store.banks(), ["Santander".to_string(), "BBVA".to_string()]);
    assert_eq!(store.prices.len(), 3);
    assert_eq!(store.financials.len(), 3);
    assert_eq!(store.emissions.len(), 3);
    assert_eq!(store.ratings.len(), 3);
    assert_eq!(store.risks.len(), 3);
    assert_eq!(store.volatility.len(), 2);
    assert_eq!(store.gar.len(), 3);

    assert_eq!(store.stats.prices.rows, 3);
    assert_eq!(store.stats.volatility.rows, 2);
}

#[test]
fn percent_fields_normalize_to_plain_floats() {
    let (_dir, store) = load_standard();

    let corporates = store
        .gar
        .iter()
        .find(|r| r.gar_type == "Corporates")
        .unwrap();
    assert_eq!(corporates.gar, Some(50.0));
    assert_eq!(corporates.coverage, Some(75.5));

    let bbva = store.gar.iter().find(|r| r.bank == "BBVA").unwrap();
    assert_eq!(bbva.gar, Some(22.4));
}

#[test]
fn weighted_gar_averages_across_types() {
    let (_dir, store) = load_standard();
    assert_eq!(store.weighted_gar_series("Santander"), vec![(2023, 40.0)]);
}

#[test]
fn annual_return_uses_last_observation_within_year() {
    let (_dir, store) = load_standard();

    // Santander traded at 110 mid-2024 and 120 at year-end: the return for
    // 2024 is (120 - 100) / 100, and 2023 gets no return at all.
    let series = store.return_series("Santander");
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].0, 2024);
    assert!((series[0].1 - 0.20).abs() < 1e-12);
}

#[test]
fn nd_risk_value_is_missing() {
    let (_dir, store) = load_standard();
    let nd_row = store.risks.iter().find(|r| r.bank == "BBVA").unwrap();
    assert_eq!(nd_row.value, None);
    assert_eq!(nd_row.horizon, Horizon::Lp);
    // An explicit sentinel is not a coercion failure.
    assert_eq!(store.stats.risks.coerced, 0);
}

#[test]
fn accented_transition_category_is_classified() {
    let (_dir, store) = load_standard();
    let cells = store.risk_cells(Horizon::Cp, RiskClass::Transition);
    assert_eq!(cells.len(), 1);
    assert_eq!(cells[0].risk_type, "Regulatorio");
}

#[test]
fn non_numeric_emission_coerces_to_missing() {
    let (_dir, store) = load_standard();
    let scope2 = store
        .emissions
        .iter()
        .find(|r| r.emission_type == "Alcance 2")
        .unwrap();
    assert_eq!(scope2.value, None);
    assert_eq!(store.stats.emissions.coerced, 1);

    let bbva = store.emissions.iter().find(|r| r.bank == "BBVA").unwrap();
    assert_eq!(bbva.value, Some(18500.5));
}

#[test]
fn absent_bank_queries_come_back_empty() {
    let (_dir, store) = load_standard();
    assert!(store.financials_for("Kutxabank").is_empty());
    assert!(store.price_points("Kutxabank").is_empty());
}

#[test]
fn missing_file_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    write_standard_fixture(dir.path());
    fs::remove_file(dir.path().join("gar.csv")).unwrap();

    let config = DataConfig::with_data_dir(dir.path());
    match DataStore::load(&config) {
        Err(LoadError::MissingFile { path }) => {
            assert!(path.ends_with("gar.csv"));
        }
        other => panic!("expected MissingFile, got {other:?}"),
    }
}

#[test]
fn header_mismatch_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    write_standard_fixture(dir.path());
    write(
        dir.path(),
        "ratings.csv",
        "Banco;Año;Proveedor;Nota\nSantander;2023;MSCI;AA\n",
    );

    let config = DataConfig::with_data_dir(dir.path());
    match DataStore::load(&config) {
        Err(LoadError::HeaderMismatch { dataset, .. }) => assert_eq!(dataset, "ratings"),
        other => panic!("expected HeaderMismatch, got {other:?}"),
    }
}

#[test]
fn duplicate_price_dates_abort_the_load() {
    let dir = TempDir::new().unwrap();
    write_standard_fixture(dir.path());
    write(
        dir.path(),
        "cotizaciones.csv",
        "Fecha;Santander\n2024-01-02;3,81\n2024-01-02;3,85\n",
    );

    let config = DataConfig::with_data_dir(dir.path());
    assert!(matches!(
        DataStore::load(&config),
        Err(LoadError::UnorderedDates { .. })
    ));
}

#[test]
fn unknown_horizon_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    write_standard_fixture(dir.path());
    write(
        dir.path(),
        "gestionriesgos.csv",
        "Banco;Horizonte;Riesgo;Tipo de riesgo;Valor\nSantander;XP;Riesgo fisico;Sequía;0,1\n",
    );

    let config = DataConfig::with_data_dir(dir.path());
    match DataStore::load(&config) {
        Err(LoadError::MalformedRow { dataset, row, .. }) => {
            assert_eq!(dataset, "gestionriesgos");
            assert_eq!(row, 1);
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn malformed_year_aborts_the_load() {
    let dir = TempDir::new().unwrap();
    write_standard_fixture(dir.path());
    write(
        dir.path(),
        "datosfinancieros.csv",
        "Banco;Año;ROE;Beneficio Neto;Ingresos\nSantander;dosmil;10;9000;52000\n",
    );

    let config = DataConfig::with_data_dir(dir.path());
    assert!(matches!(
        DataStore::load(&config),
        Err(LoadError::MalformedRow { .. })
    ));
}

#[test]
fn slash_dates_parse_like_iso_dates() {
    let dir = TempDir::new().unwrap();
    write_standard_fixture(dir.path());
    write(
        dir.path(),
        "cotizaciones.csv",
        "Fecha;Santander\n29/12/2023;100,0\n30/12/2024;120,0\n",
    );

    let config = DataConfig::with_data_dir(dir.path());
    let store = DataStore::load(&config).unwrap();
    assert_eq!(store.prices.len(), 2);
    assert_eq!(store.return_series("Santander").len(), 1);
}

#[test]
fn global_store_is_loaded_once_and_shared() {
    let dir = TempDir::new().unwrap();
    write_standard_fixture(dir.path());
    let config = DataConfig::with_data_dir(dir.path());

    let first = DataStore::global(&config).unwrap();
    // Deleting the files afterwards proves the second call never re-reads
    // disk: it must hand back the cached tables.
    drop(dir);
    let second = DataStore::global(&config).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.banks().len(), 2);
}

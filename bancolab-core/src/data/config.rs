//! Data-source configuration: where the seven dataset files live.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::LoadError;

/// File names of the seven datasets, resolved against `data_dir`.
/// Defaults mirror the upstream export names; a TOML file can override any
/// of them individually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    pub prices_file: String,
    pub financials_file: String,
    pub emissions_file: String,
    pub ratings_file: String,
    pub risks_file: String,
    pub volatility_file: String,
    pub gar_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            prices_file: "cotizaciones.csv".into(),
            financials_file: "datosfinancieros.csv".into(),
            emissions_file: "emisiones.csv".into(),
            ratings_file: "ratings.csv".into(),
            risks_file: "gestionriesgos.csv".into(),
            volatility_file: "volatilidadmensual.csv".into(),
            gar_file: "gar.csv".into(),
        }
    }
}

impl DataConfig {
    /// Default file names under the given directory.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Load from a TOML file. Relative `data_dir` entries stay relative to
    /// the process working directory, matching how the dashboard is launched.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|message| LoadError::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn prices_path(&self) -> PathBuf {
        self.data_dir.join(&self.prices_file)
    }

    pub fn financials_path(&self) -> PathBuf {
        self.data_dir.join(&self.financials_file)
    }

    pub fn emissions_path(&self) -> PathBuf {
        self.data_dir.join(&self.emissions_file)
    }

    pub fn ratings_path(&self) -> PathBuf {
        self.data_dir.join(&self.ratings_file)
    }

    pub fn risks_path(&self) -> PathBuf {
        self.data_dir.join(&self.risks_file)
    }

    pub fn volatility_path(&self) -> PathBuf {
        self.data_dir.join(&self.volatility_file)
    }

    pub fn gar_path(&self) -> PathBuf {
        self.data_dir.join(&self.gar_file)
    }
}

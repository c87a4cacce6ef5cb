// Finance settings, loaded from a JSON file or falling back to built-in defaults
use crate::calculations::DEFAULT_FUNRURAL_ALIQUOT;
use crate::error::{FinanceError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FinanceSettings {
    /// Funrural aliquot in percent of gross sales.
    pub funrural_aliquot: f64,
    pub min_stock: f64,
    pub csv_delimiter: char,
    pub date_format: String,
}

impl Default for FinanceSettings {
    fn default() -> Self {
        FinanceSettings {
            funrural_aliquot: DEFAULT_FUNRURAL_ALIQUOT,
            min_stock: 0.0,
            csv_delimiter: ';',
            date_format: "%d/%m/%Y".to_string(),
        }
    }
}

impl FinanceSettings {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: FinanceSettings = serde_json::from_str(json)?;
        settings.check()?;
        Ok(settings)
    }

    /// The settings shipped with the crate in `assets/config/default.json`.
    pub fn embedded_default() -> Result<Self> {
        Self::from_json_str(include_str!("../../assets/config/default.json"))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "Loaded finance settings");
        Ok(settings)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("No settings file given, using embedded defaults");
                Self::embedded_default()
            }
        }
    }

    fn check(&self) -> Result<()> {
        if !self.funrural_aliquot.is_finite() || self.funrural_aliquot < 0.0 {
            return Err(FinanceError::ConfigError(format!(
                "funrural_aliquot must be a non-negative number, got {}",
                self.funrural_aliquot
            )));
        }
        if !self.csv_delimiter.is_ascii() {
            return Err(FinanceError::ConfigError(format!(
                "csv_delimiter must be a single ASCII character, got '{}'",
                self.csv_delimiter
            )));
        }
        Ok(())
    }
}

// Finance library root
// Pure farm finance formulas and Brazilian field validators, plus the settings
// and CSV import used by the `finance` command-line tool.

pub mod calculations;
pub mod config;
pub mod data;
pub mod error;
pub mod validators;

pub use config::FinanceSettings;
pub use data::BrazilianCsvParser;
pub use error::FinanceError;

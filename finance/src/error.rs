use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration parsing error: {source}")]
    ConfigParseError {
        #[from]
        source: serde_json::Error,
    },

    #[error("CSV parsing system error: {source}")]
    CsvSystemError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("CSV data format error: {0}")]
    CsvDataFormatError(String),
}

pub type Result<T> = std::result::Result<T, FinanceError>;

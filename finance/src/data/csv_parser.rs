use crate::config::FinanceSettings;
use crate::error::{FinanceError, Result};
use csv::{ReaderBuilder, StringRecord};
use shared::models::{StockBatch, ValueEntry};
use shared::utils::brazilian_format;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads farm records exported from spreadsheets in Brazilian format:
/// `;`-separated columns, `.` for thousands and `,` for decimals.
pub struct BrazilianCsvParser {
    delimiter: u8,
}

impl Default for BrazilianCsvParser {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

impl BrazilianCsvParser {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn from_settings(settings: &FinanceSettings) -> Self {
        match u8::try_from(settings.csv_delimiter) {
            Ok(delimiter) if delimiter.is_ascii() => Self::new(delimiter),
            _ => {
                tracing::warn!(
                    delimiter = %settings.csv_delimiter,
                    "CSV delimiter is not a single ASCII character, using ';'"
                );
                Self::default()
            }
        }
    }

    // CSV Header: Quantidade;CustoUnitario
    // Example Row: 1.200;35,90
    pub fn load_stock_batches(&self, file_path: impl AsRef<Path>) -> Result<Vec<StockBatch>> {
        let file_path = file_path.as_ref();
        let batches = self.read_stock_batches(Self::open(file_path)?)?;
        tracing::info!(path = %file_path.display(), batches = batches.len(), "Loaded stock batches");
        Ok(batches)
    }

    pub fn read_stock_batches<R: Read>(&self, reader: R) -> Result<Vec<StockBatch>> {
        self.read_records(reader, |record, headers, line| {
            let quantity = Self::parse_field(record, headers, "Quantidade", line)?;
            let unit_cost = Self::parse_field(record, headers, "CustoUnitario", line)?;
            Ok(StockBatch::new(quantity, unit_cost))
        })
    }

    // CSV Header: Valor
    // Example Row: 12.500,00
    pub fn load_values(&self, file_path: impl AsRef<Path>) -> Result<Vec<ValueEntry>> {
        let file_path = file_path.as_ref();
        let values = self.read_values(Self::open(file_path)?)?;
        tracing::info!(path = %file_path.display(), values = values.len(), "Loaded values");
        Ok(values)
    }

    pub fn read_values<R: Read>(&self, reader: R) -> Result<Vec<ValueEntry>> {
        self.read_records(reader, |record, headers, line| {
            Self::parse_field(record, headers, "Valor", line).map(ValueEntry::new)
        })
    }

    fn open(file_path: &Path) -> Result<BufReader<File>> {
        let file = File::open(file_path).map_err(|e| {
            tracing::warn!(path = %file_path.display(), error = %e, "Failed to open CSV file");
            e
        })?;
        Ok(BufReader::new(file))
    }

    fn read_records<R, T, F>(&self, reader: R, mut parse: F) -> Result<Vec<T>>
    where
        R: Read,
        F: FnMut(&StringRecord, &StringRecord, usize) -> Result<T>,
    {
        let mut rdr = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut items = Vec::new();

        for (idx, result) in rdr.records().enumerate() {
            // +1 for the header row, +1 for 1-based line numbers
            let line = idx + 2;
            let record = result?;
            if record.iter().all(|field| field.trim().is_empty()) {
                tracing::debug!(line, "Skipping blank CSV row");
                continue;
            }
            items.push(parse(&record, &headers, line)?);
        }
        Ok(items)
    }

    fn parse_field(record: &StringRecord, headers: &StringRecord, name: &str, line: usize) -> Result<f64> {
        let raw = Self::get_field(record, headers, name).ok_or_else(|| {
            FinanceError::CsvDataFormatError(format!("Missing '{}' field in CSV record at line {}", name, line))
        })?;
        brazilian_format::parse_decimal(raw).map_err(|e| {
            FinanceError::CsvDataFormatError(format!("Error parsing '{}' at line {}: {}", name, line, e))
        })
    }

    // Looks a field up by header name so column order does not matter.
    fn get_field<'a>(record: &'a StringRecord, headers: &StringRecord, name: &str) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .and_then(|pos| record.get(pos))
    }
}

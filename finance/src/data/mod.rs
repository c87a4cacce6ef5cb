// Loading farm records from Brazilian-formatted files
pub mod csv_parser;

pub use csv_parser::BrazilianCsvParser;

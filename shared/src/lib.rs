pub mod models;
pub mod utils;

// Records exchanged between the finance library and its callers, plus the
// Brazilian number/date/document formatting helpers they rely on.
pub use models::{StockBatch, ValueEntry, Valued};
pub use utils::digits_only;

// Configuration for the finance library and CLI
pub mod settings;

pub use settings::FinanceSettings;

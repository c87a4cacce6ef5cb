//! Predicates for form input: Brazilian tax documents (CPF, CNPJ, NF-e keys),
//! contact details, money and area amounts, dates and generic field rules.
//!
//! All validators return `bool` and never panic. Malformed input is simply
//! invalid.

pub mod amounts;
pub mod contact;
pub mod dates;
pub mod documents;
pub mod fields;

pub use amounts::{
    validate_area, validate_currency, validate_range, validate_stock_quantity,
    validate_stock_quantity_with_min, CurrencyValue, MAX_AREA_HECTARES,
};
pub use contact::{validate_email, validate_phone};
pub use dates::{validate_date, validate_future_date, validate_past_date, DateInstant, DateLike};
pub use documents::{validate_cnpj, validate_cpf, validate_cpf_or_cnpj, validate_nfe_key};
pub use fields::{validate_max_length, validate_min_length, validate_required, Required};

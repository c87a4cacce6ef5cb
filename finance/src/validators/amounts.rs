// Range checks for money, land area and stock levels.
use shared::utils::brazilian_format;

/// Largest area, in hectares, accepted for a single property or plot.
pub const MAX_AREA_HECTARES: f64 = 1_000_000.0;

/// A currency value as it arrives from a form: already numeric, or typed text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurrencyValue<'a> {
    Amount(f64),
    Text(&'a str),
}

impl From<f64> for CurrencyValue<'_> {
    fn from(value: f64) -> Self {
        CurrencyValue::Amount(value)
    }
}

impl<'a> From<&'a str> for CurrencyValue<'a> {
    fn from(value: &'a str) -> Self {
        CurrencyValue::Text(value)
    }
}

impl<'a> From<&'a String> for CurrencyValue<'a> {
    fn from(value: &'a String) -> Self {
        CurrencyValue::Text(value.as_str())
    }
}

/// A non-negative finite amount. Text is read in Brazilian format
/// (`1.234,56`) and must be a number in full: a currency symbol, trailing
/// text or a second decimal comma makes it invalid.
pub fn validate_currency<'a>(value: impl Into<CurrencyValue<'a>>) -> bool {
    let amount = match value.into() {
        CurrencyValue::Amount(amount) => amount,
        CurrencyValue::Text(text) => match brazilian_format::parse_decimal(text) {
            Ok(amount) => amount,
            Err(_) => return false,
        },
    };
    amount.is_finite() && amount >= 0.0
}

pub fn validate_area(area: f64) -> bool {
    area > 0.0 && area <= MAX_AREA_HECTARES
}

pub fn validate_stock_quantity(quantity: f64) -> bool {
    validate_stock_quantity_with_min(quantity, 0.0)
}

/// Quantity must be non-negative and not below the item's minimum stock.
pub fn validate_stock_quantity_with_min(quantity: f64, min_stock: f64) -> bool {
    quantity >= 0.0 && quantity >= min_stock
}

pub fn validate_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_numbers() {
        assert!(validate_currency(0.0));
        assert!(validate_currency(1234.56));
        assert!(!validate_currency(-0.01));
        assert!(!validate_currency(f64::INFINITY));
        assert!(!validate_currency(f64::NAN));
    }

    #[test]
    fn test_currency_brazilian_text() {
        assert!(validate_currency("1.234,56"));
        assert!(validate_currency("0,99"));
        assert!(validate_currency("600.822.115,84"));
        assert!(validate_currency(&"15".to_string()));
        assert!(!validate_currency("-10,00"));
        assert!(!validate_currency("R$ 10,00"));
        assert!(!validate_currency("abc"));
        assert!(!validate_currency(""));
        assert!(!validate_currency("inf"));
    }

    #[test]
    fn test_currency_text_must_be_a_whole_number() {
        assert!(!validate_currency("10,00abc"));
        assert!(!validate_currency("1,5,0"));
        assert!(!validate_currency("10,00 reais"));
        assert!(validate_currency(" 10,00 "));
    }

    #[test]
    fn test_area() {
        assert!(validate_area(0.5));
        assert!(validate_area(MAX_AREA_HECTARES));
        assert!(!validate_area(0.0));
        assert!(!validate_area(-1.0));
        assert!(!validate_area(1_000_000.1));
    }

    #[test]
    fn test_stock_quantity() {
        assert!(validate_stock_quantity(0.0));
        assert!(!validate_stock_quantity(-1.0));
        assert!(validate_stock_quantity_with_min(10.0, 5.0));
        assert!(!validate_stock_quantity_with_min(4.0, 5.0));
        assert!(!validate_stock_quantity_with_min(-1.0, -5.0));
    }

    #[test]
    fn test_range() {
        assert!(validate_range(5.0, 0.0, 10.0));
        assert!(validate_range(0.0, 0.0, 10.0));
        assert!(validate_range(10.0, 0.0, 10.0));
        assert!(!validate_range(10.5, 0.0, 10.0));
    }
}

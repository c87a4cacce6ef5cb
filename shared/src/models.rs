use serde::{Deserialize, Serialize};

/// A single monetary entry, e.g. one expense or revenue line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueEntry {
    pub value: f64,
}

impl ValueEntry {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

/// A purchase lot of an input kept in stock (seed, fertilizer, diesel...).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StockBatch {
    pub quantity: f64,
    #[serde(rename = "unitCost", alias = "unit_cost")]
    pub unit_cost: f64,
}

impl StockBatch {
    pub fn new(quantity: f64, unit_cost: f64) -> Self {
        Self { quantity, unit_cost }
    }

    pub fn total_cost(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

// Anything carrying a monetary value that can be summed.
pub trait Valued {
    fn value(&self) -> f64;
}

impl Valued for ValueEntry {
    fn value(&self) -> f64 {
        self.value
    }
}

impl Valued for f64 {
    fn value(&self) -> f64 {
        *self
    }
}

impl<T: Valued + ?Sized> Valued for &T {
    fn value(&self) -> f64 {
        (**self).value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_batch_total_cost() {
        assert_eq!(StockBatch::new(10.0, 2.5).total_cost(), 25.0);
    }

    #[test]
    fn test_stock_batch_deserializes_camel_case() {
        let batch: StockBatch = serde_json::from_str(r#"{"quantity": 4, "unitCost": 12.5}"#).unwrap();
        assert_eq!(batch, StockBatch::new(4.0, 12.5));

        let batch: StockBatch = serde_json::from_str(r#"{"quantity": 1, "unit_cost": 3}"#).unwrap();
        assert_eq!(batch.unit_cost, 3.0);
    }

    #[test]
    fn test_value_entry_is_valued() {
        let entry = ValueEntry::new(42.5);
        assert_eq!(entry.value(), 42.5);
        assert_eq!((&entry).value(), 42.5);
        assert_eq!(7.0_f64.value(), 7.0);
    }
}

//! Financial and agronomic formulas.
//!
//! Every function here is pure and total: degenerate inputs (division by
//! zero, empty sequences) return a fixed sentinel, usually `0.0`, instead of
//! NaN or a panic. `break_even` is the one exception and reports an
//! unreachable break-even point as `f64::INFINITY`.

pub mod assets;
pub mod credit;
pub mod due_dates;
pub mod margin;
pub mod series;
pub mod stock;
pub mod tax;

pub use assets::linear_depreciation;
pub use credit::{compound_interest, loan_installment};
pub use due_dates::{days_overdue, days_overdue_from, days_until_due, days_until_due_from};
pub use margin::{
    break_even, cost_per_hectare, gross_margin, margin_per_hectare, margin_percentage,
    percentage_variation, roi, yield_per_hectare,
};
pub use series::{average, moving_average, sum_values};
pub use stock::{average_stock, stock_turnover, weighted_average_cost};
pub use tax::{funrural, funrural_with_aliquot, DEFAULT_FUNRURAL_ALIQUOT};

/// Rounds to two decimal places by scaling to cents and rounding half away
/// from zero.
///
/// Binary representation leaks through: `1.005 * 100.0` is
/// `100.49999999999999`, so `round_to_cents(1.005)` is `1.0`.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Yearly straight-line depreciation of a machine or building.
///
/// An asset with no useful life left depreciates by 0.
pub fn linear_depreciation(acquisition_value: f64, residual_value: f64, useful_life_years: f64) -> f64 {
    if useful_life_years == 0.0 {
        return 0.0;
    }
    (acquisition_value - residual_value) / useful_life_years
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_depreciation() {
        assert_eq!(linear_depreciation(500_000.0, 100_000.0, 10.0), 40_000.0);
        assert_eq!(linear_depreciation(500_000.0, 100_000.0, 0.0), 0.0);
    }
}

// Profitability metrics: margins, per-hectare figures, ROI and break-even.

pub fn gross_margin(revenue: f64, costs: f64) -> f64 {
    revenue - costs
}

/// Margin as a percentage of revenue. Zero revenue yields 0.
pub fn margin_percentage(revenue: f64, costs: f64) -> f64 {
    if revenue == 0.0 {
        return 0.0;
    }
    (revenue - costs) / revenue * 100.0
}

pub fn margin_per_hectare(margin: f64, area: f64) -> f64 {
    if area == 0.0 {
        return 0.0;
    }
    margin / area
}

pub fn cost_per_hectare(total_cost: f64, area: f64) -> f64 {
    if area == 0.0 {
        return 0.0;
    }
    total_cost / area
}

/// Return on investment in percent. Zero investment yields 0.
pub fn roi(profit: f64, investment: f64) -> f64 {
    if investment == 0.0 {
        return 0.0;
    }
    profit / investment * 100.0
}

/// Units that must be sold for the contribution margin to cover `fixed_costs`.
///
/// When the price does not exceed the variable cost the break-even point is
/// never reached and `f64::INFINITY` is returned.
pub fn break_even(fixed_costs: f64, price_per_unit: f64, variable_cost_per_unit: f64) -> f64 {
    let contribution_margin = price_per_unit - variable_cost_per_unit;
    if contribution_margin <= 0.0 {
        tracing::trace!(
            price_per_unit,
            variable_cost_per_unit,
            "Non-positive contribution margin, break-even unreachable"
        );
        return f64::INFINITY;
    }
    fixed_costs / contribution_margin
}

pub fn yield_per_hectare(production: f64, area: f64) -> f64 {
    if area == 0.0 {
        return 0.0;
    }
    production / area
}

/// Change from `previous` to `current` in percent.
///
/// With no previous value, any positive current value counts as a 100% rise
/// and anything else as no change.
pub fn percentage_variation(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    (current - previous) / previous * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gross_margin() {
        assert_eq!(gross_margin(1500.0, 1000.0), 500.0);
        assert_eq!(gross_margin(800.0, 1000.0), -200.0);
    }

    #[test]
    fn test_margin_percentage() {
        assert_eq!(margin_percentage(1000.0, 750.0), 25.0);
        assert_eq!(margin_percentage(1000.0, 1250.0), -25.0);
        assert_eq!(margin_percentage(0.0, 500.0), 0.0);
    }

    #[test]
    fn test_per_hectare_guards() {
        assert_eq!(margin_per_hectare(1000.0, 4.0), 250.0);
        assert_eq!(margin_per_hectare(1000.0, 0.0), 0.0);
        assert_eq!(margin_per_hectare(-1000.0, 0.0), 0.0);
        assert_eq!(cost_per_hectare(3000.0, 12.0), 250.0);
        assert_eq!(cost_per_hectare(3000.0, 0.0), 0.0);
        assert_eq!(yield_per_hectare(180.0, 3.0), 60.0);
        assert_eq!(yield_per_hectare(180.0, 0.0), 0.0);
    }

    #[test]
    fn test_roi() {
        assert_eq!(roi(250.0, 1000.0), 25.0);
        assert_eq!(roi(250.0, 0.0), 0.0);
    }

    #[test]
    fn test_break_even() {
        assert_eq!(break_even(1000.0, 30.0, 20.0), 100.0);
        assert_eq!(break_even(1000.0, 20.0, 20.0), f64::INFINITY);
        assert_eq!(break_even(1000.0, 10.0, 20.0), f64::INFINITY);
        assert_eq!(break_even(0.0, 10.0, 20.0), f64::INFINITY);
    }

    #[test]
    fn test_percentage_variation() {
        assert_eq!(percentage_variation(150.0, 100.0), 50.0);
        assert_eq!(percentage_variation(50.0, 100.0), -50.0);
        assert_eq!(percentage_variation(10.0, 0.0), 100.0);
        assert_eq!(percentage_variation(0.0, 0.0), 0.0);
        assert_eq!(percentage_variation(-10.0, 0.0), 0.0);
    }
}

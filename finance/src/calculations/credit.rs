// Interest and financing: compound growth and Price-table installments.

/// Value of `principal` after `periods` compounding periods at `rate` percent.
pub fn compound_interest(principal: f64, rate: f64, periods: f64) -> f64 {
    principal * (1.0 + rate / 100.0).powf(periods)
}

/// Fixed monthly installment of a loan amortized with the Price (PMT) formula.
///
/// `annual_rate` is a yearly percentage, applied monthly as `annual_rate / 12`.
/// Without interest the principal is split evenly across the months. A loan
/// with no months has no installment and yields 0.
pub fn loan_installment(principal: f64, annual_rate: f64, months: u32) -> f64 {
    if months == 0 {
        tracing::trace!(principal, annual_rate, "Loan with zero months has no installment");
        return 0.0;
    }
    let n = f64::from(months);
    if annual_rate == 0.0 {
        return principal / n;
    }

    let monthly_rate = annual_rate / 100.0 / 12.0;
    let factor = (1.0 + monthly_rate).powf(n);
    principal * monthly_rate * factor / (factor - 1.0)
}

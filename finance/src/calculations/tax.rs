/// Funrural aliquot, in percent of gross sales, applied when none is given.
pub const DEFAULT_FUNRURAL_ALIQUOT: f64 = 2.3;

/// Funrural contribution on a sale at the default 2.3% aliquot.
pub fn funrural(sale_value: f64) -> f64 {
    funrural_with_aliquot(sale_value, DEFAULT_FUNRURAL_ALIQUOT)
}

pub fn funrural_with_aliquot(sale_value: f64, aliquot: f64) -> f64 {
    sale_value * aliquot / 100.0
}

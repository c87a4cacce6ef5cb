// Helpers shared by the finance library and the CLI: digit stripping for
// document identifiers and Brazilian number/date formatting.

/// Keeps only the ASCII digits of `s`, dropping masks like `.`, `-` and `/`.
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats an 11-digit CPF as `000.000.000-00`.
pub fn format_cpf(s: &str) -> Option<String> {
    let d = digits_only(s);
    if d.len() != 11 {
        return None;
    }
    Some(format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11]))
}

/// Formats a 14-digit CNPJ as `00.000.000/0000-00`.
pub fn format_cnpj(s: &str) -> Option<String> {
    let d = digits_only(s);
    if d.len() != 14 {
        return None;
    }
    Some(format!(
        "{}.{}.{}/{}-{}",
        &d[0..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..14]
    ))
}

pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use std::str::FromStr;

    /// Parses decimals like "1.234,56" or "123,45" into f64.
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s
            .trim()
            .replace('.', "") // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Formats `value` with `decimals` places, `,` as decimal separator and
    /// `.` grouping thousands.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }

        let negative = value < 0.0 && formatted.chars().any(|c| matches!(c, '1'..='9'));
        let sign = if negative { "-" } else { "" };
        match frac_part {
            Some(frac) => format!("{sign}{grouped},{frac}"),
            None => format!("{sign}{grouped}"),
        }
    }

    /// Formats a monetary amount in reais, e.g. `R$ 1.234,50`.
    pub fn format_currency(value: f64) -> String {
        let body = format_decimal(value, 2);
        match body.strip_prefix('-') {
            Some(abs) => format!("-R$ {abs}"),
            None => format!("R$ {body}"),
        }
    }

    /// Parses a date in the "dd/mm/yyyy" form.
    pub fn parse_date(s: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y")
            .map_err(|e| anyhow!("Failed to parse date '{}': {}", s, e))
    }

}

// Brazilian tax identifiers (CPF, CNPJ) and NF-e access keys.
use shared::digits_only;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn to_digits(cleaned: &str) -> Vec<u32> {
    cleaned.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_same(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

// CPF check digit over the first `len` digits, weights `len + 1` down to 2.
fn cpf_check_digit(digits: &[u32], len: usize) -> u32 {
    let sum: u32 = digits[..len]
        .iter()
        .zip((2..=len as u32 + 1).rev())
        .map(|(d, w)| d * w)
        .sum();
    let digit = (sum * 10) % 11;
    if digit == 10 {
        0
    } else {
        digit
    }
}

fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        11 - remainder
    }
}

/// Validates a CPF, with or without the `000.000.000-00` mask.
pub fn validate_cpf(cpf: &str) -> bool {
    let cleaned = digits_only(cpf);
    if cleaned.len() != 11 {
        return false;
    }
    let digits = to_digits(&cleaned);
    if all_same(&digits) {
        return false;
    }

    cpf_check_digit(&digits, 9) == digits[9] && cpf_check_digit(&digits, 10) == digits[10]
}

/// Validates a CNPJ, with or without the `00.000.000/0000-00` mask.
pub fn validate_cnpj(cnpj: &str) -> bool {
    let cleaned = digits_only(cnpj);
    if cleaned.len() != 14 {
        return false;
    }
    let digits = to_digits(&cleaned);
    if all_same(&digits) {
        return false;
    }

    cnpj_check_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS) == digits[12]
        && cnpj_check_digit(&digits[..13], &CNPJ_SECOND_WEIGHTS) == digits[13]
}

/// Dispatches on the number of digits: 11 is a CPF, 14 a CNPJ.
pub fn validate_cpf_or_cnpj(document: &str) -> bool {
    match digits_only(document).len() {
        11 => validate_cpf(document),
        14 => validate_cnpj(document),
        _ => false,
    }
}

/// An NF-e access key is exactly 44 digits once spaces and masks are removed.
pub fn validate_nfe_key(key: &str) -> bool {
    digits_only(key).len() == 44
}

use regex::Regex;
use shared::digits_only;
use std::sync::OnceLock;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Accepts anything shaped like `local@domain.tld`.
///
/// Deliberately loose: no RFC 5322 rules beyond a single `@`, no whitespace
/// and a dot somewhere after the `@`.
pub fn validate_email(email: &str) -> bool {
    let re = EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
    re.is_match(email)
}

/// Brazilian phone with area code: 10 digits for landlines, 11 for mobiles.
pub fn validate_phone(phone: &str) -> bool {
    matches!(digits_only(phone).len(), 10 | 11)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("produtor.rural@fazenda.com.br"));
        assert!(validate_email("a@b.c.d"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!validate_email("no-at-sign"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("(11) 98765-4321"));
        assert!(validate_phone("(16) 3333-4444"));
        assert!(!validate_phone("98765-4321"));
        assert!(!validate_phone("+55 (11) 98765-4321"));
    }
}

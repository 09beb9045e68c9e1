use once_cell::sync::Lazy;
use regex::Regex;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

// local-part: dot-separated atoms; domain: dot-separated labels ending in an alphabetic TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@([a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}$",
    )
    .unwrap()
});

/// Syntactic email check. No DNS lookup is performed.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    match email.rsplit_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_PART_LENGTH => EMAIL_REGEX.is_match(email),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(is_valid_email("valid@email.com"));
        assert!(is_valid_email("Jane.Doe@Example.COM"));
        assert!(is_valid_email("first+tag@mail.sub-domain.org"));
        assert!(is_valid_email("o'brien@example.ie"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("invalid email address"));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("dots..twice@example.com"));
        assert!(!is_valid_email(".leading@example.com"));
        assert!(!is_valid_email("user@-dash.com"));
        assert!(!is_valid_email("user@example.c0m"));
    }

    #[test]
    fn test_non_ascii_letters_rejected() {
        // KELVIN SIGN and LONG S case-fold to ASCII letters
        assert!(!is_valid_email("user@example.\u{212A}\u{212A}"));
        assert!(!is_valid_email("\u{17F}\u{17F}@example.com"));
    }

    #[test]
    fn test_local_part_length() {
        assert!(is_valid_email(&format!("{}@example.com", "a".repeat(64))));
        assert!(!is_valid_email(&format!("{}@example.com", "a".repeat(65))));
        assert!(!is_valid_email(&format!("{}@example.com", "a".repeat(100))));
    }

    #[test]
    fn test_overlong_address() {
        let local = "a".repeat(64);
        let domain = format!("{}.com", "b".repeat(200));
        assert!(!is_valid_email(&format!("{}@{}", local, domain)));
    }
}

//! Character rules - checks the password alphabet and digit presence.

/// Checks if the password is non-empty and consists only of ASCII latin
/// letters and digits.
pub fn is_alnum_only(password: &str) -> bool {
    !password.is_empty() && password.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Checks if the password contains at least one digit.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Combined character rule: only latin letters and digits, with at least
/// one digit present.
pub fn valid_characters(password: &str) -> bool {
    is_alnum_only(password) && has_digit(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alnum_only_rejects_empty() {
        assert!(!is_alnum_only(""));
    }

    #[test]
    fn test_alnum_only_rejects_symbols() {
        assert!(!is_alnum_only("abc123!"));
        assert!(!is_alnum_only("with space1"));
        assert!(!is_alnum_only("tab\there1"));
    }

    #[test]
    fn test_alnum_only_rejects_non_ascii() {
        assert!(!is_alnum_only("pässword1"));
    }

    #[test]
    fn test_alnum_only_accepts_letters_and_digits() {
        assert!(is_alnum_only("abcDEF123"));
        assert!(is_alnum_only("abcdef"));
        assert!(is_alnum_only("123"));
    }

    #[test]
    fn test_has_digit() {
        assert!(!has_digit(""));
        assert!(!has_digit("letters"));
        assert!(has_digit("letters9"));
        assert!(has_digit("0"));
    }

    #[test]
    fn test_valid_characters_requires_digit() {
        assert!(!valid_characters("onlyletters"));
        assert!(valid_characters("letters123"));
        assert!(!valid_characters("letters123!"));
        assert!(!valid_characters(""));
    }
}

//! Common validation utilities

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    // Deliberately permissive: deliverability is proven by the activation
    // link, not by the regex.
    static EMAIL_REGEX: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap());

    /// Check if a string is not empty after trimming
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if an email address has a plausible shape
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_not_empty() {
        assert!(not_empty("value"));
        assert!(!not_empty(""));
        assert!(!not_empty("   "));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("123456", 6, 6));
        assert!(!length_between("12345", 6, 6));
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("test@test.test"));
        assert!(is_valid_email("newtest@test.com"));
        assert!(!is_valid_email("not_exist"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("two@at@signs.com"));
    }
}

//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid (E.164 format)
pub fn is_valid_phone(phone: &str) -> bool {
    E164_REGEX.is_match(&normalize_phone(phone))
}

/// Mask a phone number for display and logging (e.g., +20****3988)
pub fn mask_phone(phone: &str) -> String {
    let normalized = normalize_phone(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone() {
        assert_eq!(normalize_phone("+20 100 526 3988"), "+201005263988");
        assert_eq!(normalize_phone("(201) 005-2639"), "2010052639");
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+201005263988"));
        assert!(is_valid_phone("+14155552671"));
        assert!(!is_valid_phone("201005263988")); // Missing +
        assert!(!is_valid_phone("+0123456789")); // Invalid country code
        assert!(!is_valid_phone("")); // Empty
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+201005263988"), "+20****3988");
        assert_eq!(mask_phone("12312123"), "123****2123");
        assert_eq!(mask_phone("12345"), "****");
    }
}

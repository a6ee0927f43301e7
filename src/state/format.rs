//! Input masks applied while the user types
//!
//! Every formatter strips the raw input down to its digits, truncates to the
//! mask capacity and then re-inserts the literal separators progressively.
//! Applying a formatter to its own output yields the same string.

/// Maximum digits in a phone number: `(DD) DDDDD-DDDD`
pub const PHONE_DIGITS: usize = 11;

/// Maximum digits in a postal code: `DDDDD-DDD`
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Maximum digits in a birth date: `DD/MM/AAAA`
pub const DATE_DIGITS: usize = 8;

/// Input masks a text field can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    Phone,
    PostalCode,
    Date,
}

impl Mask {
    /// Apply this mask to raw input
    pub fn apply(self, raw: &str) -> String {
        match self {
            Mask::Phone => format_phone(raw),
            Mask::PostalCode => format_postal_code(raw),
            Mask::Date => format_birth_date(raw),
        }
    }

    /// Number of digits the mask holds
    pub fn capacity(self) -> usize {
        match self {
            Mask::Phone => PHONE_DIGITS,
            Mask::PostalCode => POSTAL_CODE_DIGITS,
            Mask::Date => DATE_DIGITS,
        }
    }
}

/// Remove everything that is not an ASCII digit
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

fn truncated_digits(raw: &str, max: usize) -> String {
    let mut digits = digits_only(raw);
    digits.truncate(max);
    digits
}

/// Format a phone number as `(DD) DDDDD-DDDD`
pub fn format_phone(raw: &str) -> String {
    let digits = truncated_digits(raw, PHONE_DIGITS);

    match digits.len() {
        0..=2 => digits,
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

/// Format a postal code (CEP) as `DDDDD-DDD`
pub fn format_postal_code(raw: &str) -> String {
    let digits = truncated_digits(raw, POSTAL_CODE_DIGITS);

    if digits.len() <= 5 {
        digits
    } else {
        format!("{}-{}", &digits[..5], &digits[5..])
    }
}

/// Format a birth date as `DD/MM/AAAA`
pub fn format_birth_date(raw: &str) -> String {
    let digits = truncated_digits(raw, DATE_DIGITS);

    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every prefix of a digit string, from empty to full length
    fn prefixes(digits: &str) -> Vec<&str> {
        (0..=digits.len()).map(|n| &digits[..n]).collect()
    }

    mod phone {
        use super::*;

        #[test]
        fn test_progressive_mask() {
            assert_eq!(format_phone(""), "");
            assert_eq!(format_phone("8"), "8");
            assert_eq!(format_phone("83"), "83");
            assert_eq!(format_phone("839"), "(83) 9");
            assert_eq!(format_phone("8399999"), "(83) 99999");
            assert_eq!(format_phone("83999991"), "(83) 99999-1");
            assert_eq!(format_phone("83999991234"), "(83) 99999-1234");
        }

        #[test]
        fn test_strips_non_digits() {
            assert_eq!(format_phone("(83) 9a9b9-99x1234"), "(83) 99999-1234");
        }

        #[test]
        fn test_truncates_beyond_eleven_digits() {
            assert_eq!(format_phone("839999912345678"), "(83) 99999-1234");
        }

        #[test]
        fn test_idempotent_for_all_lengths() {
            for input in prefixes("83999991234") {
                let once = format_phone(input);
                assert_eq!(format_phone(&once), once, "input {input:?}");
            }
        }

        #[test]
        fn test_full_mask_matches_validation_pattern() {
            let re = regex::Regex::new(r"^\(\d{2}\)\s\d{5}-\d{4}$").unwrap();
            assert!(re.is_match(&format_phone("83999991234")));
            assert!(!re.is_match(&format_phone("8399999123")));
        }
    }

    mod postal_code {
        use super::*;

        #[test]
        fn test_progressive_mask() {
            assert_eq!(format_postal_code(""), "");
            assert_eq!(format_postal_code("58000"), "58000");
            assert_eq!(format_postal_code("580001"), "58000-1");
            assert_eq!(format_postal_code("58000123"), "58000-123");
        }

        #[test]
        fn test_truncates_beyond_eight_digits() {
            assert_eq!(format_postal_code("5800012345"), "58000-123");
        }

        #[test]
        fn test_idempotent_for_all_lengths() {
            for input in prefixes("58000123") {
                let once = format_postal_code(input);
                assert_eq!(format_postal_code(&once), once, "input {input:?}");
            }
        }

        #[test]
        fn test_reformatting_after_deleting_separator() {
            // Backspace over "58000-1" leaves "58000-" which collapses to bare digits
            assert_eq!(format_postal_code("58000-"), "58000");
        }
    }

    mod birth_date {
        use super::*;

        #[test]
        fn test_progressive_mask() {
            assert_eq!(format_birth_date("1"), "1");
            assert_eq!(format_birth_date("15"), "15");
            assert_eq!(format_birth_date("150"), "15/0");
            assert_eq!(format_birth_date("1503"), "15/03");
            assert_eq!(format_birth_date("15031990"), "15/03/1990");
        }

        #[test]
        fn test_idempotent_for_all_lengths() {
            for input in prefixes("15031990") {
                let once = format_birth_date(input);
                assert_eq!(format_birth_date(&once), once, "input {input:?}");
            }
        }
    }

    #[test]
    fn test_mask_apply_dispatches() {
        assert_eq!(Mask::Phone.apply("83999991234"), "(83) 99999-1234");
        assert_eq!(Mask::PostalCode.apply("58000123"), "58000-123");
        assert_eq!(Mask::Date.apply("01012000"), "01/01/2000");
        assert_eq!(Mask::Phone.capacity(), 11);
    }
}

//! Declarative validation rules evaluated before a form may be submitted

use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

/// Date format typed into birth date fields
pub const DATE_INPUT_FORMAT: &str = "%d/%m/%Y";

/// `(xx) xxxxx-xxxx`
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\)\s\d{5}-\d{4}$").expect("phone pattern compiles"));

/// `00000-000`
pub static POSTAL_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{5}-\d{3}$").expect("postal code pattern compiles"));

/// A single constraint on a field value
#[derive(Debug, Clone)]
pub enum Rule {
    Required(&'static str),
    MinLength(usize, &'static str),
    Pattern(&'static Regex, &'static str),
    Integer(&'static str),
    Min(i64, &'static str),
    Max(i64, &'static str),
    /// A real calendar date typed as `DD/MM/AAAA`, not in the future
    PastDate(&'static str),
}

impl Rule {
    /// Check a value against this rule.
    ///
    /// Empty values only fail `Required`; every other rule treats an empty
    /// value as "not provided" so optional fields stay optional.
    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return match self {
                Rule::Required(message) => Err(*message),
                _ => Ok(()),
            };
        }

        let ok = match self {
            Rule::Required(_) => true,
            Rule::MinLength(min, _) => trimmed.chars().count() >= *min,
            Rule::Pattern(regex, _) => regex.is_match(value),
            Rule::Integer(_) => trimmed.parse::<i64>().is_ok(),
            // Non-numeric values are reported by `Integer`
            Rule::Min(min, _) => trimmed.parse::<i64>().map_or(true, |n| n >= *min),
            Rule::Max(max, _) => trimmed.parse::<i64>().map_or(true, |n| n <= *max),
            Rule::PastDate(_) => parse_input_date(trimmed)
                .is_some_and(|date| date <= Local::now().date_naive()),
        };

        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Rule::Required(m)
            | Rule::MinLength(_, m)
            | Rule::Pattern(_, m)
            | Rule::Integer(m)
            | Rule::Min(_, m)
            | Rule::Max(_, m)
            | Rule::PastDate(m) => *m,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Rule::Required(_))
    }
}

/// Evaluate rules in order and return the first failure message
pub fn first_violation(rules: &[Rule], value: &str) -> Option<&'static str> {
    rules.iter().find_map(|rule| rule.check(value).err())
}

/// Parse a `DD/MM/AAAA` date
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rule = Rule::Required("Nome é obrigatório");
        assert_eq!(rule.check(""), Err("Nome é obrigatório"));
        assert_eq!(rule.check("   "), Err("Nome é obrigatório"));
        assert!(rule.check("Ana").is_ok());
    }

    #[test]
    fn test_optional_rules_skip_empty_values() {
        let rule = Rule::Pattern(&POSTAL_CODE_PATTERN, "CEP inválido");
        assert!(rule.check("").is_ok());
        assert!(rule.check("58000-123").is_ok());
        assert_eq!(rule.check("58000-12"), Err("CEP inválido"));
    }

    #[test]
    fn test_min_length_counts_chars() {
        let rule = Rule::MinLength(2, "curto");
        assert!(rule.check("Zé").is_ok());
        assert_eq!(rule.check("Z"), Err("curto"));
    }

    #[test]
    fn test_phone_pattern() {
        let rule = Rule::Pattern(&PHONE_PATTERN, "Formato: (xx) xxxxx-xxxx");
        assert!(rule.check("(83) 99999-9999").is_ok());
        assert!(rule.check("(83) 9999-9999").is_err());
        assert!(rule.check("83999999999").is_err());
    }

    #[test]
    fn test_numeric_range() {
        let rules = [
            Rule::Required("obrigatória"),
            Rule::Integer("número"),
            Rule::Min(0, "min"),
            Rule::Max(120, "max"),
        ];
        assert_eq!(first_violation(&rules, ""), Some("obrigatória"));
        assert_eq!(first_violation(&rules, "abc"), Some("número"));
        assert_eq!(first_violation(&rules, "121"), Some("max"));
        assert_eq!(first_violation(&rules, "-1"), Some("min"));
        assert_eq!(first_violation(&rules, "0"), None);
        assert_eq!(first_violation(&rules, "120"), None);
    }

    #[test]
    fn test_past_date() {
        let rule = Rule::PastDate("data inválida");
        assert!(rule.check("15/03/1990").is_ok());
        assert!(rule.check("31/02/1990").is_err());
        assert!(rule.check("15/03").is_err());
        assert!(rule.check("01/01/9999").is_err());
    }

    #[test]
    fn test_first_violation_respects_order() {
        let rules = [Rule::Required("req"), Rule::MinLength(2, "len")];
        assert_eq!(first_violation(&rules, "a"), Some("len"));
        assert_eq!(first_violation(&rules, ""), Some("req"));
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("01/02/2003"),
            NaiveDate::from_ymd_opt(2003, 2, 1)
        );
        assert!(parse_input_date("2003-02-01").is_none());
    }
}

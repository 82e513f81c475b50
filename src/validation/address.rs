use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{FieldError, FieldRules};

lazy_static! {
    static ref ADDRESS_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9\s,]+$").unwrap();
    static ref LENIENT_ADDRESS_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9\s,.]+$").unwrap();
}

pub struct AddressValidator;

impl AddressValidator {
    /// Empty input means no address was given.
    pub fn validate(raw: &str, rules: &FieldRules) -> Result<Option<String>, FieldError> {
        if raw.is_empty() {
            return Ok(None);
        }
        if raw.chars().count() > rules.address_max_len {
            return Err(FieldError::AddressTooLong {
                max: rules.address_max_len,
            });
        }

        let (pattern, allowed) = if rules.address_allows_period {
            (
                &*LENIENT_ADDRESS_PATTERN,
                "letters, digits, whitespace, commas and periods",
            )
        } else {
            (&*ADDRESS_PATTERN, "letters, digits, whitespace and commas")
        };
        if !pattern.is_match(raw) {
            return Err(FieldError::AddressInvalidCharacters { allowed });
        }
        Ok(Some(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_is_optional() {
        assert_eq!(AddressValidator::validate("", &FieldRules::new()), Ok(None));
    }

    #[test]
    fn test_accepts_street_address() {
        assert_eq!(
            AddressValidator::validate("12 Le Loi, District 1", &FieldRules::new()),
            Ok(Some("12 Le Loi, District 1".to_string()))
        );
    }

    #[test]
    fn test_period_only_in_lenient_mode() {
        let strict = FieldRules::new();
        assert!(matches!(
            AddressValidator::validate("12 St. Mark", &strict),
            Err(FieldError::AddressInvalidCharacters { .. })
        ));

        let lenient = FieldRules {
            address_allows_period: true,
            ..FieldRules::new()
        };
        assert!(AddressValidator::validate("12 St. Mark", &lenient).is_ok());
        assert!(AddressValidator::validate("12 St. Mark #4", &lenient).is_err());
    }

    #[test]
    fn test_configured_length_bound() {
        let rules = FieldRules {
            address_max_len: 200,
            ..FieldRules::new()
        };
        assert!(AddressValidator::validate(&"a".repeat(200), &rules).is_ok());
        assert_eq!(
            AddressValidator::validate(&"a".repeat(201), &rules),
            Err(FieldError::AddressTooLong { max: 200 })
        );
    }
}

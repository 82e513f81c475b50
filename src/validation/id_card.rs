use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{FieldError, FieldRules};

lazy_static! {
    static ref DIGITS_ONLY: Regex = Regex::new(r"^[0-9]+$").unwrap();
}

pub struct IdCardValidator;

impl IdCardValidator {
    pub fn validate(raw: &str, rules: &FieldRules) -> Result<String, FieldError> {
        if raw.is_empty() {
            return Err(FieldError::IdCardRequired);
        }
        if raw.chars().count() != rules.id_card_len {
            return Err(FieldError::IdCardLength {
                expected: rules.id_card_len,
            });
        }
        if !DIGITS_ONLY.is_match(raw) {
            return Err(FieldError::IdCardNotNumeric);
        }
        Ok(raw.to_string())
    }
}

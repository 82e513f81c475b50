use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{FieldError, FieldRules};

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[a-zA-Z\s]+$").unwrap();
}

pub struct NameValidator;

impl NameValidator {
    pub fn validate(raw: &str, rules: &FieldRules) -> Result<String, FieldError> {
        if raw.is_empty() {
            return Err(FieldError::NameRequired);
        }
        if raw.chars().count() > rules.name_max_len {
            return Err(FieldError::NameTooLong {
                max: rules.name_max_len,
            });
        }
        if !NAME_PATTERN.is_match(raw) {
            return Err(FieldError::NameInvalidCharacters);
        }
        Ok(raw.to_string())
    }
}

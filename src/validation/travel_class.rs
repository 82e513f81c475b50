use crate::models::{FieldError, TravelClass};

pub struct TravelClassValidator;

impl TravelClassValidator {
    pub fn validate(raw: &str) -> Result<TravelClass, FieldError> {
        if raw.trim().is_empty() {
            return Err(FieldError::TravelClassRequired);
        }
        raw.parse()
            .map_err(|_| FieldError::TravelClassUnknown(raw.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_classes() {
        assert_eq!(TravelClassValidator::validate("economy"), Ok(TravelClass::Economy));
        assert_eq!(TravelClassValidator::validate("BUSINESS"), Ok(TravelClass::Business));
    }

    #[test]
    fn test_missing_or_unknown_class() {
        assert_eq!(
            TravelClassValidator::validate("  "),
            Err(FieldError::TravelClassRequired)
        );
        assert_eq!(
            TravelClassValidator::validate("first"),
            Err(FieldError::TravelClassUnknown("first".to_string()))
        );
    }
}

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use log::debug;
use serde::Deserialize;

use crate::models::rules::ADDRESS_MAX_LEN;
use crate::utils::BookingError;
use crate::validation::DateValidator;

/// Tunables for a booking session, read from a JSON file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct BookingConfig {
    pub address_max_length: usize,
    pub address_allows_period: bool,
    /// Fixed "today" in dd/mm/yyyy; the local date is used when absent.
    pub reference_date: Option<String>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            address_max_length: ADDRESS_MAX_LEN,
            address_allows_period: false,
            reference_date: None,
        }
    }
}

impl BookingConfig {
    pub fn load(path: &Path) -> Result<Self, BookingError> {
        let raw = fs::read_to_string(path)?;
        debug!("Loaded booking config from {:?}", path);
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, BookingError> {
        let config: BookingConfig = serde_json::from_str(raw)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), BookingError> {
        if self.address_max_length == 0 {
            return Err(BookingError::Config(
                "addressMaxLength must be greater than zero".to_string(),
            ));
        }
        self.today().map(|_| ())
    }

    /// The date every age and future-date check is measured against.
    pub fn today(&self) -> Result<NaiveDate, BookingError> {
        match &self.reference_date {
            Some(raw) => DateValidator::parse(raw, "reference date").map_err(|e| {
                BookingError::Config(format!("referenceDate: {}", e))
            }),
            None => Ok(Local::now().date_naive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_keys_missing() {
        let config = BookingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, BookingConfig::default());
        assert_eq!(config.address_max_length, 2000);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"addressMaxLength": 200, "addressAllowsPeriod": true, "referenceDate": "01/01/2024"}}"#
        )
        .unwrap();

        let config = BookingConfig::load(file.path()).unwrap();
        assert_eq!(config.address_max_length, 200);
        assert!(config.address_allows_period);
        assert_eq!(
            config.today().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_rejects_bad_reference_date() {
        let err = BookingConfig::from_json_str(r#"{"referenceDate": "30/02/2024"}"#).unwrap_err();
        assert!(matches!(err, BookingError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_address_bound() {
        let err = BookingConfig::from_json_str(r#"{"addressMaxLength": 0}"#).unwrap_err();
        assert!(matches!(err, BookingError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let err = BookingConfig::from_json_str(r#"{"currency": "VND"}"#).unwrap_err();
        assert!(matches!(err, BookingError::Json(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BookingConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, BookingError::Io(_)));
    }
}

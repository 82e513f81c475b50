use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::models::FieldError;

lazy_static! {
    static ref FORM_DATE: Regex =
        Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/([0-9]{4})$").unwrap();
}

pub const BIRTH_DATE_LABEL: &str = "date of birth";
pub const DEPARTURE_DATE_LABEL: &str = "departure date";

pub struct DateValidator;

impl DateValidator {
    /// Parse a dd/mm/yyyy form date. A well-formed string naming a day the
    /// month does not have (31/04, 29/02 outside leap years) is reported as
    /// `DateNotOnCalendar`, not as a format error.
    pub fn parse(raw: &str, label: &'static str) -> Result<NaiveDate, FieldError> {
        if raw.is_empty() {
            return Err(FieldError::DateRequired { label });
        }
        let caps = FORM_DATE
            .captures(raw)
            .ok_or(FieldError::DateFormat { label })?;

        // The pattern guarantees these are short digit runs.
        let day = caps[1].parse::<u32>().map_err(|_| FieldError::DateFormat { label })?;
        let month = caps[2].parse::<u32>().map_err(|_| FieldError::DateFormat { label })?;
        let year = caps[3].parse::<i32>().map_err(|_| FieldError::DateFormat { label })?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| FieldError::DateNotOnCalendar {
            label,
            value: raw.to_string(),
        })
    }

    pub fn validate_birth_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, FieldError> {
        let date = Self::parse(raw, BIRTH_DATE_LABEL)?;
        if date > today {
            return Err(FieldError::BirthDateInFuture);
        }
        Ok(date)
    }

    /// Departure date is optional; only its shape and calendar validity are checked.
    pub fn validate_departure_date(raw: &str) -> Result<Option<NaiveDate>, FieldError> {
        if raw.is_empty() {
            return Ok(None);
        }
        Self::parse(raw, DEPARTURE_DATE_LABEL).map(Some)
    }
}

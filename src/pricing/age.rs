use chrono::{Datelike, NaiveDate};

use crate::models::{AgeBracket, Classification};

/// Passengers whose counted age is above this pay the adult fare.
pub const ADULT_AGE_THRESHOLD: u32 = 7;

/// Counted age on `today`: completed years plus one, never below one.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    (years + 1).max(1) as u32
}

pub fn classify(age: u32) -> Classification {
    if age > ADULT_AGE_THRESHOLD {
        Classification::Adult
    } else {
        Classification::Child
    }
}

pub fn bracket_on(date_of_birth: NaiveDate, today: NaiveDate) -> AgeBracket {
    let age = age_on(date_of_birth, today);
    AgeBracket {
        age,
        classification: classify(age),
    }
}

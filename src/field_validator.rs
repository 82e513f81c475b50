use chrono::NaiveDate;
use log::debug;

use crate::config::BookingConfig;
use crate::models::*;
use crate::utils::BookingError;
use crate::validation::*;

/// Either a fully validated booking or every field that failed.
pub type ValidationResult = Result<ValidatedBooking, ValidationErrors>;

pub struct FieldValidator {
    rules: FieldRules,
    today: NaiveDate,
}

impl FieldValidator {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_rules(FieldRules::new(), today)
    }

    pub fn with_rules(rules: FieldRules, today: NaiveDate) -> Self {
        FieldValidator { rules, today }
    }

    pub fn from_config(config: &BookingConfig) -> Result<Self, BookingError> {
        Ok(Self::with_rules(FieldRules::from_config(config), config.today()?))
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // Every field is checked even after an earlier one fails, so the form
    // can show all messages at once.
    pub fn validate(&self, input: &BookingInput) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        let name = Self::collect(
            &mut errors,
            Field::Name,
            NameValidator::validate(&input.name, &self.rules),
        );
        let address = Self::collect(
            &mut errors,
            Field::Address,
            AddressValidator::validate(&input.address, &self.rules),
        );
        let id_card = Self::collect(
            &mut errors,
            Field::IdCard,
            IdCardValidator::validate(&input.id_card, &self.rules),
        );
        let date_of_birth = Self::collect(
            &mut errors,
            Field::DateOfBirth,
            DateValidator::validate_birth_date(&input.date_of_birth, self.today),
        );
        let travel_class = Self::collect(
            &mut errors,
            Field::TravelClass,
            TravelClassValidator::validate(&input.travel_class),
        );
        let departure_date = Self::collect(
            &mut errors,
            Field::DepartureDate,
            DateValidator::validate_departure_date(&input.departure_date),
        );

        match (name, address, id_card, date_of_birth, travel_class, departure_date) {
            (
                Some(name),
                Some(address),
                Some(id_card),
                Some(date_of_birth),
                Some(travel_class),
                Some(departure_date),
            ) => Ok(ValidatedBooking {
                name,
                address,
                id_card,
                date_of_birth,
                travel_class,
                departure_date,
            }),
            _ => Err(errors),
        }
    }

    fn collect<T>(
        errors: &mut ValidationErrors,
        field: Field,
        result: Result<T, FieldError>,
    ) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                debug!("Rejected {}: {}", field, error);
                errors.add(field, error);
                None
            }
        }
    }
}

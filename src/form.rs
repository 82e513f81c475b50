use std::fmt;

use log::{info, warn};

use crate::config::BookingConfig;
use crate::field_validator::FieldValidator;
use crate::models::*;
use crate::pricing::PricingEngine;
use crate::utils::BookingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    PriceComputed,
    Booked,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Editing => "editing",
            Phase::PriceComputed => "priced",
            Phase::Booked => "booked",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One booking session: the raw fields, the last validation errors, the
/// computed quote and where the session is in the submit/confirm cycle.
pub struct BookingForm {
    validator: FieldValidator,
    engine: PricingEngine,
    fields: BookingInput,
    errors: ValidationErrors,
    quote: Option<(ValidatedBooking, PricingResult)>,
    phase: Phase,
}

impl BookingForm {
    pub fn new(validator: FieldValidator, engine: PricingEngine) -> Self {
        BookingForm {
            validator,
            engine,
            fields: BookingInput::default(),
            errors: ValidationErrors::new(),
            quote: None,
            phase: Phase::Editing,
        }
    }

    pub fn from_config(config: &BookingConfig) -> Result<Self, BookingError> {
        Ok(Self::new(
            FieldValidator::from_config(config)?,
            PricingEngine::from_config(config)?,
        ))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn fields(&self) -> &BookingInput {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn pricing(&self) -> Option<&PricingResult> {
        self.quote.as_ref().map(|(_, pricing)| pricing)
    }

    pub fn can_confirm(&self) -> bool {
        self.phase == Phase::PriceComputed
    }

    /// Change one field. Any computed price is dropped and must be
    /// recomputed by submitting again.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) -> Result<(), BookingError> {
        self.guard_not_booked("edit")?;
        let value = value.into();
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Address => &mut self.fields.address,
            Field::IdCard => &mut self.fields.id_card,
            Field::DateOfBirth => &mut self.fields.date_of_birth,
            Field::TravelClass => &mut self.fields.travel_class,
            Field::DepartureDate => &mut self.fields.departure_date,
        };
        *slot = value;
        self.quote = None;
        self.phase = Phase::Editing;
        Ok(())
    }

    /// Replace every field at once, as when a whole form is posted.
    pub fn fill(&mut self, input: BookingInput) -> Result<(), BookingError> {
        self.guard_not_booked("edit")?;
        self.fields = input;
        self.quote = None;
        self.phase = Phase::Editing;
        Ok(())
    }

    pub fn submit(&mut self) -> Result<&PricingResult, BookingError> {
        self.guard_not_booked("submit")?;
        match self.validator.validate(&self.fields) {
            Ok(booking) => {
                let pricing = self.engine.quote(&booking);
                self.errors = ValidationErrors::new();
                self.phase = Phase::PriceComputed;
                let (_, pricing) = self.quote.insert((booking, pricing));
                Ok(pricing)
            }
            Err(errors) => {
                self.errors = errors.clone();
                self.quote = None;
                self.phase = Phase::Editing;
                Err(BookingError::Validation(errors))
            }
        }
    }

    pub fn confirm(&mut self) -> Result<BookingConfirmation, BookingError> {
        if self.phase != Phase::PriceComputed {
            return Err(self.reject("confirm"));
        }
        let (booking, pricing) = match &self.quote {
            Some(quote) => quote.clone(),
            None => return Err(self.reject("confirm")),
        };
        self.phase = Phase::Booked;
        info!(
            "Booking confirmed for {} ({} {}, {})",
            booking.name, pricing.travel_class, pricing.classification, pricing.price
        );
        Ok(BookingConfirmation { booking, pricing })
    }

    /// Clear everything and start a fresh booking.
    pub fn reset(&mut self) {
        self.fields = BookingInput::default();
        self.errors = ValidationErrors::new();
        self.quote = None;
        self.phase = Phase::Editing;
    }

    fn guard_not_booked(&self, action: &'static str) -> Result<(), BookingError> {
        if self.phase == Phase::Booked {
            return Err(self.reject(action));
        }
        Ok(())
    }

    fn reject(&self, action: &'static str) -> BookingError {
        warn!("Rejected {} while {}", action, self.phase);
        BookingError::InvalidTransition {
            action,
            phase: self.phase.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn form() -> BookingForm {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        BookingForm::new(FieldValidator::new(today), PricingEngine::new(today))
    }

    fn fill_anna(form: &mut BookingForm) {
        form.edit(Field::Name, "Anna").unwrap();
        form.edit(Field::IdCard, "123456789").unwrap();
        form.edit(Field::DateOfBirth, "15/06/1990").unwrap();
        form.edit(Field::TravelClass, "business").unwrap();
    }

    #[test]
    fn test_full_cycle() {
        let mut form = form();
        assert_eq!(form.phase(), Phase::Editing);
        assert!(!form.can_confirm());

        fill_anna(&mut form);
        let price = form.submit().unwrap().price;
        assert_eq!(price, 4_500_000);
        assert_eq!(form.phase(), Phase::PriceComputed);
        assert!(form.can_confirm());

        let confirmation = form.confirm().unwrap();
        assert_eq!(confirmation.booking.name, "Anna");
        assert_eq!(confirmation.pricing.price, 4_500_000);
        assert_eq!(form.phase(), Phase::Booked);

        form.reset();
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.fields(), &BookingInput::default());
        assert!(form.pricing().is_none());
    }

    #[test]
    fn test_confirm_disabled_while_editing() {
        let mut form = form();
        fill_anna(&mut form);
        let err = form.confirm().unwrap_err();
        assert!(matches!(
            err,
            BookingError::InvalidTransition {
                action: "confirm",
                phase: "editing"
            }
        ));
    }

    #[test]
    fn test_edit_invalidates_price() {
        let mut form = form();
        fill_anna(&mut form);
        form.submit().unwrap();

        form.edit(Field::TravelClass, "economy").unwrap();
        assert_eq!(form.phase(), Phase::Editing);
        assert!(form.pricing().is_none());
        assert!(form.confirm().is_err());

        assert_eq!(form.submit().unwrap().price, 3_000_000);
    }

    #[test]
    fn test_failed_submit_keeps_errors() {
        let mut form = form();
        form.edit(Field::Name, "Anna").unwrap();
        form.edit(Field::DateOfBirth, "31/02/2000").unwrap();

        match form.submit() {
            Err(BookingError::Validation(errors)) => {
                assert_eq!(
                    errors.fields(),
                    vec![Field::IdCard, Field::DateOfBirth, Field::TravelClass]
                );
            }
            other => panic!("expected validation failure, got {:?}", other.map(|p| *p)),
        }
        assert_eq!(form.phase(), Phase::Editing);
        assert_eq!(form.errors().len(), 3);

        form.edit(Field::IdCard, "123456789").unwrap();
        form.edit(Field::DateOfBirth, "28/02/2000").unwrap();
        form.edit(Field::TravelClass, "economy").unwrap();
        form.submit().unwrap();
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_booked_form_is_locked_until_reset() {
        let mut form = form();
        fill_anna(&mut form);
        form.submit().unwrap();
        form.confirm().unwrap();

        assert!(form.edit(Field::Name, "Bao").is_err());
        assert!(form.submit().is_err());
        assert!(form.confirm().is_err());
        assert_eq!(form.fields().name, "Anna");

        form.reset();
        assert!(form.edit(Field::Name, "Bao").is_ok());
    }

    #[test]
    fn test_resubmit_is_idempotent() {
        let mut form = form();
        fill_anna(&mut form);
        let first = *form.submit().unwrap();
        let second = *form.submit().unwrap();
        assert_eq!(first, second);
    }
}

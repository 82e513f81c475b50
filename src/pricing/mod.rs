pub mod age;
pub mod fare;

pub use fare::FareTable;

use chrono::NaiveDate;
use log::info;

use crate::config::BookingConfig;
use crate::models::{AgeBracket, Classification, PricingResult, TravelClass, ValidatedBooking};
use crate::utils::BookingError;

/// Turns a validated booking into an age bracket and a fare, as of a fixed day.
pub struct PricingEngine {
    today: NaiveDate,
    fares: FareTable,
}

impl PricingEngine {
    pub fn new(today: NaiveDate) -> Self {
        Self::with_fares(FareTable::standard(), today)
    }

    pub fn with_fares(fares: FareTable, today: NaiveDate) -> Self {
        PricingEngine { today, fares }
    }

    pub fn from_config(config: &BookingConfig) -> Result<Self, BookingError> {
        Ok(Self::new(config.today()?))
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn compute_age(&self, date_of_birth: NaiveDate) -> AgeBracket {
        age::bracket_on(date_of_birth, self.today)
    }

    pub fn compute_price(&self, travel_class: TravelClass, classification: Classification) -> u64 {
        self.fares.price(travel_class, classification)
    }

    pub fn quote(&self, booking: &ValidatedBooking) -> PricingResult {
        let bracket = self.compute_age(booking.date_of_birth);
        let price = self.compute_price(booking.travel_class, bracket.classification);
        info!(
            "Priced {} {} passenger aged {} at {}",
            booking.travel_class, bracket.classification, bracket.age, price
        );
        PricingResult {
            age: bracket.age,
            classification: bracket.classification,
            travel_class: booking.travel_class,
            price,
        }
    }
}

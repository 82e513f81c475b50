use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw form entry, exactly as typed by the passenger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingInput {
    pub name: String,
    pub address: String,
    pub id_card: String,
    pub date_of_birth: String,
    pub travel_class: String,
    pub departure_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelClass {
    Economy,
    Business,
}

impl TravelClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelClass::Economy => "economy",
            TravelClass::Business => "business",
        }
    }
}

impl fmt::Display for TravelClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelClass {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(TravelClass::Economy),
            "business" => Ok(TravelClass::Business),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Adult,
    Child,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Adult => "adult",
            Classification::Child => "child",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Classification {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult" => Ok(Classification::Adult),
            "child" => Ok(Classification::Child),
            _ => Err(()),
        }
    }
}

/// A booking whose every field passed validation. Only `FieldValidator`
/// builds these, so pricing never sees unchecked input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub name: String,
    pub address: Option<String>,
    pub id_card: String,
    pub date_of_birth: NaiveDate,
    pub travel_class: TravelClass,
    pub departure_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeBracket {
    pub age: u32,
    pub classification: Classification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub age: u32,
    pub classification: Classification,
    pub travel_class: TravelClass,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    pub booking: ValidatedBooking,
    pub pricing: PricingResult,
}

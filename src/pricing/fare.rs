use std::collections::HashMap;

use log::warn;

use crate::models::{Classification, TravelClass};

pub struct FareTable {
    fares: HashMap<(TravelClass, Classification), u64>,
}

impl FareTable {
    /// The flat fares charged per passenger, in currency units.
    pub fn standard() -> Self {
        Self::from_entries([
            ((TravelClass::Economy, Classification::Adult), 3_000_000),
            ((TravelClass::Economy, Classification::Child), 700_000),
            ((TravelClass::Business, Classification::Adult), 4_500_000),
            ((TravelClass::Business, Classification::Child), 1_500_000),
        ])
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ((TravelClass, Classification), u64)>,
    {
        FareTable {
            fares: entries.into_iter().collect(),
        }
    }

    /// Pairs missing from the table price at zero.
    pub fn price(&self, travel_class: TravelClass, classification: Classification) -> u64 {
        match self.fares.get(&(travel_class, classification)) {
            Some(price) => *price,
            None => {
                warn!("No fare for {} {}, pricing at 0", travel_class, classification);
                0
            }
        }
    }

    pub fn price_for(&self, travel_class: &str, classification: &str) -> u64 {
        match (travel_class.parse(), classification.parse()) {
            (Ok(travel_class), Ok(classification)) => self.price(travel_class, classification),
            _ => {
                warn!("No fare for '{}' '{}', pricing at 0", travel_class, classification);
                0
            }
        }
    }
}

impl Default for FareTable {
    fn default() -> Self {
        Self::standard()
    }
}

pub mod address;
pub mod date;
pub mod id_card;
pub mod name;
pub mod travel_class;

pub use address::AddressValidator;
pub use date::DateValidator;
pub use id_card::IdCardValidator;
pub use name::NameValidator;
pub use travel_class::TravelClassValidator;

pub mod config;
pub mod field_validator;
pub mod form;
pub mod models;
pub mod pricing;
pub mod utils;
pub mod validation;

pub use config::BookingConfig;
pub use field_validator::{FieldValidator, ValidationResult};
pub use form::{BookingForm, Phase};
pub use pricing::PricingEngine;

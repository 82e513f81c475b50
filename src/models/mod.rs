pub mod data;
pub mod issues;
pub mod rules;

pub use data::*;
pub use issues::*;
pub use rules::FieldRules;

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Form fields, ordered as they appear on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Address,
    IdCard,
    DateOfBirth,
    TravelClass,
    DepartureDate,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::IdCard => "idCard",
            Field::DateOfBirth => "dateOfBirth",
            Field::TravelClass => "travelClass",
            Field::DepartureDate => "departureDate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level problem. The `Display` text is what the form shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Full name is required.")]
    NameRequired,
    #[error("Name must not exceed {max} characters.")]
    NameTooLong { max: usize },
    #[error("Name must not contain digits or special characters.")]
    NameInvalidCharacters,
    #[error("Address must not exceed {max} characters.")]
    AddressTooLong { max: usize },
    #[error("Address may only contain {allowed}.")]
    AddressInvalidCharacters { allowed: &'static str },
    #[error("ID number is required.")]
    IdCardRequired,
    #[error("ID must be exactly {expected} characters long.")]
    IdCardLength { expected: usize },
    #[error("ID may only contain digits, without spaces or special characters.")]
    IdCardNotNumeric,
    #[error("The {label} is required.")]
    DateRequired { label: &'static str },
    #[error("Invalid {label}, the format must be dd/mm/yyyy.")]
    DateFormat { label: &'static str },
    #[error("The {label} {value} does not exist on the calendar.")]
    DateNotOnCalendar { label: &'static str, value: String },
    #[error("The date of birth cannot be in the future.")]
    BirthDateInFuture,
    #[error("Please choose a travel class.")]
    TravelClassRequired,
    #[error("Unknown travel class '{0}', expected economy or business.")]
    TravelClassUnknown(String),
}

/// Every failing field with its message. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Field, FieldError> {
        self.errors.iter()
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, error)?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a Field, &'a FieldError);
    type IntoIter = btree_map::Iter<'a, Field, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_listed_in_form_order() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::TravelClass, FieldError::TravelClassRequired);
        errors.add(Field::Name, FieldError::NameRequired);
        assert_eq!(errors.fields(), vec![Field::Name, Field::TravelClass]);
        assert_eq!(
            errors.to_string(),
            "name: Full name is required.; travelClass: Please choose a travel class."
        );
    }

    #[test]
    fn test_calendar_message_names_the_date() {
        let error = FieldError::DateNotOnCalendar {
            label: "date of birth",
            value: "31/02/2000".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "The date of birth 31/02/2000 does not exist on the calendar."
        );
    }
}

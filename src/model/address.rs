use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FieldError;
use crate::validation;

/// A US postal address. Setters validate and leave the field untouched on failure.
///
/// Deserializing goes through the same setters, so a loaded address obeys
/// the same rules as one typed in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "AddressRecord")]
pub struct Address {
    street1: String,
    street2: String,
    city: String,
    state: String,
    zip: u32,
    zip_plus4: u32,
}

#[derive(Deserialize)]
struct AddressRecord {
    street1: String,
    #[serde(default)]
    street2: String,
    city: String,
    state: String,
    zip: u32,
    #[serde(default)]
    zip_plus4: u32,
}

impl TryFrom<AddressRecord> for Address {
    type Error = FieldError;

    fn try_from(record: AddressRecord) -> Result<Self, Self::Error> {
        let mut address = Address::default();
        address.set_street1(&record.street1)?;
        address.set_street2(&record.street2);
        address.set_city(&record.city)?;
        address.set_state(&record.state)?;
        address.set_zip(record.zip)?;
        if record.zip_plus4 == 0 {
            address.clear_zip_plus4();
        } else {
            address.set_zip_plus4(record.zip_plus4)?;
        }
        Ok(address)
    }
}

pub(crate) fn digit_count(value: u64) -> usize {
    value.to_string().len()
}

impl Address {
    /// Builds an address without validating it; call `validate` before trusting it.
    pub fn new(
        street1: &str,
        street2: &str,
        city: &str,
        state: &str,
        zip: u32,
        zip_plus4: u32,
    ) -> Self {
        Self {
            street1: street1.to_string(),
            street2: street2.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip,
            zip_plus4,
        }
    }

    pub fn street1(&self) -> &str {
        &self.street1
    }

    pub fn street2(&self) -> &str {
        &self.street2
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> u32 {
        self.zip
    }

    /// Zero when unknown.
    pub fn zip_plus4(&self) -> u32 {
        self.zip_plus4
    }

    pub fn set_street1(&mut self, street1: &str) -> Result<(), FieldError> {
        let street1 = street1.trim();
        if street1.chars().count() > 3 {
            self.street1 = street1.to_string();
            Ok(())
        } else {
            Err(FieldError::StreetTooShort)
        }
    }

    /// A lone `-` clears the field.
    pub fn set_street2(&mut self, street2: &str) {
        let street2 = street2.trim();
        self.street2 = if street2 == "-" {
            String::new()
        } else {
            street2.to_string()
        };
    }

    pub fn set_city(&mut self, city: &str) -> Result<(), FieldError> {
        let city = city.trim();
        if city.chars().count() > 1 {
            self.city = city.to_string();
            Ok(())
        } else {
            Err(FieldError::CityTooShort)
        }
    }

    /// Stores the abbreviation upper-cased with whitespace removed.
    pub fn set_state(&mut self, state: &str) -> Result<(), FieldError> {
        self.state = validation::parse_state(state)?;
        Ok(())
    }

    pub fn set_zip(&mut self, zip: u32) -> Result<(), FieldError> {
        if digit_count(u64::from(zip)) == 5 {
            self.zip = zip;
            Ok(())
        } else {
            Err(FieldError::InvalidZip(zip))
        }
    }

    pub fn set_zip_plus4(&mut self, zip_plus4: u32) -> Result<(), FieldError> {
        if digit_count(u64::from(zip_plus4)) == 4 {
            self.zip_plus4 = zip_plus4;
            Ok(())
        } else {
            Err(FieldError::InvalidZipPlus4(zip_plus4))
        }
    }

    pub fn clear_zip_plus4(&mut self) {
        self.zip_plus4 = 0;
    }

    /// First failing rule, if any. `is_new` has no address-level effect.
    pub fn validate(&self, _is_new: bool) -> Result<(), FieldError> {
        if self.street1.trim().is_empty() {
            return Err(FieldError::blank("street"));
        }
        if self.city.trim().is_empty() {
            return Err(FieldError::blank("city"));
        }
        if self.state.trim().is_empty() {
            return Err(FieldError::blank("state"));
        }
        if !validation::is_us_state_abbreviation(&self.state) {
            return Err(FieldError::NotAState {
                value: self.state.clone(),
            });
        }
        if self.zip == 0 || digit_count(u64::from(self.zip)) != 5 {
            return Err(FieldError::InvalidZip(self.zip));
        }
        Ok(())
    }

    pub fn is_valid(&self, is_new: bool) -> bool {
        self.validate(is_new).is_ok()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ", self.street1)?;
        if !self.street2.is_empty() {
            write!(f, "{} ", self.street2)?;
        }
        write!(f, "{}, {}  {}", self.city, self.state, self.zip)?;
        if self.zip_plus4 != 0 {
            write!(f, "-{:04}", self.zip_plus4)?;
        }
        Ok(())
    }
}

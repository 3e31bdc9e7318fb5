use serde::{Deserialize, Serialize};
use std::fmt;

use super::address::{digit_count, Address};
use super::ids::PersonId;
use crate::error::FieldError;
use crate::validation::{self, Rules};

/// Number of comma separated fields in a formatted record.
pub const RECORD_FIELDS: usize = 6;

/// One contact in the phonebook.
///
/// First, middle, and last names are always derived from `name`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord")]
pub struct Person {
    id: PersonId,
    name: String,
    #[serde(skip_serializing)]
    first_name: String,
    #[serde(skip_serializing)]
    middle_name: String,
    #[serde(skip_serializing)]
    last_name: String,
    address: Address,
    phone: u64,
}

/// Wire shape of a person; the name parts are rebuilt on load and the
/// phone goes through `set_phone`.
#[derive(Deserialize)]
struct PersonRecord {
    #[serde(default)]
    id: PersonId,
    name: String,
    address: Address,
    phone: u64,
}

impl TryFrom<PersonRecord> for Person {
    type Error = FieldError;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        let name = validation::check_non_blank(&record.name, "name", &Rules::any())?;
        let mut person = Person::shell(record.id);
        person.set_name(name);
        person.address = record.address;
        person.set_phone(record.phone)?;
        Ok(person)
    }
}

impl Person {
    /// An empty person waiting to be filled in.
    pub fn shell(id: PersonId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Builds an unassigned person without validating it.
    pub fn new(name: &str, address: Address, phone: u64) -> Self {
        let mut person = Self {
            address,
            phone,
            ..Self::default()
        };
        person.set_name(name);
        person
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn set_id(&mut self, id: PersonId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Interior name tokens, each followed by a space.
    pub fn middle_name(&self) -> &str {
        &self.middle_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn address_mut(&mut self) -> &mut Address {
        &mut self.address
    }

    pub fn phone(&self) -> u64 {
        self.phone
    }

    /// Stores the full name and splits it: the first token is the first
    /// name, the last token (when there are two or more) is the last name,
    /// and everything in between is the middle name.
    pub fn set_name(&mut self, full_name: &str) {
        self.name = full_name.to_string();
        let tokens: Vec<&str> = full_name.split_whitespace().collect();

        self.first_name = tokens.first().map(|t| t.to_string()).unwrap_or_default();
        self.last_name = if tokens.len() > 1 {
            tokens[tokens.len() - 1].to_string()
        } else {
            String::new()
        };
        self.middle_name = if tokens.len() > 2 {
            tokens[1..tokens.len() - 1]
                .iter()
                .map(|t| format!("{} ", t))
                .collect()
        } else {
            String::new()
        };
    }

    /// Accepts a 10 digit number or any non-zero number with fewer digits.
    pub fn set_phone(&mut self, phone: u64) -> Result<(), FieldError> {
        let digits = digit_count(phone);
        if digits == 10 || (digits < 10 && phone != 0) {
            self.phone = phone;
            Ok(())
        } else {
            Err(FieldError::InvalidPhone(phone))
        }
    }

    /// Fills this person from
    /// `Full Name, Street, City, State, Zip(5 digits), Phone(10 digits)`.
    ///
    /// Nothing is changed unless every field passes. Street2 and zip+4 keep
    /// their current values.
    pub fn parse_formatted_record(&mut self, line: &str) -> Result<(), FieldError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != RECORD_FIELDS {
            return Err(FieldError::WrongFieldCount(fields.len()));
        }

        let name = validation::check_non_blank(fields[0], "name", &Rules::any())?;
        let zip_text = validation::check_non_blank(fields[4], "zip code", &Rules::length(5))?;
        let zip = validation::parse_integer(zip_text, "zip code", &Rules::zip_code())?;
        let phone_text = validation::check_non_blank(fields[5], "phone number", &Rules::length(10))?;
        let phone = validation::parse_long(phone_text, "phone number", &Rules::phone_number())?;
        let state = validation::parse_state(fields[3])?;

        let mut candidate = self.clone();
        candidate.set_name(name);
        candidate.address.set_street1(fields[1])?;
        candidate.address.set_city(fields[2])?;
        candidate.address.set_state(&state)?;
        candidate
            .address
            .set_zip(u32::try_from(zip).map_err(|_| FieldError::InvalidZip(0))?)?;
        candidate
            .set_phone(u64::try_from(phone).map_err(|_| FieldError::InvalidPhone(0))?)?;

        *self = candidate;
        Ok(())
    }

    /// First failing rule, if any. Existing people must carry an ID.
    pub fn validate(&self, is_new: bool) -> Result<(), FieldError> {
        if !is_new && !self.id.is_assigned() {
            return Err(FieldError::UnassignedId);
        }
        if self.name.trim().is_empty() {
            return Err(FieldError::blank("name"));
        }
        self.address.validate(is_new)?;
        if self.phone == 0 || digit_count(self.phone) > 10 {
            return Err(FieldError::InvalidPhone(self.phone));
        }
        Ok(())
    }

    pub fn is_valid(&self, is_new: bool) -> bool {
        self.validate(is_new).is_ok()
    }

    /// Composite sort key: last, first, then middle name.
    pub fn sort_key(&self) -> String {
        format!("{}{}{}", self.last_name, self.first_name, self.middle_name)
    }

    /// `(xxx) xxx-xxxx`, zero-padded to ten digits.
    pub fn phone_display(&self) -> String {
        let digits = format!("{:010}", self.phone);
        if digits.len() == 10 {
            format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10])
        } else {
            digits
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.last_name, self.first_name)?;
        let middle = self.middle_name.trim_end();
        if !middle.is_empty() {
            write!(f, " {}", middle)?;
        }
        write!(f, "  {}  Phone {}", self.address, self.phone_display())
    }
}

use std::fmt;

use tracing::debug;

use crate::model::Person;
use crate::phonebook::Phonebook;

/// Text fields a search can match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchCriterion {
    FirstName,
    LastName,
    FullName,
    Street,
    City,
    State,
}

impl SearchCriterion {
    pub const ALL: [SearchCriterion; 6] = [
        SearchCriterion::FirstName,
        SearchCriterion::LastName,
        SearchCriterion::FullName,
        SearchCriterion::Street,
        SearchCriterion::City,
        SearchCriterion::State,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchCriterion::FirstName => "first name",
            SearchCriterion::LastName => "last name",
            SearchCriterion::FullName => "full name",
            SearchCriterion::Street => "street address",
            SearchCriterion::City => "city",
            SearchCriterion::State => "state",
        }
    }

    fn field(self, person: &Person) -> &str {
        match self {
            SearchCriterion::FirstName => person.first_name(),
            SearchCriterion::LastName => person.last_name(),
            SearchCriterion::FullName => person.name(),
            SearchCriterion::Street => person.address().street1(),
            SearchCriterion::City => person.address().city(),
            SearchCriterion::State => person.address().state(),
        }
    }
}

impl fmt::Display for SearchCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Phonebook {
    /// Everyone whose `criterion` field contains `query`, ignoring case.
    /// Results come back in name order.
    pub fn find(&self, criterion: SearchCriterion, query: &str) -> Vec<Person> {
        let needle = query.trim().to_lowercase();
        let found: Vec<Person> = self
            .people()
            .iter()
            .filter(|p| criterion.field(p).to_lowercase().contains(&needle))
            .cloned()
            .collect();
        debug!("Search by {} for '{}' found {}", criterion, needle, found.len());
        found
    }

    pub fn find_by_zip(&self, zip: u32) -> Vec<Person> {
        self.people()
            .iter()
            .filter(|p| p.address().zip() == zip)
            .cloned()
            .collect()
    }

    pub fn find_by_phone(&self, phone: u64) -> Vec<Person> {
        self.people()
            .iter()
            .filter(|p| p.phone() == phone)
            .cloned()
            .collect()
    }
}

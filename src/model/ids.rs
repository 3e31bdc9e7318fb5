use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier the phonebook hands out to a stored person.
/// Zero marks a shell that has not been assigned one yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u64);

impl PersonId {
    pub const UNASSIGNED: PersonId = PersonId(0);

    /// Never handed out by the phonebook; it has no successor.
    pub const MAX: PersonId = PersonId(u64::MAX);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }

    /// The identifier after this one, or `None` past `u64::MAX`.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

use std::fmt;

use tracing::{debug, warn};

use crate::error::{PhonebookError, PhonebookResult};
use crate::model::{Person, PersonId};

/// In-memory store of people, kept in name order after every change.
#[derive(Debug, Clone)]
pub struct Phonebook {
    name: String,
    people: Vec<Person>,
    next_person_id: PersonId,
}

/// Bubble sort on a precomputed key, stopping after the first pass with no
/// swaps. Returns the number of swaps performed.
fn bubble_sort_by_key<T, K, F>(items: &mut [T], key: F) -> usize
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut keys: Vec<K> = items.iter().map(&key).collect();
    let mut swaps = 0;
    for _ in 0..items.len() {
        let mut any_swaps = false;
        for i in 1..items.len() {
            if keys[i - 1] > keys[i] {
                items.swap(i - 1, i);
                keys.swap(i - 1, i);
                any_swaps = true;
                swaps += 1;
            }
        }
        if !any_swaps {
            break;
        }
    }
    swaps
}

fn name_key(person: &Person) -> String {
    person.sort_key().to_lowercase()
}

impl Phonebook {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            people: Vec::new(),
            next_person_id: PersonId::new(1),
        }
    }

    /// Seeds the store with people that already carry IDs. The next ID
    /// continues after the highest one present.
    ///
    /// People without an ID, or with an ID already seen, are dropped.
    pub fn with_people(name: &str, mut people: Vec<Person>) -> Self {
        bubble_sort_by_key(&mut people, |p| p.id());
        let mut previous = PersonId::UNASSIGNED;
        people.retain(|p| {
            let keep = p.id() != previous && p.id().is_assigned();
            if !keep {
                warn!("Dropping person '{}': ID {} unassigned or already used", p.name(), p.id());
            }
            previous = p.id();
            keep
        });
        // MAX has no successor, so adds are refused from then on
        let next_person_id = people
            .last()
            .map_or(PersonId::new(1), |p| p.id().next().unwrap_or(PersonId::MAX));
        let mut book = Self {
            name: name.to_string(),
            people,
            next_person_id,
        };
        book.sort_by_name();
        book
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// People in name order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn count(&self) -> usize {
        self.people.len()
    }

    /// The ID the next successful add will receive.
    pub fn next_person_id(&self) -> PersonId {
        self.next_person_id
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id() == id)
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.index_of(person.id()).is_some()
    }

    pub(crate) fn index_of(&self, id: PersonId) -> Option<usize> {
        self.people.iter().position(|p| p.id() == id)
    }

    /// Validates a new person, gives it the next ID, and stores it.
    pub fn add_person(&mut self, mut person: Person) -> PhonebookResult<PersonId> {
        if let Err(e) = person.validate(true) {
            warn!("Rejected new person '{}': {}", person.name(), e);
            return Err(e.into());
        }
        let id = self.next_person_id;
        let following = id.next().ok_or_else(|| {
            warn!("Rejected new person '{}': no person IDs left", person.name());
            PhonebookError::IdsExhausted
        })?;
        person.set_id(id);
        self.next_person_id = following;
        debug!("Adding person {} ({})", id, person.name());
        self.people.push(person);
        self.sort_by_name();
        Ok(id)
    }

    /// Swaps in `replacement` where the person with `id` currently sits.
    pub(crate) fn replace(&mut self, id: PersonId, mut replacement: Person) -> PhonebookResult<PersonId> {
        let index = self.index_of(id).ok_or_else(|| {
            warn!("Cannot update person {}: not in phonebook", id);
            PhonebookError::NotFound { id: id.to_string() }
        })?;
        replacement.set_id(id);
        debug!("Updating person {} ({})", id, replacement.name());
        self.people[index] = replacement;
        self.sort_by_name();
        Ok(id)
    }

    /// Removes the person at `index`, keeping everyone else in order.
    pub(crate) fn remove_at(&mut self, index: usize) -> Person {
        let removed = self.people.remove(index);
        debug!("Removed person {} ({})", removed.id(), removed.name());
        self.sort_by_name();
        removed
    }

    /// Case-insensitive ascending order on last, first, and middle name.
    /// Returns the number of swaps it took.
    pub fn sort_by_name(&mut self) -> usize {
        bubble_sort_by_key(&mut self.people, name_key)
    }
}

impl fmt::Display for Phonebook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.people.len() == 1 {
            writeln!(f, "{} has 1 person:", self.name)?;
        } else {
            writeln!(f, "{} has {} total people:", self.name, self.people.len())?;
        }
        for person in &self.people {
            writeln!(f, "{}", person)?;
        }
        Ok(())
    }
}

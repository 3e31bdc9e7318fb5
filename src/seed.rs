use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::PhonebookResult;
use crate::model::{Address, Person, PersonId};
use crate::phonebook::Phonebook;

/// The six example people a fresh phonebook starts with.
pub fn default_people() -> Vec<Person> {
    let person = |name: &str, street: &str, city: &str, state: &str, zip: u32, plus4: u32, phone: u64| {
        Person::new(name, Address::new(street, "", city, state, zip, plus4), phone)
    };
    vec![
        person("Dan Bradford", "120 Civic Plaza", "O'Fallon", "IL", 62269, 0, 6_186_323_783),
        person("Miri Belle", "101 Dalmatian St.", "Yorkville", "IL", 60560, 0, 6_301_234_567),
        person("Noah June", "910 2nd St.", "Maryville", "IL", 62062, 0, 6_187_654_321),
        person("Brandon Owners", "406 W US Highway 50", "O'Fallon", "IL", 62269, 0, 6_181_234_321),
        person("Noah Noodles", "951 S Green Mount Rd", "Belleville", "IL", 62220, 4814, 6_182_330_513),
        person("Micah Mook", "5050 Oakland Ave", "St. Louis", "MO", 63110, 1460, 3_142_894_400),
    ]
}

/// Adds the default people. Returns how many were added.
pub fn load_default_people(book: &mut Phonebook) -> usize {
    let mut added = 0;
    for person in default_people() {
        let name = person.name().to_string();
        match book.add_person(person) {
            Ok(_) => added += 1,
            Err(e) => warn!("Failed to add default person {}: {}", name, e),
        }
    }
    added
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportStats {
    /// Records stored under the ID they carried.
    pub people: usize,
    /// Records without an ID that were given a new one.
    pub assigned: usize,
    /// Invalid records, repeated IDs, and the reserved ID.
    pub skipped: usize,
}

/// Builds a phonebook from a JSON array of people.
///
/// Records that carry an ID keep it and later adds continue after the
/// highest one. Records without an ID are added as new people. Records
/// that break a field rule, repeated IDs, and the reserved ID `u64::MAX`
/// are skipped with a warning.
pub fn import_json(name: &str, json_path: &Path) -> PhonebookResult<(Phonebook, ImportStats)> {
    let json_str = std::fs::read_to_string(json_path)?;
    let values: Vec<Value> = serde_json::from_str(&json_str)?;

    let mut stats = ImportStats::default();
    let mut seen = HashSet::new();
    let mut keyed = Vec::new();
    let mut unkeyed = Vec::new();

    for (index, value) in values.into_iter().enumerate() {
        let record: Person = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                warn!("Skipping record {}: {}", index + 1, e);
                stats.skipped += 1;
                continue;
            }
        };
        if record.id() == PersonId::MAX {
            warn!("Skipping person {} ({}): ID is reserved", record.id(), record.name());
            stats.skipped += 1;
            continue;
        }
        if !record.id().is_assigned() {
            unkeyed.push(record);
            continue;
        }
        if let Err(e) = record.validate(false) {
            warn!("Skipping person {} ({}): {}", record.id(), record.name(), e);
            stats.skipped += 1;
        } else if !seen.insert(record.id()) {
            warn!("Skipping person {} ({}): ID already used", record.id(), record.name());
            stats.skipped += 1;
        } else {
            keyed.push(record);
        }
    }

    stats.people = keyed.len();
    let mut book = Phonebook::with_people(name, keyed);
    for record in unkeyed {
        match book.add_person(record) {
            Ok(_) => stats.assigned += 1,
            Err(_) => stats.skipped += 1,
        }
    }

    info!(
        "Imported {} people from {} ({} new IDs, {} skipped)",
        stats.people + stats.assigned,
        json_path.display(),
        stats.assigned,
        stats.skipped
    );
    Ok((book, stats))
}

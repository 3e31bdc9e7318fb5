use tracing::{debug, info, warn};

use crate::error::{FieldError, PhonebookError, PhonebookResult};
use crate::input::{InputSource, Prompted};
use crate::model::{Person, PersonId};
use crate::phonebook::Phonebook;
use crate::validation::{self, Rules};

/// Layout of a formatted record, shown to the user before they type one.
pub const RECORD_FORMAT: &str = "Full Name, Street Number and Name, City, 2 Letter State Abbreviation, \
5-Digit Zip Code, 10-Digit Phone Number without separators";

/// How a person's details are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// One prompt per field.
    Prompted,
    /// One comma separated line in [`RECORD_FORMAT`].
    Formatted,
}

impl EntryMode {
    /// Maps a "prompt me for each field?" answer to a mode.
    pub fn from_wants_prompts(wants_prompts: bool) -> Self {
        if wants_prompts {
            EntryMode::Prompted
        } else {
            EntryMode::Formatted
        }
    }
}

/// Collects a new person from `source` and stores it.
///
/// Nothing changes if the user cancels or the entry fails validation.
pub fn add(book: &mut Phonebook, source: &mut dyn InputSource, mode: EntryMode) -> PhonebookResult<PersonId> {
    let mut person = Person::shell(PersonId::UNASSIGNED);
    fill(&mut person, None, source, mode).map_err(|e| {
        debug!("Add abandoned: {}", e);
        e
    })?;
    let id = book.add_person(person)?;
    info!("Added person {}", id);
    Ok(id)
}

/// Collects replacement details for `existing` and swaps them in, keeping its ID.
pub fn update(
    book: &mut Phonebook,
    existing: &Person,
    source: &mut dyn InputSource,
    mode: EntryMode,
) -> PhonebookResult<PersonId> {
    if let Err(e) = existing.validate(false) {
        warn!("Cannot update '{}': {}", existing.name(), e);
        return Err(e.into());
    }
    if !book.contains(existing) {
        warn!("Cannot update person {}: not in phonebook", existing.id());
        return Err(PhonebookError::NotFound {
            id: existing.id().to_string(),
        });
    }

    let mut replacement = Person::shell(existing.id());
    fill(&mut replacement, Some(existing), source, mode).map_err(|e| {
        debug!("Update of person {} abandoned: {}", existing.id(), e);
        e
    })?;
    replacement.validate(false)?;

    let id = book.replace(existing.id(), replacement)?;
    info!("Updated person {}", id);
    Ok(id)
}

/// Removes `existing` after the user confirms.
pub fn remove(book: &mut Phonebook, existing: &Person, source: &mut dyn InputSource) -> PhonebookResult<Person> {
    let index = book.index_of(existing.id()).ok_or_else(|| {
        warn!("Cannot delete person {}: not in phonebook", existing.id());
        PhonebookError::NotFound {
            id: existing.id().to_string(),
        }
    })?;

    let prompt = format!(
        "Do you want to delete the following person from the phonebook?\n{}",
        existing
    );
    if !source.read_bool(&prompt).into_result()? {
        debug!("Delete of person {} declined", existing.id());
        return Err(PhonebookError::Declined);
    }

    let removed = book.remove_at(index);
    info!("Deleted person {}", removed.id());
    Ok(removed)
}

fn fill(
    person: &mut Person,
    current: Option<&Person>,
    source: &mut dyn InputSource,
    mode: EntryMode,
) -> PhonebookResult<()> {
    match mode {
        EntryMode::Prompted => prompt_fields(person, current, source),
        EntryMode::Formatted => read_record(person, current.is_some(), source),
    }
}

/// "Please enter the person's city:" or, when updating, the current value first.
fn field_prompt(label: &str, current: Option<String>) -> String {
    match current {
        Some(value) => format!(
            "Current {}: {}\nPlease enter the person's new {}:",
            label, value, label
        ),
        None => format!("Please enter the person's {}:", label),
    }
}

fn without_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn prompt_fields(person: &mut Person, current: Option<&Person>, source: &mut dyn InputSource) -> PhonebookResult<()> {
    let was = |f: fn(&Person) -> String| current.map(f);

    let first = source
        .read_string(
            &field_prompt("first name", was(|p| p.first_name().to_string())),
            "first name",
            &Rules::any(),
        )
        .into_result()?;
    let middle = source
        .read_line(&field_prompt(
            "middle name(s)",
            was(|p| p.middle_name().trim_end().to_string()),
        ))
        .into_result()?;
    let last = source
        .read_string(
            &field_prompt("last name", was(|p| p.last_name().to_string())),
            "last name",
            &Rules::any(),
        )
        .into_result()?;
    let name = [without_whitespace(&first), middle.trim().to_string(), without_whitespace(&last)]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    person.set_name(&name);

    let address = person.address_mut();
    source
        .read_checked(
            &field_prompt("street address", was(|p| p.address().street1().to_string())),
            &mut |line: &str| address.set_street1(line),
        )
        .into_result()?;

    let street2 = source
        .read_line(&format!(
            "{}\nEnter - if there is none.",
            field_prompt("apartment, suite, or unit", was(|p| p.address().street2().to_string()))
        ))
        .into_result()?;
    address.set_street2(&street2);

    source
        .read_checked(
            &field_prompt("city", was(|p| p.address().city().to_string())),
            &mut |line: &str| address.set_city(line),
        )
        .into_result()?;

    source
        .read_checked(
            &field_prompt("2 letter state abbreviation", was(|p| p.address().state().to_string())),
            &mut |line: &str| address.set_state(line),
        )
        .into_result()?;

    source
        .read_checked(
            &field_prompt("5 digit zip code", was(|p| p.address().zip().to_string())),
            &mut |line: &str| {
                let zip = validation::parse_integer(line, "zip code", &Rules::zip_code())?;
                address.set_zip(u32::try_from(zip).map_err(|_| FieldError::InvalidZip(0))?)
            },
        )
        .into_result()?;

    source
        .read_checked(
            &format!(
                "{}\nEnter 0 if unknown.",
                field_prompt("4 digit zip+4", was(|p| p.address().zip_plus4().to_string()))
            ),
            &mut |line: &str| {
                let plus4 = validation::parse_integer(line, "zip+4", &Rules::zip_plus4())?;
                if plus4 == 0 {
                    address.clear_zip_plus4();
                    Ok(())
                } else {
                    address.set_zip_plus4(u32::try_from(plus4).map_err(|_| FieldError::InvalidZipPlus4(0))?)
                }
            },
        )
        .into_result()?;

    source
        .read_checked(
            &field_prompt(
                "phone number (all digits no separators)",
                was(|p| p.phone().to_string()),
            ),
            &mut |line: &str| {
                let phone = validation::parse_long(line, "phone number", &Rules::phone_number())?;
                person.set_phone(u64::try_from(phone).map_err(|_| FieldError::InvalidPhone(0))?)
            },
        )
        .into_result()?;

    Ok(())
}

/// Reads one formatted record. A lone `-` cancels, like the cancel sentinel.
fn read_record(person: &mut Person, updating: bool, source: &mut dyn InputSource) -> PhonebookResult<()> {
    let prompt = format!(
        "Please enter the {} person information using the following format.\n{}:\nEnter - to cancel:",
        if updating { "updated" } else { "new" },
        RECORD_FORMAT
    );
    let mut dashed = false;
    let outcome = source.read_checked(&prompt, &mut |line: &str| {
        if line == "-" {
            dashed = true;
            return Ok(());
        }
        person.parse_formatted_record(line)
    });
    match outcome {
        Prompted::Value(()) if dashed => Err(PhonebookError::Cancelled),
        other => other.into_result(),
    }
}

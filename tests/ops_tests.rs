use phonebook::error::*;
use phonebook::input::*;
use phonebook::model::*;
use phonebook::ops::*;
use phonebook::phonebook::Phonebook;
use phonebook::queries::*;
use phonebook::seed;

fn setup() -> Phonebook {
    let mut book = Phonebook::new("Test Phonebook");
    seed::load_default_people(&mut book);
    book
}

fn first_match(book: &Phonebook, criterion: SearchCriterion, query: &str) -> Person {
    book.find(criterion, query).remove(0)
}

const JANE_PROMPTS: [&str; 10] = [
    "Jane",
    "Q",
    "Doe",
    "123 Main St",
    "-",
    "Springfield",
    " il ",
    "62704",
    "0",
    "2175551234",
];

// ==========================================================================
// ADD
// ==========================================================================

#[test]
fn add_prompted_person() {
    let mut book = setup();
    let mut input = ScriptedInput::scripted(&JANE_PROMPTS);

    let id = person_ops::add(&mut book, &mut input, EntryMode::Prompted).unwrap();
    assert_eq!(id, PersonId::new(7));
    assert_eq!(book.count(), 7);

    let jane = book.get(id).unwrap();
    assert_eq!(jane.name(), "Jane Q Doe");
    assert_eq!(jane.middle_name(), "Q ");
    assert_eq!(jane.address().street2(), "");
    assert_eq!(jane.address().state(), "IL");
    assert_eq!(jane.address().zip_plus4(), 0);
    assert_eq!(jane.phone(), 2_175_551_234);
}

#[test]
fn add_prompted_strips_spaces_from_first_and_last_names() {
    let mut book = Phonebook::new("Test");
    let mut lines = JANE_PROMPTS;
    lines[0] = "Mary Ann";
    lines[1] = "";
    lines[2] = "Van Buren";
    let mut input = ScriptedInput::scripted(&lines);

    let id = person_ops::add(&mut book, &mut input, EntryMode::Prompted).unwrap();
    let person = book.get(id).unwrap();
    assert_eq!(person.name(), "MaryAnn VanBuren");
    assert_eq!(person.first_name(), "MaryAnn");
    assert_eq!(person.last_name(), "VanBuren");
}

#[test]
fn add_prompted_reprompts_bad_fields() {
    let mut book = setup();
    let lines = [
        "Jane", "", "Doe", "12", "123 Main St", "Suite 4", "X", "Springfield", "ZZ", "IL", "627",
        "62704", "12", "1234", "abc", "2175551234",
    ];
    let mut input = ScriptedInput::scripted(&lines);

    let id = person_ops::add(&mut book, &mut input, EntryMode::Prompted).unwrap();
    let jane = book.get(id).unwrap();
    assert_eq!(jane.address().street2(), "Suite 4");
    assert_eq!(jane.address().zip_plus4(), 1234);

    let transcript = input.transcript();
    assert!(transcript.contains("street must be longer than 3 characters"));
    assert!(transcript.contains("city must be longer than 1 character"));
    assert!(transcript.contains("'ZZ' is not a two letter abbreviation"));
    assert!(transcript.contains("zip code must have exactly 5 digits, got 3"));
    assert!(transcript.contains("zip+4 must be a 4 digit number, got 12"));
    assert!(transcript.contains("phone number was not a long integer"));
}

#[test]
fn add_prompted_rejects_signed_numbers() {
    let mut book = setup();
    let lines = [
        "Jane", "Q", "Doe", "123 Main St", "-", "Springfield", "IL", "-62704", "62704", "-1234", "0",
        "-2175551234", "2175551234",
    ];
    let mut input = ScriptedInput::scripted(&lines);

    let id = person_ops::add(&mut book, &mut input, EntryMode::Prompted).unwrap();
    let jane = book.get(id).unwrap();
    assert_eq!(jane.address().zip(), 62704);
    assert_eq!(jane.phone(), 2_175_551_234);

    let transcript = input.transcript();
    assert!(transcript.contains("zip code must be between 10000 and 99999"));
    assert!(transcript.contains("zip+4 must be between 0 and 9999"));
    assert!(transcript.contains("phone number must be between 0 and 9999999999"));
    assert!(!transcript.contains("got 0"));
}

#[test]
fn add_formatted_person() {
    let mut book = setup();
    let mut input =
        ScriptedInput::scripted(&["Jane Q Doe, 123 Main St, Springfield, IL, 62704, 2175551234"]);

    let id = person_ops::add(&mut book, &mut input, EntryMode::Formatted).unwrap();
    let jane = book.get(id).unwrap();
    assert_eq!(jane.address().city(), "Springfield");
    assert_eq!(jane.address().zip(), 62704);
    assert!(input.transcript().contains(RECORD_FORMAT));
}

#[test]
fn add_cancelled_leaves_book_unchanged() {
    let mut book = setup();
    let mut input = ScriptedInput::scripted(&["Jane", "Q", "Doe", "~"]);

    let result = person_ops::add(&mut book, &mut input, EntryMode::Prompted);
    assert!(matches!(result, Err(PhonebookError::Cancelled)));
    assert_eq!(book.count(), 6);
    assert_eq!(book.next_person_id(), PersonId::new(7));
}

#[test]
fn add_formatted_dash_cancels() {
    let mut book = setup();
    let mut input = ScriptedInput::scripted(&["-"]);
    let result = person_ops::add(&mut book, &mut input, EntryMode::Formatted);
    assert!(matches!(result, Err(PhonebookError::Cancelled)));
    assert_eq!(book.count(), 6);
}

#[test]
fn add_formatted_gives_up_after_max_attempts() {
    let mut book = setup();
    let mut input = ScriptedInput::scripted(&[
        "Jane Doe, 123 Main St, Springfield, IL, 627, 2175551234",
        "Jane Doe, 123 Main St, Springfield, IL",
    ])
    .with_max_attempts(Some(2));

    let result = person_ops::add(&mut book, &mut input, EntryMode::Formatted);
    assert!(matches!(
        result,
        Err(PhonebookError::Invalid(FieldError::WrongFieldCount(4)))
    ));
    assert_eq!(book.count(), 6);
    assert_eq!(book.next_person_id(), PersonId::new(7));
}

#[test]
fn ids_are_never_reused_after_delete() {
    let mut book = setup();
    let micah = first_match(&book, SearchCriterion::LastName, "Mook");
    assert_eq!(micah.id(), PersonId::new(6));

    let mut confirm = ScriptedInput::scripted(&["1"]);
    person_ops::remove(&mut book, &micah, &mut confirm).unwrap();

    let mut input = ScriptedInput::scripted(&JANE_PROMPTS);
    let id = person_ops::add(&mut book, &mut input, EntryMode::Prompted).unwrap();
    assert_eq!(id, PersonId::new(7));
    assert!(book.people().iter().all(|p| p.id() <= id));
}

// ==========================================================================
// UPDATE
// ==========================================================================

#[test]
fn update_prompted_keeps_id_and_shows_current_values() {
    let mut book = setup();
    let dan = first_match(&book, SearchCriterion::LastName, "Bradford");
    let lines = [
        "Daniel", "", "Bradford", "121 Civic Plaza", "Suite 100", "O'Fallon", "IL", "62269", "0",
        "6186323784",
    ];
    let mut input = ScriptedInput::scripted(&lines);

    let id = person_ops::update(&mut book, &dan, &mut input, EntryMode::Prompted).unwrap();
    assert_eq!(id, dan.id());
    assert_eq!(book.count(), 6);

    let updated = book.get(id).unwrap();
    assert_eq!(updated.name(), "Daniel Bradford");
    assert_eq!(updated.address().street1(), "121 Civic Plaza");
    assert_eq!(updated.address().street2(), "Suite 100");
    assert_eq!(updated.phone(), 6_186_323_784);

    let transcript = input.transcript();
    assert!(transcript.contains("Current first name: Dan\nPlease enter the person's new first name:"));
    assert!(transcript.contains("Current city: O'Fallon"));
}

#[test]
fn update_formatted_resorts_people() {
    let mut book = setup();
    let micah = first_match(&book, SearchCriterion::FirstName, "Micah");
    let mut input =
        ScriptedInput::scripted(&["Micah Able, 5050 Oakland Ave, St. Louis, MO, 63110, 3142894400"]);

    person_ops::update(&mut book, &micah, &mut input, EntryMode::Formatted).unwrap();
    assert_eq!(book.people()[0].name(), "Micah Able");
    assert_eq!(book.people()[0].id(), micah.id());
    assert!(input.transcript().contains("updated person information"));
}

#[test]
fn update_cancelled_leaves_person_unchanged() {
    let mut book = setup();
    let dan = first_match(&book, SearchCriterion::LastName, "Bradford");
    let mut input = ScriptedInput::scripted(&["Daniel", "~"]);

    let result = person_ops::update(&mut book, &dan, &mut input, EntryMode::Prompted);
    assert!(matches!(result, Err(PhonebookError::Cancelled)));
    assert_eq!(book.get(dan.id()), Some(&dan));
}

#[test]
fn update_requires_a_stored_person() {
    let mut book = setup();
    let stranger = seed::default_people().remove(0);
    let mut input = ScriptedInput::scripted(&[]);
    let result = person_ops::update(&mut book, &stranger, &mut input, EntryMode::Prompted);
    assert!(matches!(
        result,
        Err(PhonebookError::Invalid(FieldError::UnassignedId))
    ));

    let dan = first_match(&book, SearchCriterion::LastName, "Bradford");
    person_ops::remove(&mut book, &dan, &mut ScriptedInput::scripted(&["1"])).unwrap();
    let result = person_ops::update(&mut book, &dan, &mut input, EntryMode::Prompted);
    assert!(matches!(result, Err(PhonebookError::NotFound { .. })));
}

// ==========================================================================
// REMOVE
// ==========================================================================

#[test]
fn remove_after_confirmation() {
    let mut book = setup();
    let dan = first_match(&book, SearchCriterion::FullName, "Dan Bradford");
    let mut input = ScriptedInput::scripted(&["1"]);

    let removed = person_ops::remove(&mut book, &dan, &mut input).unwrap();
    assert_eq!(removed.id(), dan.id());
    assert_eq!(book.count(), 5);
    assert!(book.find(SearchCriterion::LastName, "Bradford").is_empty());
    assert!(input
        .transcript()
        .contains("Do you want to delete the following person from the phonebook?\nBradford, Dan"));
}

#[test]
fn remove_declined_or_cancelled_keeps_person() {
    let mut book = setup();
    let dan = first_match(&book, SearchCriterion::LastName, "Bradford");

    let result = person_ops::remove(&mut book, &dan, &mut ScriptedInput::scripted(&["2"]));
    assert!(matches!(result, Err(PhonebookError::Declined)));

    let result = person_ops::remove(&mut book, &dan, &mut ScriptedInput::scripted(&["~"]));
    assert!(matches!(result, Err(PhonebookError::Cancelled)));
    assert_eq!(book.count(), 6);
}

#[test]
fn remove_missing_person_is_not_found() {
    let mut book = setup();
    let dan = first_match(&book, SearchCriterion::LastName, "Bradford");
    person_ops::remove(&mut book, &dan, &mut ScriptedInput::scripted(&["yes"])).unwrap();

    let result = person_ops::remove(&mut book, &dan, &mut ScriptedInput::scripted(&["yes"]));
    assert!(matches!(result, Err(PhonebookError::NotFound { .. })));
    assert_eq!(book.count(), 5);
}

#[test]
fn remove_preserves_order_of_the_rest() {
    let mut book = setup();
    let before: Vec<PersonId> = book.people().iter().map(|p| p.id()).collect();
    let second = book.people()[1].clone();

    person_ops::remove(&mut book, &second, &mut ScriptedInput::scripted(&["1"])).unwrap();
    let after: Vec<PersonId> = book.people().iter().map(|p| p.id()).collect();
    let expected: Vec<PersonId> = before.into_iter().filter(|&id| id != second.id()).collect();
    assert_eq!(after, expected);
}

// ==========================================================================
// END TO END
// ==========================================================================

#[test]
fn default_phonebook_scenario() {
    let mut book = setup();
    assert_eq!(book.count(), 6);

    let noahs = book.find(SearchCriterion::FullName, "Noah");
    let names: Vec<&str> = noahs.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Noah June", "Noah Noodles"]);

    let ofallon = book.find_by_zip(62269);
    let names: Vec<&str> = ofallon.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Dan Bradford", "Brandon Owners"]);

    let dan = first_match(&book, SearchCriterion::LastName, "Bradford");
    person_ops::remove(&mut book, &dan, &mut ScriptedInput::scripted(&["1"])).unwrap();
    assert_eq!(book.count(), 5);
    assert!(book.find(SearchCriterion::LastName, "Bradford").is_empty());
}

use tracing::debug;

use crate::cli::context::CliContext;
use crate::error::PhonebookError;
use crate::input::Prompted;
use crate::model::Person;
use crate::ops::person_ops::{self, EntryMode};
use crate::queries::SearchCriterion;
use crate::validation::Rules;

const SEARCH_MENU: &str = "\nHow would you like to search for a person?\n\
1. First Name\n\
2. Last Name\n\
3. Full Name\n\
4. Street Address\n\
5. City\n\
6. State\n\
7. Zip Code\n\
8. Phone Number\n\
9. Exit to the main menu\n\
Please enter the number of your selection:";

const SEARCH_CANCELLED: &str = "Person search cancelled by the user.";

pub fn list(ctx: &mut CliContext) {
    let listing = ctx.book.to_string();
    ctx.show(&listing);
}

pub fn add(ctx: &mut CliContext) {
    let wants_prompts = ctx.input.read_bool(
        "Do you want to enter the new person information by being prompted for each piece of data?\n\
         If no, you will be prompted for pre-formatted data separated by commas.",
    );
    let result = wants_prompts
        .into_result()
        .and_then(|wants| person_ops::add(&mut ctx.book, &mut *ctx.input, EntryMode::from_wants_prompts(wants)));
    match result {
        Ok(_) => ctx.show("Person added successfully."),
        Err(e) => ctx.print_error("Person was not added", &e),
    }
}

/// Asks for a search and runs it. `None` when the user backs out.
pub fn search_menu(ctx: &mut CliContext) -> Option<Vec<Person>> {
    let choice = match ctx.input.read_choice(SEARCH_MENU, 9) {
        Prompted::Value(choice) => choice,
        _ => {
            ctx.show(SEARCH_CANCELLED);
            return None;
        }
    };

    let found = match choice {
        1..=5 => {
            let criterion = SearchCriterion::ALL[choice - 1];
            let prompt = format!("Please enter part or all of the person's {}.", criterion);
            ctx.input
                .read_string(&prompt, criterion.label(), &Rules::any())
                .map(|query| ctx.book.find(criterion, &query))
        }
        6 => ctx
            .input
            .read_state("Please enter the person's 2 letter state abbreviation.")
            .map(|state| ctx.book.find(SearchCriterion::State, &state)),
        7 => ctx
            .input
            .read_integer(
                "Please enter the person's 5 digit zip code as a number.",
                "zip code",
                &Rules::zip_code(),
            )
            .map(|zip| u32::try_from(zip).map_or_else(|_| Vec::new(), |zip| ctx.book.find_by_zip(zip))),
        8 => ctx
            .input
            .read_long(
                "Please enter the person's phone number as a number without separating characters.",
                "phone number",
                &Rules::phone_number(),
            )
            .map(|phone| u64::try_from(phone).map_or_else(|_| Vec::new(), |phone| ctx.book.find_by_phone(phone))),
        _ => Prompted::Cancelled,
    };

    match found {
        Prompted::Value(found) => Some(found),
        _ => {
            ctx.show(SEARCH_CANCELLED);
            None
        }
    }
}

/// Numbered list, so a result can be picked by number.
pub fn display_people_found(ctx: &mut CliContext, found: &[Person]) {
    if found.is_empty() {
        ctx.show("Your search did not find any people.");
        return;
    }
    let mut text = format!("Your search returned {} results:", found.len());
    for (index, person) in found.iter().enumerate() {
        text.push_str(&format!("\n{}- {}", index + 1, person));
    }
    ctx.show(&text);
}

pub fn search_and_display(ctx: &mut CliContext) {
    if let Some(found) = search_menu(ctx) {
        display_people_found(ctx, &found);
    }
}

/// Searches, shows the results, and asks which one to act on.
fn pick(ctx: &mut CliContext, verb: &str) -> Option<Person> {
    let found = search_menu(ctx)?;
    display_people_found(ctx, &found);
    if found.is_empty() {
        ctx.show(&format!("No results to {}.", verb));
        return None;
    }
    let prompt = format!("Please type the number of the search result you want to {}:", verb);
    match ctx.input.read_choice(&prompt, found.len()) {
        Prompted::Value(choice) => found.into_iter().nth(choice - 1),
        _ => {
            debug!("No search result picked to {}", verb);
            None
        }
    }
}

pub fn update(ctx: &mut CliContext) {
    let Some(person) = pick(ctx, "update") else {
        ctx.show("Person update cancelled.");
        return;
    };
    let prompt = format!(
        "Would you like to be prompted to update each attribute of {} individually?",
        person.name()
    );
    let result = ctx.input.read_bool(&prompt).into_result().and_then(|wants| {
        person_ops::update(
            &mut ctx.book,
            &person,
            &mut *ctx.input,
            EntryMode::from_wants_prompts(wants),
        )
    });
    match result {
        Ok(_) => ctx.show("Person update successful."),
        Err(e) => ctx.print_error("Person update failed", &e),
    }
}

pub fn delete(ctx: &mut CliContext) {
    let Some(person) = pick(ctx, "delete") else {
        ctx.show("Person delete cancelled.");
        return;
    };
    match person_ops::remove(&mut ctx.book, &person, &mut *ctx.input) {
        Ok(_) => ctx.show("Person delete successful."),
        Err(PhonebookError::Declined) => ctx.show("Person was not deleted."),
        Err(e) => ctx.print_error("Person delete failed", &e),
    }
}

pub mod context;
pub mod person_commands;

use tracing::info;

use context::CliContext;

use crate::input::Prompted;

fn main_menu(phonebook_name: &str) -> String {
    format!(
        "__________________________________________\n\
         Welcome to the {}!\n\
         Please enter the number of what you would like to do:\n\
         1. Add a new person.\n\
         2. Search for a person and display their information.\n\
         3. Search for a person and update their information.\n\
         4. Search for a person and delete their information.\n\
         5. Show all people in the phonebook.\n\
         6. Exit the phonebook.",
        phonebook_name
    )
}

/// Runs the main menu until the user exits or cancels.
pub fn run(ctx: &mut CliContext) {
    loop {
        let menu = main_menu(ctx.book.name());
        let choice = match ctx.input.read_choice(&menu, 6) {
            Prompted::Value(choice) => choice,
            Prompted::Invalid(_) => continue,
            Prompted::Cancelled => break,
        };

        match choice {
            1 => person_commands::add(ctx),
            2 => {
                ctx.show("Person Search");
                person_commands::search_and_display(ctx);
            }
            3 => {
                ctx.show("Update Person");
                person_commands::update(ctx);
            }
            4 => {
                ctx.show("Delete Person");
                person_commands::delete(ctx);
            }
            5 => person_commands::list(ctx),
            6 => break,
            other => ctx.show(&format!("You selected {} which is not a valid menu option.", other)),
        }
    }
    info!("Leaving {} with {} people", ctx.book.name(), ctx.book.count());
}

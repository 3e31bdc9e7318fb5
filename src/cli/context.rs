use crate::error::PhonebookError;
use crate::input::InputSource;
use crate::phonebook::Phonebook;

/// State shared by every menu command: the phonebook and where input comes from.
///
/// All user-facing text goes through the input source so scripted runs
/// capture it too.
pub struct CliContext<'a> {
    pub book: Phonebook,
    pub input: &'a mut dyn InputSource,
}

impl<'a> CliContext<'a> {
    pub fn new(book: Phonebook, input: &'a mut dyn InputSource) -> Self {
        Self { book, input }
    }

    pub fn show(&mut self, text: &str) {
        self.input.show(text);
    }

    /// One-line status for a failed command, e.g. "Person was not added: ...".
    pub fn print_error(&mut self, what: &str, e: &PhonebookError) {
        self.input.show(&format!("{}: {}", what, e));
    }

    pub fn into_phonebook(self) -> Phonebook {
        self.book
    }
}

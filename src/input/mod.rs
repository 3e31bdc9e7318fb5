//! The input collaborator: where field values and confirmations come from.
//!
//! Front ends implement the three required methods of [`InputSource`]; the
//! typed reads are built on top of `read_checked`.

pub mod line;

pub use line::{LineInput, ScriptedInput, CANCEL};

use crate::error::{FieldError, PhonebookError, PhonebookResult};
use crate::validation::{self, Rules};

/// Outcome of asking for one value.
#[derive(Debug, Clone, PartialEq)]
pub enum Prompted<T> {
    Value(T),
    /// The source gave up after repeated bad entries.
    Invalid(FieldError),
    Cancelled,
}

impl<T> Prompted<T> {
    pub fn into_result(self) -> PhonebookResult<T> {
        match self {
            Prompted::Value(v) => Ok(v),
            Prompted::Invalid(e) => Err(PhonebookError::Invalid(e)),
            Prompted::Cancelled => Err(PhonebookError::Cancelled),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Prompted<U> {
        match self {
            Prompted::Value(v) => Prompted::Value(f(v)),
            Prompted::Invalid(e) => Prompted::Invalid(e),
            Prompted::Cancelled => Prompted::Cancelled,
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Prompted::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Prompted::Cancelled)
    }
}

impl Prompted<()> {
    /// Pairs an accepted read with the value its check captured.
    fn with<T>(self, captured: Option<T>) -> Prompted<T> {
        match (self, captured) {
            (Prompted::Value(()), Some(v)) => Prompted::Value(v),
            (Prompted::Value(()), None) => Prompted::Cancelled,
            (Prompted::Invalid(e), _) => Prompted::Invalid(e),
            (Prompted::Cancelled, _) => Prompted::Cancelled,
        }
    }
}

fn parse_answer(line: &str) -> Result<bool, FieldError> {
    match line.trim().to_lowercase().as_str() {
        "1" | "y" | "yes" => Ok(true),
        "2" | "n" | "no" => Ok(false),
        _ => Err(FieldError::OutOfRange {
            field: "answer".into(),
            min: "1".into(),
            max: "2".into(),
        }),
    }
}

/// A source of user-supplied values and a sink for text shown to the user.
pub trait InputSource {
    /// Asks until `check` accepts a line, the user cancels, or the source
    /// gives up. `check` sees the trimmed line.
    fn read_checked(
        &mut self,
        prompt: &str,
        check: &mut dyn FnMut(&str) -> Result<(), FieldError>,
    ) -> Prompted<()>;

    /// One line of free text, possibly blank.
    fn read_line(&mut self, prompt: &str) -> Prompted<String>;

    /// Shows text to the user.
    fn show(&mut self, text: &str);

    fn read_bool(&mut self, prompt: &str) -> Prompted<bool> {
        let prompt = format!("{}\nEnter 1 for yes or 2 for no:", prompt);
        let mut answer = None;
        let outcome = self.read_checked(&prompt, &mut |line: &str| {
            answer = Some(parse_answer(line)?);
            Ok(())
        });
        outcome.with(answer)
    }

    /// A numbered option from 1 to `count`.
    fn read_choice(&mut self, prompt: &str, count: usize) -> Prompted<usize> {
        let rules = Rules::range(1, i32::try_from(count).unwrap_or(i32::MAX));
        let mut choice = None;
        let outcome = self.read_checked(prompt, &mut |line: &str| {
            let value = validation::parse_integer(line, "selection", &rules)?;
            choice = usize::try_from(value).ok();
            Ok(())
        });
        outcome.with(choice)
    }

    fn read_integer(&mut self, prompt: &str, field: &str, rules: &Rules<i32>) -> Prompted<i32> {
        let mut value = None;
        let outcome = self.read_checked(prompt, &mut |line: &str| {
            value = Some(validation::parse_integer(line, field, rules)?);
            Ok(())
        });
        outcome.with(value)
    }

    fn read_long(&mut self, prompt: &str, field: &str, rules: &Rules<i64>) -> Prompted<i64> {
        let mut value = None;
        let outcome = self.read_checked(prompt, &mut |line: &str| {
            value = Some(validation::parse_long(line, field, rules)?);
            Ok(())
        });
        outcome.with(value)
    }

    fn read_decimal(&mut self, prompt: &str, field: &str, rules: &Rules<f64>) -> Prompted<f64> {
        let mut value = None;
        let outcome = self.read_checked(prompt, &mut |line: &str| {
            value = Some(validation::parse_decimal(line, field, rules)?);
            Ok(())
        });
        outcome.with(value)
    }

    fn read_char(&mut self, prompt: &str, field: &str, rules: &Rules<char>) -> Prompted<char> {
        let mut value = None;
        let outcome = self.read_checked(prompt, &mut |line: &str| {
            value = Some(validation::parse_char(line, field, rules)?);
            Ok(())
        });
        outcome.with(value)
    }

    /// Non-blank text, trimmed.
    fn read_string(&mut self, prompt: &str, field: &str, rules: &Rules) -> Prompted<String> {
        let mut value = None;
        let outcome = self.read_checked(prompt, &mut |line: &str| {
            value = Some(validation::check_non_blank(line, field, rules)?.to_string());
            Ok(())
        });
        outcome.with(value)
    }

    /// A normalized US state abbreviation.
    fn read_state(&mut self, prompt: &str) -> Prompted<String> {
        let mut value = None;
        let outcome = self.read_checked(prompt, &mut |line: &str| {
            value = Some(validation::parse_state(line)?);
            Ok(())
        });
        outcome.with(value)
    }
}

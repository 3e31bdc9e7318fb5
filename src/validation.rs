use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

use crate::error::FieldError;

/// The 50 states, DC, and the US commonwealths and territories.
pub const STATE_ABBREVIATIONS: [&str; 59] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
    "VA", "WA", "WV", "WI", "WY", "AS", "DC", "FM", "GU", "MH", "MP", "PW", "PR", "VI",
];

/// Receives the diagnostic for a failed check.
pub trait ErrorReporter {
    fn report(&self, message: &str);
}

/// Sends diagnostics to the log instead of the user.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, message: &str) {
        warn!("{}", message);
    }
}

static TRACING_REPORTER: TracingReporter = TracingReporter;

/// Options for a single check. Every constraint is optional.
///
/// `min` and `max` are inclusive and swapped when given in reverse order.
/// `expected_length` counts digits for numbers (a sign or decimal point is
/// not a digit) and characters for strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Rules<T = ()> {
    pub expected_length: Option<usize>,
    pub min: Option<T>,
    pub max: Option<T>,
    pub report_errors: bool,
}

impl<T> Default for Rules<T> {
    fn default() -> Self {
        Self {
            expected_length: None,
            min: None,
            max: None,
            report_errors: true,
        }
    }
}

impl<T> Rules<T> {
    pub fn any() -> Self {
        Self::default()
    }

    pub fn digits(count: usize) -> Self {
        Self {
            expected_length: Some(count),
            ..Self::default()
        }
    }

    pub fn length(count: usize) -> Self {
        Self::digits(count)
    }

    pub fn range(min: T, max: T) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    /// Same checks, no diagnostic.
    pub fn silent(mut self) -> Self {
        self.report_errors = false;
        self
    }

    /// Adds a digit count to existing bounds.
    pub fn with_digits(mut self, count: usize) -> Self {
        self.expected_length = Some(count);
        self
    }
}

impl Rules<i32> {
    /// Five digits, no sign.
    pub fn zip_code() -> Self {
        Self::range(10_000, 99_999).with_digits(5)
    }

    /// Zero for unknown, otherwise up to four digits with no sign.
    pub fn zip_plus4() -> Self {
        Self::range(0, 9_999)
    }
}

impl Rules<i64> {
    /// Ten digits, no sign.
    pub fn phone_number() -> Self {
        Self::range(0, 9_999_999_999).with_digits(10)
    }
}

fn check_bounds<T>(value: T, rules: &Rules<T>, field: &str) -> Result<T, FieldError>
where
    T: PartialOrd + Display + Copy,
{
    let (low, high) = match (rules.min, rules.max) {
        (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
        bounds => bounds,
    };
    let below = low.map_or(false, |low| value < low);
    let above = high.map_or(false, |high| value > high);
    if below || above {
        return Err(FieldError::OutOfRange {
            field: field.to_string(),
            min: low.map_or_else(|| "-".to_string(), |v| v.to_string()),
            max: high.map_or_else(|| "-".to_string(), |v| v.to_string()),
        });
    }
    Ok(value)
}

fn check_digit_count(trimmed: &str, expected: Option<usize>, field: &str) -> Result<(), FieldError> {
    if let Some(expected) = expected {
        let actual = trimmed.chars().filter(char::is_ascii_digit).count();
        if actual != expected {
            return Err(FieldError::WrongDigitCount {
                field: field.to_string(),
                expected,
                actual,
            });
        }
    }
    Ok(())
}

fn parse_number<T>(input: &str, field: &str, kind: &'static str, rules: &Rules<T>) -> Result<T, FieldError>
where
    T: FromStr + PartialOrd + Display + Copy,
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::blank(field));
    }
    let value = trimmed.parse::<T>().map_err(|_| FieldError::NotANumber {
        field: field.to_string(),
        kind,
        value: trimmed.to_string(),
    })?;
    check_digit_count(trimmed, rules.expected_length, field)?;
    check_bounds(value, rules, field)
}

pub fn parse_integer(input: &str, field: &str, rules: &Rules<i32>) -> Result<i32, FieldError> {
    parse_number(input, field, "an integer", rules)
}

pub fn parse_long(input: &str, field: &str, rules: &Rules<i64>) -> Result<i64, FieldError> {
    parse_number(input, field, "a long integer", rules)
}

/// Rejects infinities and NaN, which `f64::from_str` would otherwise accept.
pub fn parse_decimal(input: &str, field: &str, rules: &Rules<f64>) -> Result<f64, FieldError> {
    let value = parse_number(input, field, "a decimal number", rules)?;
    if !value.is_finite() {
        return Err(FieldError::NotANumber {
            field: field.to_string(),
            kind: "a decimal number",
            value: input.trim().to_string(),
        });
    }
    Ok(value)
}

/// Takes the first character of a non-blank input and checks its ordinal range.
pub fn parse_char(input: &str, field: &str, rules: &Rules<char>) -> Result<char, FieldError> {
    let first = input
        .trim()
        .chars()
        .next()
        .ok_or_else(|| FieldError::blank(field))?;
    check_bounds(first, rules, field)
}

/// Returns the trimmed string on success.
pub fn check_non_blank<'a>(input: &'a str, field: &str, rules: &Rules) -> Result<&'a str, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FieldError::blank(field));
    }
    if let Some(expected) = rules.expected_length {
        let actual = trimmed.chars().count();
        if actual != expected {
            return Err(FieldError::WrongLength {
                field: field.to_string(),
                expected,
                actual,
            });
        }
    }
    Ok(trimmed)
}

/// Strips every whitespace character and upper-cases the rest.
pub fn normalize_state(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

pub fn is_us_state_abbreviation(input: &str) -> bool {
    let normalized = normalize_state(input);
    STATE_ABBREVIATIONS.contains(&normalized.as_str())
}

/// Returns the normalized abbreviation.
pub fn parse_state(input: &str) -> Result<String, FieldError> {
    let normalized = normalize_state(input);
    if normalized.is_empty() {
        return Err(FieldError::blank("state"));
    }
    if STATE_ABBREVIATIONS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(FieldError::NotAState {
            value: input.trim().to_string(),
        })
    }
}

/// Boolean front end to the checks above. A failed check is reported
/// through the injected reporter unless the rules are silent.
pub struct FieldValidator<'a> {
    reporter: &'a dyn ErrorReporter,
}

impl FieldValidator<'static> {
    pub fn logging() -> Self {
        Self {
            reporter: &TRACING_REPORTER,
        }
    }
}

impl<'a> FieldValidator<'a> {
    pub fn new(reporter: &'a dyn ErrorReporter) -> Self {
        Self { reporter }
    }

    fn outcome<T>(&self, result: Result<T, FieldError>, report_errors: bool) -> bool {
        match result {
            Ok(_) => true,
            Err(e) => {
                if report_errors {
                    self.reporter.report(&e.to_string());
                }
                false
            }
        }
    }

    pub fn is_valid_integer(&self, field: &str, input: &str, rules: &Rules<i32>) -> bool {
        self.outcome(parse_integer(input, field, rules), rules.report_errors)
    }

    pub fn is_valid_long(&self, field: &str, input: &str, rules: &Rules<i64>) -> bool {
        self.outcome(parse_long(input, field, rules), rules.report_errors)
    }

    pub fn is_valid_decimal(&self, field: &str, input: &str, rules: &Rules<f64>) -> bool {
        self.outcome(parse_decimal(input, field, rules), rules.report_errors)
    }

    pub fn is_valid_char(&self, field: &str, input: &str, rules: &Rules<char>) -> bool {
        self.outcome(parse_char(input, field, rules), rules.report_errors)
    }

    pub fn is_valid_non_blank_string(&self, field: &str, input: &str, rules: &Rules) -> bool {
        self.outcome(check_non_blank(input, field, rules), rules.report_errors)
    }

    pub fn is_valid_state(&self, input: &str, report_errors: bool) -> bool {
        self.outcome(parse_state(input), report_errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Collecting {
        messages: RefCell<Vec<String>>,
    }

    impl ErrorReporter for Collecting {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn number_presets_reject_a_sign() {
        assert_eq!(parse_integer("62269", "zip code", &Rules::zip_code()), Ok(62269));
        assert_eq!(
            parse_integer("-62269", "zip code", &Rules::zip_code()),
            Err(FieldError::OutOfRange {
                field: "zip code".to_string(),
                min: "10000".to_string(),
                max: "99999".to_string(),
            })
        );
        assert!(parse_integer("-1234", "zip+4", &Rules::zip_plus4()).is_err());
        assert_eq!(parse_integer("0", "zip+4", &Rules::zip_plus4()), Ok(0));
        assert!(parse_long("-6186323783", "phone number", &Rules::phone_number()).is_err());
        assert_eq!(
            parse_long("6186323783", "phone number", &Rules::phone_number()),
            Ok(6_186_323_783)
        );
    }

    #[test]
    fn integer_accepts_plain_number() {
        assert_eq!(parse_integer(" 42 ", "age", &Rules::any()).unwrap(), 42);
    }

    #[test]
    fn integer_rejects_decimal_and_text() {
        assert!(parse_integer("4.2", "age", &Rules::any()).is_err());
        assert!(parse_integer("abc", "age", &Rules::any()).is_err());
        assert!(parse_integer("", "age", &Rules::any()).is_err());
    }

    #[test]
    fn integer_digit_count() {
        assert!(parse_integer("62269", "zip", &Rules::digits(5)).is_ok());
        assert_eq!(
            parse_integer("622", "zip", &Rules::digits(5)),
            Err(FieldError::WrongDigitCount {
                field: "zip".into(),
                expected: 5,
                actual: 3
            })
        );
        assert!(parse_integer("622690", "zip", &Rules::digits(5)).is_err());
    }

    #[test]
    fn reversed_range_is_swapped() {
        let rules = Rules::range(10, 1);
        assert!(parse_integer("5", "choice", &rules).is_ok());
        assert!(parse_integer("1", "choice", &rules).is_ok());
        assert!(parse_integer("10", "choice", &rules).is_ok());
        assert!(parse_integer("11", "choice", &rules).is_err());
    }

    #[test]
    fn long_handles_ten_digit_phone() {
        assert_eq!(
            parse_long("6186323783", "phone", &Rules::digits(10)).unwrap(),
            6_186_323_783
        );
        assert!(parse_integer("6186323783", "phone", &Rules::any()).is_err());
    }

    #[test]
    fn decimal_digits_exclude_point() {
        assert!(parse_decimal("12.34", "amount", &Rules::digits(4)).is_ok());
        assert!(parse_decimal("1234", "amount", &Rules::digits(4)).is_ok());
        assert!(parse_decimal("12.345", "amount", &Rules::digits(4)).is_err());
    }

    #[test]
    fn decimal_rejects_non_finite() {
        assert!(parse_decimal("inf", "amount", &Rules::any()).is_err());
        assert!(parse_decimal("NaN", "amount", &Rules::any()).is_err());
    }

    #[test]
    fn char_range_uses_first_character() {
        let rules = Rules::range('a', 'f');
        assert_eq!(parse_char("cat", "letter", &rules).unwrap(), 'c');
        assert!(parse_char("zebra", "letter", &rules).is_err());
        assert!(parse_char("   ", "letter", &rules).is_err());
    }

    #[test]
    fn non_blank_with_exact_length() {
        assert_eq!(check_non_blank(" IL ", "state", &Rules::length(2)).unwrap(), "IL");
        assert!(check_non_blank("ILL", "state", &Rules::length(2)).is_err());
        assert!(check_non_blank("   ", "name", &Rules::any()).is_err());
    }

    #[test]
    fn state_abbreviation_is_case_and_space_insensitive() {
        assert!(is_us_state_abbreviation("IL"));
        assert!(is_us_state_abbreviation("il"));
        assert!(is_us_state_abbreviation(" I L "));
        assert!(is_us_state_abbreviation("dc"));
        assert!(is_us_state_abbreviation("PR"));
        assert!(!is_us_state_abbreviation("ZZ"));
        assert!(!is_us_state_abbreviation(""));
    }

    #[test]
    fn state_list_has_59_unique_codes() {
        let mut codes = STATE_ABBREVIATIONS.to_vec();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 59);
    }

    #[test]
    fn parse_state_normalizes() {
        assert_eq!(parse_state(" mo ").unwrap(), "MO");
        assert!(matches!(parse_state("ZZ"), Err(FieldError::NotAState { .. })));
    }

    #[test]
    fn validator_reports_unless_silent() {
        let sink = Collecting::default();
        let validator = FieldValidator::new(&sink);

        assert!(!validator.is_valid_integer("zip", "622", &Rules::digits(5)));
        assert!(!validator.is_valid_integer("zip", "622", &Rules::digits(5).silent()));
        assert!(validator.is_valid_integer("zip", "62269", &Rules::digits(5)));

        let messages = sink.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("zip"));
    }

    #[test]
    fn logging_validator_never_panics() {
        let validator = FieldValidator::logging();
        assert!(!validator.is_valid_state("ZZ", true));
        assert!(validator.is_valid_long("phone", "3142894400", &Rules::digits(10)));
    }
}

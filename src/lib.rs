pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod ops;
pub mod phonebook;
pub mod queries;
pub mod seed;
pub mod validation;

pub use config::Config;
pub use error::{FieldError, PhonebookError, PhonebookResult};
pub use phonebook::Phonebook;

pub mod person_ops;

pub use person_ops::{EntryMode, RECORD_FORMAT};

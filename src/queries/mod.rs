pub mod person_queries;

pub use person_queries::SearchCriterion;

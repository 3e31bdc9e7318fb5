pub mod address;
pub mod ids;
pub mod person;

// Re-exports for convenience
pub use address::Address;
pub use ids::PersonId;
pub use person::Person;

//! Data models shared across database access and API handlers.

pub mod person;

pub use person::Person;

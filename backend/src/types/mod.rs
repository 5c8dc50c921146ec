pub mod id;

pub use id::PersonId;

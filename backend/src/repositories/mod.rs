pub mod memory;
pub mod person;
pub mod person_repository;

pub use memory::InMemoryPersonRepository;
pub use person::PgPersonRepository;
pub use person_repository::PersonRepository;

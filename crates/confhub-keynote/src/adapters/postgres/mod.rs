//! PostgreSQL Repository Implementations

mod keynote_repository;

pub use keynote_repository::PgKeynoteRepository;

//! PostgreSQL Repository Implementations

mod conference_repository;
mod review_repository;

pub use conference_repository::PgConferenceRepository;
pub use review_repository::PgReviewRepository;

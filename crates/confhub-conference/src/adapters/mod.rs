//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod keynote_client;
pub mod postgres;

// Re-exports
pub use keynote_client::HttpKeynoteClient;
pub use postgres::{PgConferenceRepository, PgReviewRepository};

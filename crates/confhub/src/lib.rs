//! Confhub Domain Library
//!
//! Core domain types and interfaces shared by the conference service and
//! the keynote service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Conference, Review, Keynote)
//!   - `value_objects/`: Immutable value types (ConferenceType, Rating)
//!   - `services/`: Pure domain rules (score averaging)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use confhub::domain::{Conference, Review, Keynote};
//! use confhub::ports::{ConferenceRepository, KeynoteClient};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    average_score, Conference, ConferencePatch, ConferenceSearch, ConferenceType, DomainError,
    Keynote, KeynoteDraft, NewConference, NewReview, Rating, Review, ReviewPatch,
    KEYNOTE_UNAVAILABLE, MAX_REVIEW_BODY_LEN,
};
pub use ports::{
    // Repositories
    ConferenceRepository,
    // External services
    KeynoteClient,
    KeynoteRepository,
    ReviewRepository,
    ReviewUnitOfWork,
};

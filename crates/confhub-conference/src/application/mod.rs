//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod conference_service;
mod review_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use conference_service::{ConferenceDetails, ConferenceService};
pub use review_service::ReviewService;

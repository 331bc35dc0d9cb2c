//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod conference_repository;
mod keynote_repository;
mod review_repository;

pub use conference_repository::*;
pub use keynote_repository::*;
pub use review_repository::*;

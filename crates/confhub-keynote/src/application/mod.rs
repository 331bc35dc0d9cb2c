//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod keynote_service;

pub use keynote_service::KeynoteService;

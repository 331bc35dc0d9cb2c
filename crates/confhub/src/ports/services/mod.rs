//! External Service Ports
//!
//! Interfaces for calls leaving the process.

mod keynote_client;

pub use keynote_client::*;

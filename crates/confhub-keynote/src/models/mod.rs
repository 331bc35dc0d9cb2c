//! Confhub Keynote Data Models

mod keynote;

pub use keynote::*;

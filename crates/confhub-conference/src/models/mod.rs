//! Confhub Conference Data Models
//!
//! - Conference: schedulable academic or commercial event
//! - Review: rated comment on one conference
//! - Keynote: speaker view as returned by the keynote service

mod conference;
mod keynote;
mod review;

pub use conference::*;
pub use keynote::*;
pub use review::*;

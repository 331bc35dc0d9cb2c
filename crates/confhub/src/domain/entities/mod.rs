//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Conference: Academic or commercial event, owner of its reviews
//! - Review: Rated comment attached to exactly one conference
//! - Keynote: Speaker owned by the keynote service

mod conference;
mod keynote;
mod review;

pub use conference::*;
pub use keynote::*;
pub use review::*;

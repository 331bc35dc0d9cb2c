//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod conference_type;
mod rating;

pub use conference_type::*;
pub use rating::*;

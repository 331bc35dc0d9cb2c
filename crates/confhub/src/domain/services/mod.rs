//! Domain Services
//!
//! Stateless business rules that span more than one entity.

mod scoring;

pub use scoring::*;

//! Server-side Services
//!
//! Process-wide runtime components used by the application layer.

pub mod circuit_breaker;

pub use circuit_breaker::{BreakerError, CircuitBreaker, CircuitBreakerConfig};

//! Circuit breaker for outbound calls
//!
//! Closed -> Open after `failure_threshold` consecutive failures.
//! Open -> HalfOpen once `open_cooldown` has elapsed; a single trial call
//! is admitted. HalfOpen -> Closed when the trial succeeds, back to Open
//! when it fails.
//!
//! One breaker is created per downstream target at startup and shared by
//! every request through an `Arc`.

use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Circuit breaker configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    /// Consecutive failures required to open the breaker
    pub failure_threshold: u32,
    /// How long the breaker stays open before admitting a trial
    pub open_cooldown: Duration,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            open_cooldown: Duration::from_secs(30),
        }
    }
}

/// Observable breaker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

/// Outcome of a guarded call that did not produce a value
#[derive(Debug, Error)]
pub enum BreakerError<E> {
    #[error("circuit breaker '{0}' is open")]
    Open(String),

    #[error("{0}")]
    Inner(E),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Admission {
    Allowed,
    Trial,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InternalState {
    Closed { consecutive_failures: u32 },
    Open { opened_at: Instant },
    HalfOpen { trial_in_flight: bool },
}

pub struct CircuitBreaker {
    name: String,
    config: CircuitBreakerConfig,
    state: Mutex<InternalState>,
}

impl CircuitBreaker {
    pub fn new(name: impl Into<String>, config: CircuitBreakerConfig) -> Self {
        Self {
            name: name.into(),
            config: CircuitBreakerConfig {
                failure_threshold: config.failure_threshold.max(1),
                open_cooldown: config.open_cooldown,
            },
            state: Mutex::new(InternalState::Closed {
                consecutive_failures: 0,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> CircuitState {
        match *self.lock() {
            InternalState::Closed { .. } => CircuitState::Closed,
            InternalState::Open { .. } => CircuitState::Open,
            InternalState::HalfOpen { .. } => CircuitState::HalfOpen,
        }
    }

    /// Run `op` if the breaker admits it and record the outcome.
    ///
    /// Every `Err` returned by `op` counts as a failure. Callers that want
    /// an answer to be neutral for the breaker must return it as `Ok`.
    pub async fn call<T, E, F, Fut>(&self, op: F) -> Result<T, BreakerError<E>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let admission = self.admit(Instant::now());
        if admission == Admission::Rejected {
            return Err(BreakerError::Open(self.name.clone()));
        }

        let mut trial = TrialGuard {
            breaker: self,
            armed: admission == Admission::Trial,
        };
        let result = op().await;
        trial.armed = false;

        match result {
            Ok(value) => {
                self.record_success();
                Ok(value)
            }
            Err(e) => {
                self.record_failure(Instant::now());
                Err(BreakerError::Inner(e))
            }
        }
    }

    fn admit(&self, now: Instant) -> Admission {
        let mut state = self.lock();
        match *state {
            InternalState::Closed { .. } => Admission::Allowed,
            InternalState::Open { opened_at }
                if now.saturating_duration_since(opened_at) >= self.config.open_cooldown =>
            {
                *state = InternalState::HalfOpen {
                    trial_in_flight: true,
                };
                tracing::info!("Circuit breaker '{}' half-open, probing", self.name);
                Admission::Trial
            }
            InternalState::Open { .. } => Admission::Rejected,
            InternalState::HalfOpen {
                trial_in_flight: true,
            } => Admission::Rejected,
            InternalState::HalfOpen {
                trial_in_flight: false,
            } => {
                *state = InternalState::HalfOpen {
                    trial_in_flight: true,
                };
                Admission::Trial
            }
        }
    }

    fn record_success(&self) {
        let mut state = self.lock();
        if !matches!(*state, InternalState::Closed { .. }) {
            tracing::info!("Circuit breaker '{}' closed", self.name);
        }
        *state = InternalState::Closed {
            consecutive_failures: 0,
        };
    }

    fn record_failure(&self, now: Instant) {
        let mut state = self.lock();
        *state = match *state {
            InternalState::Closed {
                consecutive_failures,
            } => {
                let failures = consecutive_failures.saturating_add(1);
                if failures >= self.config.failure_threshold {
                    tracing::warn!(
                        "Circuit breaker '{}' opened after {} consecutive failures",
                        self.name,
                        failures
                    );
                    InternalState::Open { opened_at: now }
                } else {
                    InternalState::Closed {
                        consecutive_failures: failures,
                    }
                }
            }
            InternalState::HalfOpen { .. } => {
                tracing::warn!("Circuit breaker '{}' trial failed, reopening", self.name);
                InternalState::Open { opened_at: now }
            }
            open @ InternalState::Open { .. } => open,
        };
    }

    /// A trial was abandoned before it finished; let the next call try.
    fn release_trial(&self) {
        let mut state = self.lock();
        if let InternalState::HalfOpen { .. } = *state {
            *state = InternalState::HalfOpen {
                trial_in_flight: false,
            };
        }
    }

    fn lock(&self) -> MutexGuard<'_, InternalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Frees the half-open trial slot if the guarded future is dropped mid-call.
struct TrialGuard<'a> {
    breaker: &'a CircuitBreaker,
    armed: bool,
}

impl Drop for TrialGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.breaker.release_trial();
        }
    }
}

//! Keynote - Conference speaker
//!
//! Owned by the keynote service. The conference service only ever sees
//! it as the JSON body returned by `GET /api/keynotes/{id}`.

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Sentinel written into a placeholder keynote when the keynote
/// service cannot answer.
pub const KEYNOTE_UNAVAILABLE: &str = "Service unavailable";

/// Keynote speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keynote {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Option<String>,
}

/// Keynote fields supplied on create and full update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeynoteDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Option<String>,
}

impl Keynote {
    /// Placeholder returned in place of a keynote that could not be fetched.
    /// Keeps the real id so callers can still correlate it.
    pub fn unavailable(id: i64) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: KEYNOTE_UNAVAILABLE.to_string(),
            email: String::new(),
            role: Some(String::new()),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.last_name == KEYNOTE_UNAVAILABLE && self.email.is_empty()
    }
}

impl KeynoteDraft {
    /// Trim input and reject missing required fields
    pub fn normalized(self) -> Result<Self, DomainError> {
        let first_name = self.first_name.trim().to_string();
        let last_name = self.last_name.trim().to_string();
        let email = self.email.trim().to_lowercase();

        if first_name.is_empty() {
            return Err(DomainError::validation("First name is required"));
        }
        if last_name.is_empty() {
            return Err(DomainError::validation("Last name is required"));
        }
        if email.is_empty() {
            return Err(DomainError::validation("Email is required"));
        }
        if !email.contains('@') {
            return Err(DomainError::validation(format!(
                "Email is not valid: {}",
                email
            )));
        }

        Ok(Self {
            first_name,
            last_name,
            email,
            role: self
                .role
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        })
    }

    pub fn into_keynote(self, id: i64) -> Keynote {
        Keynote {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            role: self.role,
        }
    }
}

//! ConferenceType - Kind of event

use serde::{Deserialize, Serialize};

/// Conference type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConferenceType {
    Academic,
    Commercial,
}

impl ConferenceType {
    /// Stored and wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ConferenceType::Academic => "ACADEMIC",
            ConferenceType::Commercial => "COMMERCIAL",
        }
    }
}

impl std::fmt::Display for ConferenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConferenceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACADEMIC" => Ok(ConferenceType::Academic),
            "COMMERCIAL" => Ok(ConferenceType::Commercial),
            _ => Err(format!("Unknown conference type: {}", s)),
        }
    }
}

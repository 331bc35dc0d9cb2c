//! Keynote - Conference speaker

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================
// Request/Response DTOs
// ============================================

/// Create or replace Keynote request
#[derive(Debug, Deserialize, ToSchema)]
pub struct KeynoteRequest {
    pub first_name: String,
    pub last_name: String,
    /// Unique across keynotes
    pub email: String,
    pub role: Option<String>,
}

impl From<KeynoteRequest> for confhub::KeynoteDraft {
    fn from(req: KeynoteRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            role: req.role,
        }
    }
}

/// Keynote response
#[derive(Debug, Serialize, ToSchema)]
pub struct KeynoteResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Option<String>,
}

impl From<confhub::Keynote> for KeynoteResponse {
    fn from(keynote: confhub::Keynote) -> Self {
        Self {
            id: keynote.id,
            first_name: keynote.first_name,
            last_name: keynote.last_name,
            email: keynote.email,
            role: keynote.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_matches_conference_client_shape() {
        let response = KeynoteResponse::from(confhub::Keynote {
            id: 4,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.org".to_string(),
            role: None,
        });

        let json = serde_json::to_string(&response).unwrap();
        let decoded: confhub::Keynote = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, 4);
        assert_eq!(decoded.role, None);
    }

    #[test]
    fn test_request_role_is_optional() {
        let req: KeynoteRequest = serde_json::from_str(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"ada@example.org"}"#,
        )
        .unwrap();
        assert_eq!(confhub::KeynoteDraft::from(req).role, None);
    }
}

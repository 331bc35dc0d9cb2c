//! Keynote as embedded in conference responses

use serde::Serialize;
use utoipa::ToSchema;

/// Keynote response. A placeholder keeps the id, carries
/// `"Service unavailable"` as last name and empty strings elsewhere.
#[derive(Debug, Serialize, ToSchema)]
pub struct KeynoteResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
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

//! Conference - Academic or commercial event

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{KeynoteResponse, ReviewResponse};
use crate::application::ConferenceDetails;

/// Conference type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConferenceType {
    Academic,
    Commercial,
}

impl From<ConferenceType> for confhub::ConferenceType {
    fn from(t: ConferenceType) -> Self {
        match t {
            ConferenceType::Academic => confhub::ConferenceType::Academic,
            ConferenceType::Commercial => confhub::ConferenceType::Commercial,
        }
    }
}

impl From<confhub::ConferenceType> for ConferenceType {
    fn from(t: confhub::ConferenceType) -> Self {
        match t {
            confhub::ConferenceType::Academic => ConferenceType::Academic,
            confhub::ConferenceType::Commercial => ConferenceType::Commercial,
        }
    }
}

// ============================================
// Request/Response DTOs
// ============================================

/// Create Conference request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateConferenceRequest {
    pub title: String,
    pub conference_type: ConferenceType,
    pub date: NaiveDate,
    pub duration_minutes: Option<i32>,
    pub registrants: Option<i32>,
    /// Keynote id in the keynote service
    pub keynote_id: Option<i64>,
}

impl From<CreateConferenceRequest> for confhub::NewConference {
    fn from(req: CreateConferenceRequest) -> Self {
        Self {
            title: req.title,
            conference_type: req.conference_type.into(),
            date: req.date,
            duration_minutes: req.duration_minutes,
            registrants: req.registrants,
            keynote_id: req.keynote_id,
        }
    }
}

/// Update Conference request. The score is derived from reviews and
/// cannot be set here.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateConferenceRequest {
    pub title: Option<String>,
    pub conference_type: Option<ConferenceType>,
    pub date: Option<NaiveDate>,
    pub duration_minutes: Option<i32>,
    pub registrants: Option<i32>,
    pub keynote_id: Option<i64>,
}

impl From<UpdateConferenceRequest> for confhub::ConferencePatch {
    fn from(req: UpdateConferenceRequest) -> Self {
        Self {
            title: req.title,
            conference_type: req.conference_type.map(Into::into),
            date: req.date,
            duration_minutes: req.duration_minutes,
            registrants: req.registrants,
            keynote_id: req.keynote_id,
        }
    }
}

/// Search query
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchConferencesQuery {
    /// Case-insensitive title fragment
    pub title: Option<String>,
    /// Earliest date (inclusive)
    pub from: Option<NaiveDate>,
    /// Latest date (inclusive)
    pub to: Option<NaiveDate>,
}

impl From<SearchConferencesQuery> for confhub::ConferenceSearch {
    fn from(query: SearchConferencesQuery) -> Self {
        Self {
            title_contains: query.title.filter(|t| !t.trim().is_empty()),
            from: query.from,
            to: query.to,
        }
    }
}

/// Conference response
#[derive(Debug, Serialize, ToSchema)]
pub struct ConferenceResponse {
    pub id: i64,
    pub title: String,
    pub conference_type: ConferenceType,
    pub date: NaiveDate,
    pub duration_minutes: Option<i32>,
    pub registrants: Option<i32>,
    /// Mean review rating rounded to one decimal; null before the first review
    pub score: Option<f64>,
    pub keynote_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keynote: Option<KeynoteResponse>,
}

impl From<confhub::Conference> for ConferenceResponse {
    fn from(c: confhub::Conference) -> Self {
        Self {
            id: c.id,
            title: c.title,
            conference_type: c.conference_type.into(),
            date: c.date,
            duration_minutes: c.duration_minutes,
            registrants: c.registrants,
            score: c.score,
            keynote_id: c.keynote_id,
            reviews: None,
            keynote: None,
        }
    }
}

impl From<ConferenceDetails> for ConferenceResponse {
    fn from(details: ConferenceDetails) -> Self {
        let reviews = details.reviews.into_iter().map(Into::into).collect();
        Self {
            reviews: Some(reviews),
            keynote: details.keynote.map(Into::into),
            ..ConferenceResponse::from(details.conference)
        }
    }
}

//! Review - Rated comment on a conference

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================
// Request/Response DTOs
// ============================================

/// Create Review request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    /// Defaults to today
    pub date: Option<NaiveDate>,
    pub body: String,
    /// 1 to 5
    pub rating: i32,
}

/// Update Review request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    pub date: Option<NaiveDate>,
    pub body: Option<String>,
    pub rating: Option<i32>,
}

impl From<UpdateReviewRequest> for confhub::ReviewPatch {
    fn from(req: UpdateReviewRequest) -> Self {
        Self {
            date: req.date,
            body: req.body,
            rating: req.rating,
        }
    }
}

/// Review response
#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i64,
    pub conference_id: i64,
    pub date: NaiveDate,
    pub body: String,
    pub rating: i32,
}

impl From<confhub::Review> for ReviewResponse {
    fn from(review: confhub::Review) -> Self {
        Self {
            id: review.id,
            conference_id: review.conference_id,
            date: review.date,
            body: review.body,
            rating: review.rating.value(),
        }
    }
}

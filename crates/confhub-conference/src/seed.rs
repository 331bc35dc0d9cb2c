//! Sample data for an empty database
//!
//! Goes through the application services so scores are derived from the
//! seeded reviews like any other.

use chrono::NaiveDate;

use confhub::{
    ConferenceRepository, ConferenceType, DomainError, KeynoteClient, NewConference,
    ReviewRepository,
};

use crate::application::{ConferenceService, ReviewService};

struct SampleConference {
    title: &'static str,
    conference_type: ConferenceType,
    date: (i32, u32, u32),
    duration_minutes: i32,
    registrants: i32,
    keynote_id: i64,
    reviews: &'static [SampleReview],
}

struct SampleReview {
    date: (i32, u32, u32),
    body: &'static str,
    rating: i32,
}

const SAMPLES: &[SampleConference] = &[
    SampleConference {
        title: "Spring Boot Microservices",
        conference_type: ConferenceType::Academic,
        date: (2026, 3, 15),
        duration_minutes: 120,
        registrants: 150,
        keynote_id: 1,
        reviews: &[
            SampleReview {
                date: (2026, 3, 16),
                body: "Excellent conference! Very informative.",
                rating: 5,
            },
            SampleReview {
                date: (2026, 3, 16),
                body: "Good content but could be more interactive.",
                rating: 4,
            },
        ],
    },
    SampleConference {
        title: "Cloud Native Architecture",
        conference_type: ConferenceType::Commercial,
        date: (2026, 4, 20),
        duration_minutes: 90,
        registrants: 200,
        keynote_id: 2,
        reviews: &[SampleReview {
            date: (2026, 4, 21),
            body: "Amazing insights on cloud architecture!",
            rating: 5,
        }],
    },
    SampleConference {
        title: "DevOps Best Practices",
        conference_type: ConferenceType::Academic,
        date: (2026, 5, 10),
        duration_minutes: 180,
        registrants: 100,
        keynote_id: 1,
        reviews: &[],
    },
];

fn date((y, m, d): (i32, u32, u32)) -> Result<NaiveDate, DomainError> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| DomainError::validation(format!("invalid sample date {y}-{m}-{d}")))
}

/// Insert the sample conferences and reviews unless a conference already
/// exists. Returns the number of conferences created.
pub async fn seed_sample_data<C, R, K>(
    conferences: &ConferenceService<C, R, K>,
    reviews: &ReviewService<C, R>,
) -> Result<usize, DomainError>
where
    C: ConferenceRepository,
    R: ReviewRepository,
    K: KeynoteClient,
{
    if !conferences.list_all().await?.is_empty() {
        tracing::info!("Conferences already present, skipping sample data");
        return Ok(0);
    }

    for sample in SAMPLES {
        let conference = conferences
            .create(NewConference {
                title: sample.title.to_string(),
                conference_type: sample.conference_type,
                date: date(sample.date)?,
                duration_minutes: Some(sample.duration_minutes),
                registrants: Some(sample.registrants),
                keynote_id: Some(sample.keynote_id),
            })
            .await?;

        for review in sample.reviews {
            reviews
                .add(
                    conference.id,
                    Some(date(review.date)?),
                    review.body.to_string(),
                    review.rating,
                )
                .await?;
        }
    }

    tracing::info!("Sample data loaded: {} conferences", SAMPLES.len());

    Ok(SAMPLES.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FakeKeynoteClient, InMemoryStore, KeynoteBehavior};
    use crate::services::{CircuitBreaker, CircuitBreakerConfig};
    use std::sync::Arc;

    fn services(
        store: &InMemoryStore,
    ) -> (
        ConferenceService<InMemoryStore, InMemoryStore, FakeKeynoteClient>,
        ReviewService<InMemoryStore, InMemoryStore>,
    ) {
        let conferences = ConferenceService::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(FakeKeynoteClient::new(KeynoteBehavior::Found)),
            Arc::new(CircuitBreaker::new(
                "keynote-service",
                CircuitBreakerConfig::default(),
            )),
        );
        let reviews = ReviewService::new(Arc::new(store.clone()), Arc::new(store.clone()));
        (conferences, reviews)
    }

    #[tokio::test]
    async fn test_seeds_empty_store_with_derived_scores() {
        let store = InMemoryStore::new();
        let (conferences, reviews) = services(&store);

        assert_eq!(seed_sample_data(&conferences, &reviews).await.unwrap(), 3);

        let all = conferences.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(store.review_count(), 3);

        let scores: Vec<Option<f64>> = all.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![Some(4.5), Some(5.0), None]);
    }

    #[tokio::test]
    async fn test_skips_when_conferences_exist() {
        let store = InMemoryStore::new();
        let (conferences, reviews) = services(&store);
        seed_sample_data(&conferences, &reviews).await.unwrap();

        assert_eq!(seed_sample_data(&conferences, &reviews).await.unwrap(), 0);
        assert_eq!(conferences.list_all().await.unwrap().len(), 3);
    }
}

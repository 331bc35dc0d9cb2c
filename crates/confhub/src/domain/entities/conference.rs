//! Conference - Academic or commercial event
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::value_objects::ConferenceType;

/// Conference - owns its reviews, references its keynote by id only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    pub id: i64,
    pub title: String,
    pub conference_type: ConferenceType,
    pub date: NaiveDate,
    pub duration_minutes: Option<i32>,
    pub registrants: Option<i32>,
    /// Derived from review ratings; `None` until the first review arrives
    pub score: Option<f64>,
    /// Identifier in the keynote service (not a local foreign key)
    pub keynote_id: Option<i64>,
}

/// Conference fields supplied on creation; the id and score are store-owned.
#[derive(Debug, Clone, PartialEq)]
pub struct NewConference {
    pub title: String,
    pub conference_type: ConferenceType,
    pub date: NaiveDate,
    pub duration_minutes: Option<i32>,
    pub registrants: Option<i32>,
    pub keynote_id: Option<i64>,
}

/// Partial conference update. `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConferencePatch {
    pub title: Option<String>,
    pub conference_type: Option<ConferenceType>,
    pub date: Option<NaiveDate>,
    pub duration_minutes: Option<i32>,
    pub registrants: Option<i32>,
    pub keynote_id: Option<i64>,
}

/// Filter for conference search. Every supplied criterion must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConferenceSearch {
    pub title_contains: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

fn validate_fields(
    title: &str,
    duration_minutes: Option<i32>,
    registrants: Option<i32>,
) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::validation("Title is required"));
    }
    if duration_minutes.is_some_and(|d| d < 0) {
        return Err(DomainError::validation("Duration must not be negative"));
    }
    if registrants.is_some_and(|r| r < 0) {
        return Err(DomainError::validation(
            "Registrant count must not be negative",
        ));
    }
    Ok(())
}

impl NewConference {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_fields(&self.title, self.duration_minutes, self.registrants)
    }

    /// Materialize with a store-assigned id and no score
    pub fn into_conference(self, id: i64) -> Conference {
        Conference {
            id,
            title: self.title,
            conference_type: self.conference_type,
            date: self.date,
            duration_minutes: self.duration_minutes,
            registrants: self.registrants,
            score: None,
            keynote_id: self.keynote_id,
        }
    }
}

impl Conference {
    /// Apply a partial update, validating the merged result.
    ///
    /// The score is never touched here: it belongs to review recomputation.
    pub fn apply(self, patch: ConferencePatch) -> Result<Self, DomainError> {
        let updated = Self {
            id: self.id,
            title: patch.title.unwrap_or(self.title),
            conference_type: patch.conference_type.unwrap_or(self.conference_type),
            date: patch.date.unwrap_or(self.date),
            duration_minutes: patch.duration_minutes.or(self.duration_minutes),
            registrants: patch.registrants.or(self.registrants),
            score: self.score,
            keynote_id: patch.keynote_id.or(self.keynote_id),
        };
        validate_fields(
            &updated.title,
            updated.duration_minutes,
            updated.registrants,
        )?;
        Ok(updated)
    }
}

impl ConferenceSearch {
    pub fn validate(&self) -> Result<(), DomainError> {
        match (self.from, self.to) {
            (Some(from), Some(to)) if from > to => Err(DomainError::validation(
                "Search range start must not be after its end",
            )),
            _ => Ok(()),
        }
    }

    pub fn matches(&self, conference: &Conference) -> bool {
        let title_ok = self.title_contains.as_ref().map_or(true, |needle| {
            conference
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let from_ok = self.from.map_or(true, |from| conference.date >= from);
        let to_ok = self.to.map_or(true, |to| conference.date <= to);
        title_ok && from_ok && to_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Conference {
        NewConference {
            title: "Spring Boot Microservices".to_string(),
            conference_type: ConferenceType::Academic,
            date: date(2026, 3, 15),
            duration_minutes: Some(120),
            registrants: Some(150),
            keynote_id: Some(1),
        }
        .into_conference(7)
    }

    #[test]
    fn test_new_conference_starts_without_score() {
        let conference = sample();
        assert_eq!(conference.id, 7);
        assert_eq!(conference.score, None);
    }

    #[test]
    fn test_blank_title_rejected() {
        let draft = NewConference {
            title: "   ".to_string(),
            conference_type: ConferenceType::Commercial,
            date: date(2026, 1, 1),
            duration_minutes: None,
            registrants: None,
            keynote_id: None,
        };
        assert!(matches!(draft.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_patch_only_overwrites_supplied_fields() {
        let mut conference = sample();
        conference.score = Some(4.5);

        let updated = conference
            .clone()
            .apply(ConferencePatch {
                registrants: Some(175),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.registrants, Some(175));
        assert_eq!(updated.title, conference.title);
        assert_eq!(updated.duration_minutes, Some(120));
        assert_eq!(updated.keynote_id, Some(1));
        assert_eq!(updated.score, Some(4.5));
    }

    #[test]
    fn test_patch_negative_duration_rejected() {
        let result = sample().apply(ConferencePatch {
            duration_minutes: Some(-10),
            ..Default::default()
        });
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_search_matches_title_and_range() {
        let conference = sample();
        let search = ConferenceSearch {
            title_contains: Some("boot".to_string()),
            from: Some(date(2026, 3, 1)),
            to: Some(date(2026, 3, 31)),
        };
        assert!(search.matches(&conference));

        let later = ConferenceSearch {
            from: Some(date(2026, 4, 1)),
            ..Default::default()
        };
        assert!(!later.matches(&conference));
    }

    #[test]
    fn test_search_inverted_range_rejected() {
        let search = ConferenceSearch {
            title_contains: None,
            from: Some(date(2026, 5, 1)),
            to: Some(date(2026, 4, 1)),
        };
        assert!(search.validate().is_err());
    }
}

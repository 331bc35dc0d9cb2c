//! In-memory fakes of the conference ports for application tests

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use confhub::{
    Conference, ConferenceRepository, ConferenceSearch, ConferenceType, DomainError, Keynote,
    KeynoteClient, NewConference, NewReview, Review, ReviewRepository, ReviewUnitOfWork,
};

#[derive(Debug, Clone, Default)]
struct StoreState {
    conferences: BTreeMap<i64, Conference>,
    reviews: BTreeMap<i64, Review>,
    last_id: i64,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

/// Conferences and reviews held in memory. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<StoreState>>,
    fail_score_updates: Arc<AtomicBool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap()
    }

    pub fn score_of(&self, conference_id: i64) -> Option<f64> {
        self.lock()
            .conferences
            .get(&conference_id)
            .and_then(|c| c.score)
    }

    pub fn review_count(&self) -> usize {
        self.lock().reviews.len()
    }

    /// Make every subsequent score write fail
    pub fn fail_score_updates(&self, fail: bool) {
        self.fail_score_updates.store(fail, Ordering::SeqCst);
    }

    fn filtered(&self, keep: impl Fn(&Conference) -> bool) -> Vec<Conference> {
        self.lock()
            .conferences
            .values()
            .filter(|c| keep(c))
            .cloned()
            .collect()
    }
}

pub fn conference_draft(title: &str) -> NewConference {
    NewConference {
        title: title.to_string(),
        conference_type: ConferenceType::Academic,
        date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        duration_minutes: Some(120),
        registrants: Some(150),
        keynote_id: None,
    }
}

#[async_trait]
impl ConferenceRepository for InMemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Conference>, DomainError> {
        Ok(self.lock().conferences.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Conference>, DomainError> {
        Ok(self.filtered(|_| true))
    }

    async fn find_by_type(
        &self,
        conference_type: ConferenceType,
    ) -> Result<Vec<Conference>, DomainError> {
        Ok(self.filtered(|c| c.conference_type == conference_type))
    }

    async fn find_by_keynote(&self, keynote_id: i64) -> Result<Vec<Conference>, DomainError> {
        Ok(self.filtered(|c| c.keynote_id == Some(keynote_id)))
    }

    async fn search(&self, search: &ConferenceSearch) -> Result<Vec<Conference>, DomainError> {
        Ok(self.filtered(|c| search.matches(c)))
    }

    async fn insert(&self, conference: &NewConference) -> Result<Conference, DomainError> {
        let mut state = self.lock();
        let id = state.next_id();
        let created = conference.clone().into_conference(id);
        state.conferences.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, conference: &Conference) -> Result<Conference, DomainError> {
        let mut state = self.lock();
        let stored = state
            .conferences
            .get_mut(&conference.id)
            .ok_or_else(|| DomainError::not_found("Conference", conference.id))?;
        let score = stored.score;
        *stored = Conference {
            score,
            ..conference.clone()
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.lock();
        let removed = state.conferences.remove(&id).is_some();
        state.reviews.retain(|_, r| r.conference_id != id);
        Ok(removed)
    }
}

#[async_trait]
impl ReviewRepository for InMemoryStore {
    type UnitOfWork = InMemoryUnitOfWork;

    async fn begin(&self) -> Result<InMemoryUnitOfWork, DomainError> {
        Ok(InMemoryUnitOfWork {
            shared: Arc::clone(&self.state),
            working: self.lock().clone(),
            fail_score_updates: self.fail_score_updates.load(Ordering::SeqCst),
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Review>, DomainError> {
        Ok(self.lock().reviews.get(&id).cloned())
    }

    async fn find_by_conference(&self, conference_id: i64) -> Result<Vec<Review>, DomainError> {
        let mut reviews: Vec<Review> = self
            .lock()
            .reviews
            .values()
            .filter(|r| r.conference_id == conference_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(reviews)
    }
}

/// Works on a private copy; `commit` publishes it, dropping discards it
pub struct InMemoryUnitOfWork {
    shared: Arc<Mutex<StoreState>>,
    working: StoreState,
    fail_score_updates: bool,
}

#[async_trait]
impl ReviewUnitOfWork for InMemoryUnitOfWork {
    async fn conference_exists(&mut self, conference_id: i64) -> Result<bool, DomainError> {
        Ok(self.working.conferences.contains_key(&conference_id))
    }

    async fn find_review(&mut self, id: i64) -> Result<Option<Review>, DomainError> {
        Ok(self.working.reviews.get(&id).cloned())
    }

    async fn insert_review(&mut self, review: &NewReview) -> Result<Review, DomainError> {
        let id = self.working.next_id();
        let created = review.clone().into_review(id);
        self.working.reviews.insert(id, created.clone());
        Ok(created)
    }

    async fn update_review(&mut self, review: &Review) -> Result<Review, DomainError> {
        let stored = self
            .working
            .reviews
            .get_mut(&review.id)
            .ok_or_else(|| DomainError::not_found("Review", review.id))?;
        *stored = review.clone();
        Ok(review.clone())
    }

    async fn delete_review(&mut self, id: i64) -> Result<bool, DomainError> {
        Ok(self.working.reviews.remove(&id).is_some())
    }

    async fn ratings_for(&mut self, conference_id: i64) -> Result<Vec<i32>, DomainError> {
        Ok(self
            .working
            .reviews
            .values()
            .filter(|r| r.conference_id == conference_id)
            .map(|r| r.rating.value())
            .collect())
    }

    async fn update_score(
        &mut self,
        conference_id: i64,
        score: f64,
    ) -> Result<bool, DomainError> {
        if self.fail_score_updates {
            return Err(DomainError::Repository("score write failed".to_string()));
        }
        match self.working.conferences.get_mut(&conference_id) {
            Some(conference) => {
                conference.score = Some(score);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn commit(self) -> Result<(), DomainError> {
        *self.shared.lock().unwrap() = self.working;
        Ok(())
    }
}

/// How the fake keynote service answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeynoteBehavior {
    Found,
    Missing,
    Down,
}

/// Scripted keynote client that counts the calls reaching it
pub struct FakeKeynoteClient {
    behavior: Mutex<KeynoteBehavior>,
    calls: AtomicUsize,
}

impl FakeKeynoteClient {
    pub fn new(behavior: KeynoteBehavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, behavior: KeynoteBehavior) {
        *self.behavior.lock().unwrap() = behavior;
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeynoteClient for FakeKeynoteClient {
    async fn fetch_keynote(&self, id: i64) -> Result<Option<Keynote>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = *self.behavior.lock().unwrap();
        match behavior {
            KeynoteBehavior::Found => Ok(Some(Keynote {
                id,
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: format!("speaker{}@example.org", id),
                role: Some("Researcher".to_string()),
            })),
            KeynoteBehavior::Missing => Ok(None),
            KeynoteBehavior::Down => Err(DomainError::DownstreamUnavailable(
                "connection refused".to_string(),
            )),
        }
    }
}

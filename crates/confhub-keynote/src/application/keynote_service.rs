//! Keynote Application Service (Use Case)

use std::sync::Arc;

use confhub::{DomainError, Keynote, KeynoteDraft, KeynoteRepository};

/// Application service for Keynote operations
pub struct KeynoteService<R: KeynoteRepository> {
    repo: Arc<R>,
}

impl<R: KeynoteRepository> KeynoteService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Keynotes
    pub async fn list_all(&self) -> Result<Vec<Keynote>, DomainError> {
        self.repo.find_all().await
    }

    /// Get Keynote by ID
    pub async fn get(&self, id: i64) -> Result<Keynote, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Keynote", id))
    }

    /// Create a new Keynote. The email must not be in use.
    pub async fn create(&self, draft: KeynoteDraft) -> Result<Keynote, DomainError> {
        let draft = draft.normalized()?;

        if self.repo.find_by_email(&draft.email).await?.is_some() {
            return Err(DomainError::Conflict(format!(
                "Email already in use: {}",
                draft.email
            )));
        }

        let saved = self.repo.insert(&draft).await?;

        tracing::info!("Keynote created with ID: {}", saved.id);

        Ok(saved)
    }

    /// Replace every field of a Keynote. The email may stay the same but
    /// must not belong to another keynote.
    pub async fn update(&self, id: i64, draft: KeynoteDraft) -> Result<Keynote, DomainError> {
        let draft = draft.normalized()?;

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Keynote", id));
        }

        if let Some(owner) = self.repo.find_by_email(&draft.email).await? {
            if owner.id != id {
                return Err(DomainError::Conflict(format!(
                    "Email already in use: {}",
                    draft.email
                )));
            }
        }

        let saved = self.repo.update(&draft.into_keynote(id)).await?;

        tracing::info!("Keynote updated with ID: {}", id);

        Ok(saved)
    }

    /// Delete a Keynote
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.repo.delete(id).await? {
            return Err(DomainError::not_found("Keynote", id));
        }

        tracing::info!("Keynote deleted with ID: {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryKeynotes {
        rows: Mutex<BTreeMap<i64, Keynote>>,
    }

    impl InMemoryKeynotes {
        fn count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl KeynoteRepository for InMemoryKeynotes {
        async fn find_by_id(&self, id: i64) -> Result<Option<Keynote>, DomainError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Keynote>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .find(|k| k.email == email)
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Keynote>, DomainError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn insert(&self, keynote: &KeynoteDraft) -> Result<Keynote, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.keys().next_back().copied().unwrap_or(0) + 1;
            let created = keynote.clone().into_keynote(id);
            rows.insert(id, created.clone());
            Ok(created)
        }

        async fn update(&self, keynote: &Keynote) -> Result<Keynote, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            let stored = rows
                .get_mut(&keynote.id)
                .ok_or_else(|| DomainError::not_found("Keynote", keynote.id))?;
            *stored = keynote.clone();
            Ok(keynote.clone())
        }

        async fn delete(&self, id: i64) -> Result<bool, DomainError> {
            Ok(self.rows.lock().unwrap().remove(&id).is_some())
        }
    }

    fn draft(first: &str, last: &str, email: &str) -> KeynoteDraft {
        KeynoteDraft {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            role: Some("Professor".to_string()),
        }
    }

    fn setup() -> (Arc<InMemoryKeynotes>, KeynoteService<InMemoryKeynotes>) {
        let repo = Arc::new(InMemoryKeynotes::default());
        (Arc::clone(&repo), KeynoteService::new(repo))
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let (_, service) = setup();
        let created = service
            .create(draft("Grace", "Hopper", "Grace@Example.org"))
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.email, "grace@example.org");
        assert_eq!(fetched.role.as_deref(), Some("Professor"));
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_without_insert() {
        let (repo, service) = setup();
        service
            .create(draft("Grace", "Hopper", "grace@example.org"))
            .await
            .unwrap();

        let err = service
            .create(draft("Other", "Person", " GRACE@example.org"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_without_insert() {
        let (repo, service) = setup();
        let err = service
            .create(draft("", "Hopper", "grace@example.org"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_update_keeps_own_email_but_not_anothers() {
        let (_, service) = setup();
        let grace = service
            .create(draft("Grace", "Hopper", "grace@example.org"))
            .await
            .unwrap();
        service
            .create(draft("Alan", "Turing", "alan@example.org"))
            .await
            .unwrap();

        let renamed = service
            .update(grace.id, draft("Grace B.", "Hopper", "grace@example.org"))
            .await
            .unwrap();
        assert_eq!(renamed.first_name, "Grace B.");

        let err = service
            .update(grace.id, draft("Grace", "Hopper", "alan@example.org"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(service.get(grace.id).await.unwrap().email, "grace@example.org");
    }

    #[tokio::test]
    async fn test_missing_keynote_is_not_found() {
        let (_, service) = setup();

        assert!(matches!(
            service.get(5).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.update(5, draft("Ada", "Lovelace", "ada@example.org")).await,
            Err(DomainError::NotFound { .. })
        ));
        assert!(matches!(
            service.delete(5).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_keynote() {
        let (repo, service) = setup();
        let created = service
            .create(draft("Ada", "Lovelace", "ada@example.org"))
            .await
            .unwrap();

        service.delete(created.id).await.unwrap();

        assert_eq!(repo.count(), 0);
        assert!(service.list_all().await.unwrap().is_empty());
    }
}

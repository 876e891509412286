use chrono::{DateTime, Utc};
use faro_model::result::AssessmentResult;
use faro_model::session::Status;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Error)]
pub(crate) enum SessionError {
    #[error("session wasn't found")]
    NotFound,
    #[error("assessment session isn't running")]
    NotRunning,
}

/// One participant's run through the questionnaire. Answers are keyed by
/// question id in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct SessionEntry {
    pub(crate) id: Uuid,
    pub(crate) status: Status,
    pub(crate) answers: IndexMap<String, usize>,
    pub(crate) completed: Option<DateTime<Utc>>,
    pub(crate) result: Option<AssessmentResult>,
}

impl SessionEntry {
    fn new(id: Uuid) -> Self {
        Self {
            id,
            status: Status::Running,
            answers: IndexMap::new(),
            completed: None,
            result: None,
        }
    }
}

/// In-memory session state, shared across handlers. Sessions live for the
/// lifetime of the process.
#[derive(Debug, Clone, Default)]
pub(crate) struct SessionStore(Arc<RwLock<HashMap<Uuid, SessionEntry>>>);

impl SessionStore {
    pub(crate) async fn start(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.0.write().await.insert(id, SessionEntry::new(id));
        id
    }

    pub(crate) async fn load(&self, session: Uuid) -> Result<SessionEntry, SessionError> {
        self.0.read().await.get(&session).cloned().ok_or(SessionError::NotFound)
    }

    /// Loads a session and checks it has not been submitted yet.
    pub(crate) async fn running(&self, session: Uuid) -> Result<SessionEntry, SessionError> {
        let entry = self.load(session).await?;
        if entry.status != Status::Running {
            return Err(SessionError::NotRunning);
        }
        Ok(entry)
    }

    pub(crate) async fn set_answer(&self, session: Uuid, question: String, choice: usize) -> Result<(), SessionError> {
        let mut store = self.0.write().await;
        let entry = store.get_mut(&session).ok_or(SessionError::NotFound)?;
        if entry.status != Status::Running {
            return Err(SessionError::NotRunning);
        }
        entry.answers.insert(question, choice);
        Ok(())
    }

    pub(crate) async fn finish(&self, session: Uuid, result: AssessmentResult) -> Result<(), SessionError> {
        let mut store = self.0.write().await;
        let entry = store.get_mut(&session).ok_or(SessionError::NotFound)?;
        if entry.status != Status::Running {
            return Err(SessionError::NotRunning);
        }
        entry.status = Status::Finished;
        entry.completed = Some(Utc::now());
        entry.result = Some(result);
        Ok(())
    }

    pub(crate) async fn len(&self) -> usize {
        self.0.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faro_config::assessment::level::Level;
    use test_log::test;

    fn result() -> AssessmentResult {
        AssessmentResult {
            total: 12,
            level: Level::Initial,
            level_label: "Initial".to_owned(),
            answers: Vec::new(),
            areas: Vec::new(),
        }
    }

    #[test(tokio::test)]
    async fn test_session_lifecycle() {
        let store = SessionStore::default();
        let id = store.start().await;

        let entry = store.load(id).await.unwrap();
        assert_eq!(entry.status, Status::Running);
        assert!(entry.answers.is_empty());

        store.set_answer(id, "a".to_owned(), 1).await.unwrap();
        store.set_answer(id, "a".to_owned(), 2).await.unwrap();
        let entry = store.load(id).await.unwrap();
        assert_eq!(entry.answers.get("a"), Some(&2));

        store.finish(id, result()).await.unwrap();
        let entry = store.load(id).await.unwrap();
        assert_eq!(entry.status, Status::Finished);
        assert!(entry.completed.is_some());
        assert!(entry.result.is_some());
    }

    #[test(tokio::test)]
    async fn test_finished_session_is_frozen() {
        let store = SessionStore::default();
        let id = store.start().await;
        store.finish(id, result()).await.unwrap();

        let update = store.set_answer(id, "a".to_owned(), 0).await;
        assert!(matches!(update, Err(SessionError::NotRunning)));
        let finish = store.finish(id, result()).await;
        assert!(matches!(finish, Err(SessionError::NotRunning)));
    }

    #[test(tokio::test)]
    async fn test_unknown_session() {
        let store = SessionStore::default();
        let load = store.load(Uuid::new_v4()).await;
        assert!(matches!(load, Err(SessionError::NotFound)));
    }
}

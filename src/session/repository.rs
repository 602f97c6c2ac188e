use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::errors::SessionError;
use super::models::SessionModel;

/// Trait for session document storage. The hosting application brings
/// its own durable implementation; the engine only requires that each
/// write stores the full document, derived views included.
#[async_trait]
pub trait SessionRepository {
    async fn create_session(&self, session: &SessionModel) -> Result<(), SessionError>;
    async fn get_session(&self, session_id: &str) -> Result<Option<SessionModel>, SessionError>;
    async fn list_sessions(&self) -> Result<Vec<SessionModel>, SessionError>;
    async fn update_session(&self, session: &SessionModel) -> Result<(), SessionError>;
    async fn delete_session(&self, session_id: &str) -> Result<(), SessionError>;
}

/// In-memory implementation of SessionRepository for development and
/// testing.
pub struct InMemorySessionRepository {
    sessions: Mutex<HashMap<String, SessionModel>>,
}

impl Default for InMemorySessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySessionRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    #[instrument(skip(self, session))]
    async fn create_session(&self, session: &SessionModel) -> Result<(), SessionError> {
        debug!(session_id = %session.id, name = %session.name, "Creating session in memory");

        let mut sessions = self.sessions.lock().unwrap();
        if sessions.contains_key(&session.id) {
            warn!(session_id = %session.id, "Session already exists in memory");
            return Err(SessionError::Repository(
                "Session already exists".to_string(),
            ));
        }
        sessions.insert(session.id.clone(), session.clone());

        debug!(session_id = %session.id, "Session created successfully in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_session(&self, session_id: &str) -> Result<Option<SessionModel>, SessionError> {
        debug!(session_id = %session_id, "Fetching session from memory");

        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(session_id).cloned();

        match &session {
            Some(s) => {
                debug!(session_id = %session_id, round_count = s.rounds.len(), "Session found in memory")
            }
            None => debug!(session_id = %session_id, "Session not found in memory"),
        }

        Ok(session)
    }

    #[instrument(skip(self))]
    async fn list_sessions(&self) -> Result<Vec<SessionModel>, SessionError> {
        debug!("Listing all sessions in memory");

        let sessions = self.sessions.lock().unwrap();
        let session_list = sessions.values().cloned().collect();

        Ok(session_list)
    }

    #[instrument(skip(self, session))]
    async fn update_session(&self, session: &SessionModel) -> Result<(), SessionError> {
        debug!(session_id = %session.id, round_count = session.rounds.len(), "Updating session in memory");

        let mut sessions = self.sessions.lock().unwrap();
        if !sessions.contains_key(&session.id) {
            warn!(session_id = %session.id, "Session does not exist in memory");
            return Err(SessionError::SessionNotFound(session.id.clone()));
        }
        sessions.insert(session.id.clone(), session.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_session(&self, session_id: &str) -> Result<(), SessionError> {
        debug!(session_id = %session_id, "Deleting session from memory");

        let mut sessions = self.sessions.lock().unwrap();
        if sessions.remove(session_id).is_none() {
            return Err(SessionError::SessionNotFound(session_id.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SEAT_COUNT;

    fn sample_session(name: &str) -> SessionModel {
        SessionModel::new(
            name.to_string(),
            ["A", "B", "C", "D"].map(String::from),
        )
    }

    #[tokio::test]
    async fn creates_and_fetches_a_session() {
        let repo = InMemorySessionRepository::new();
        let session = sample_session("2026-08-04");

        repo.create_session(&session).await.unwrap();

        let retrieved = repo.get_session(&session.id).await.unwrap();
        assert!(retrieved.is_some());
        let retrieved = retrieved.unwrap();
        assert_eq!(retrieved.id, session.id);
        assert_eq!(retrieved.name, "2026-08-04");
        assert_eq!(retrieved.players.len(), SEAT_COUNT);
    }

    #[tokio::test]
    async fn get_nonexistent_session_returns_none() {
        let repo = InMemorySessionRepository::new();

        let result = repo.get_session("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn rejects_duplicate_create() {
        let repo = InMemorySessionRepository::new();
        let session = sample_session("dup");

        repo.create_session(&session).await.unwrap();

        let result = repo.create_session(&session).await;
        assert!(matches!(result, Err(SessionError::Repository(_))));
    }

    #[tokio::test]
    async fn update_replaces_the_stored_document() {
        let repo = InMemorySessionRepository::new();
        let mut session = sample_session("edit-me");
        repo.create_session(&session).await.unwrap();

        session.players[0] = "Akiko".to_string();
        session.recompute_derived();
        repo.update_session(&session).await.unwrap();

        let stored = repo.get_session(&session.id).await.unwrap().unwrap();
        assert_eq!(stored.players[0], "Akiko");
        assert!(stored.final_stats.contains_key("Akiko"));
    }

    #[tokio::test]
    async fn update_of_unknown_session_fails() {
        let repo = InMemorySessionRepository::new();
        let session = sample_session("never-stored");

        let result = repo.update_session(&session).await;
        assert!(matches!(result, Err(SessionError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_the_session() {
        let repo = InMemorySessionRepository::new();
        let session = sample_session("short-lived");
        repo.create_session(&session).await.unwrap();

        repo.delete_session(&session.id).await.unwrap();

        assert!(repo.get_session(&session.id).await.unwrap().is_none());
        let result = repo.delete_session(&session.id).await;
        assert!(matches!(result, Err(SessionError::SessionNotFound(_))));
    }

    #[tokio::test]
    async fn lists_all_stored_sessions() {
        let repo = InMemorySessionRepository::new();
        let first = sample_session("2026-01");
        let second = sample_session("2026-02");
        repo.create_session(&first).await.unwrap();
        repo.create_session(&second).await.unwrap();

        let sessions = repo.list_sessions().await.unwrap();
        assert_eq!(sessions.len(), 2);

        let ids: std::collections::HashSet<String> =
            sessions.iter().map(|s| s.id.clone()).collect();
        assert!(ids.contains(&first.id));
        assert!(ids.contains(&second.id));
    }
}

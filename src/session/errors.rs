use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Round not found in session {session_id}: {round_id}")]
    RoundNotFound { session_id: String, round_id: Uuid },

    #[error("Seat index out of range: {0}")]
    InvalidSeat(usize),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::{
    errors::SessionError,
    models::{Round, SessionModel},
    repository::SessionRepository,
};
use crate::scoring::{RankPointOption, RawRoundInput, SEAT_COUNT};

/// Permitted drift between the table total and the expected total when a
/// round is submitted, in raw points.
const TABLE_TOTAL_TOLERANCE: i32 = 1000;

/// Service for handling session business logic. Every mutation loads the
/// session document, applies the change, recomputes both derived views
/// in full, and persists the result.
pub struct SessionService {
    repository: Arc<dyn SessionRepository + Send + Sync>,
}

impl SessionService {
    pub fn new(repository: Arc<dyn SessionRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Creates a new empty session for four seats.
    #[instrument(skip(self))]
    pub async fn create_session(
        &self,
        name: String,
        players: [String; SEAT_COUNT],
    ) -> Result<SessionModel, SessionError> {
        let session = SessionModel::new(name, players);
        debug!(session_id = %session.id, "Generated session ID");

        self.repository.create_session(&session).await?;

        info!(
            session_id = %session.id,
            name = %session.name,
            "Session created successfully"
        );

        Ok(session)
    }

    #[instrument(skip(self))]
    pub async fn get_session(&self, session_id: &str) -> Result<SessionModel, SessionError> {
        self.load(session_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_sessions(&self) -> Result<Vec<SessionModel>, SessionError> {
        let sessions = self.repository.list_sessions().await?;
        info!(session_count = sessions.len(), "Sessions retrieved successfully");
        Ok(sessions)
    }

    #[instrument(skip(self))]
    pub async fn delete_session(&self, session_id: &str) -> Result<(), SessionError> {
        self.repository.delete_session(session_id).await?;
        info!(session_id = %session_id, "Session deleted");
        Ok(())
    }

    /// Validates and settles a submitted round, then appends it to the
    /// session history.
    #[instrument(skip(self))]
    pub async fn add_round(
        &self,
        session_id: &str,
        inputs: [Option<i32>; SEAT_COUNT],
    ) -> Result<SessionModel, SessionError> {
        let mut session = self.load(session_id).await?;

        let inputs = validate_round_input(&inputs, session.settings.initial_points)?;
        let round = Round::settle(inputs, &session.settings.rank_points.table());
        debug!(
            session_id = %session_id,
            round_id = %round.id,
            finals = ?round.final_scores,
            "Round settled"
        );

        session.rounds.push(round);
        self.persist(session).await
    }

    /// Overwrites one seat's settled score in an existing round. The new
    /// value is stored as entered, even when it no longer sums to zero
    /// with the rest of the round.
    #[instrument(skip(self))]
    pub async fn edit_final_score(
        &self,
        session_id: &str,
        round_id: Uuid,
        seat: usize,
        value: i32,
    ) -> Result<SessionModel, SessionError> {
        if seat >= SEAT_COUNT {
            return Err(SessionError::InvalidSeat(seat));
        }

        let mut session = self.load(session_id).await?;
        let round = session
            .round_mut(round_id)
            .ok_or(SessionError::RoundNotFound {
                session_id: session_id.to_string(),
                round_id,
            })?;
        round.final_scores[seat] = value;

        debug!(
            session_id = %session_id,
            round_id = %round_id,
            seat,
            value,
            "Final score overwritten"
        );
        self.persist(session).await
    }

    /// Removes a round from the history. Recomputation restores exactly
    /// the standings that held before the round was added.
    #[instrument(skip(self))]
    pub async fn delete_round(
        &self,
        session_id: &str,
        round_id: Uuid,
    ) -> Result<SessionModel, SessionError> {
        let mut session = self.load(session_id).await?;

        let before = session.rounds.len();
        session.rounds.retain(|round| round.id != round_id);
        if session.rounds.len() == before {
            return Err(SessionError::RoundNotFound {
                session_id: session_id.to_string(),
                round_id,
            });
        }

        info!(session_id = %session_id, round_id = %round_id, "Round deleted");
        self.persist(session).await
    }

    /// Sets or clears one seat's chip count.
    #[instrument(skip(self))]
    pub async fn set_chip_count(
        &self,
        session_id: &str,
        seat: usize,
        count: Option<i32>,
    ) -> Result<SessionModel, SessionError> {
        if seat >= SEAT_COUNT {
            return Err(SessionError::InvalidSeat(seat));
        }

        let mut session = self.load(session_id).await?;
        session.chip_counts[seat] = count;
        self.persist(session).await
    }

    #[instrument(skip(self))]
    pub async fn set_chip_distribution(
        &self,
        session_id: &str,
        distribution: i32,
    ) -> Result<SessionModel, SessionError> {
        let mut session = self.load(session_id).await?;
        session.settings.chip_distribution = distribution;
        self.persist(session).await
    }

    /// Renames a seat. Standings and placements are derived from current
    /// names, so the seat's whole history moves to the new name.
    #[instrument(skip(self))]
    pub async fn rename_player(
        &self,
        session_id: &str,
        seat: usize,
        name: String,
    ) -> Result<SessionModel, SessionError> {
        if seat >= SEAT_COUNT {
            return Err(SessionError::InvalidSeat(seat));
        }

        let mut session = self.load(session_id).await?;
        info!(
            session_id = %session_id,
            seat,
            old_name = %session.players[seat],
            new_name = %name,
            "Renaming seat"
        );
        session.players[seat] = name;
        self.persist(session).await
    }

    /// Switches the rank-point spread. Only future settlements are
    /// affected; already-settled rounds keep their finals.
    #[instrument(skip(self))]
    pub async fn set_rank_points(
        &self,
        session_id: &str,
        option: RankPointOption,
    ) -> Result<SessionModel, SessionError> {
        let mut session = self.load(session_id).await?;
        session.settings.rank_points = option;
        self.persist(session).await
    }

    async fn load(&self, session_id: &str) -> Result<SessionModel, SessionError> {
        self.repository
            .get_session(session_id)
            .await?
            .ok_or_else(|| SessionError::SessionNotFound(session_id.to_string()))
    }

    async fn persist(&self, mut session: SessionModel) -> Result<SessionModel, SessionError> {
        session.recompute_derived();
        self.repository.update_session(&session).await?;
        Ok(session)
    }
}

/// Rejects incomplete submissions and wildly wrong table totals before
/// settlement sees them.
fn validate_round_input(
    inputs: &[Option<i32>; SEAT_COUNT],
    initial_points: i32,
) -> Result<RawRoundInput, SessionError> {
    let mut scores = [0i32; SEAT_COUNT];
    for (seat, value) in inputs.iter().enumerate() {
        scores[seat] = value.ok_or_else(|| {
            SessionError::Validation("every seat needs a score before settling".to_string())
        })?;
    }

    let expected = initial_points * SEAT_COUNT as i32;
    let total: i32 = scores.iter().sum();
    if (total - expected).abs() > TABLE_TOTAL_TOLERANCE {
        return Err(SessionError::Validation(format!(
            "table total is {total}, expected within {TABLE_TOTAL_TOLERANCE} of {expected}"
        )));
    }

    Ok(scores)
}

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{
    recompute_rank_histogram, recompute_session_stats, settle_round, ChipAdjustment,
    PlacementCounts, PlayerStats, RankPointOption, RankPointTable, RawRoundInput, INITIAL_POINTS,
    SEAT_COUNT,
};

/// One settled hanchan: the raw table points and the finals derived from
/// them. A round always carries both; a seat's final may later drift
/// from the settled value through a manual edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub input_scores: RawRoundInput,
    pub final_scores: [i32; SEAT_COUNT],
}

impl Round {
    /// Settles raw table points into a new round.
    pub fn settle(inputs: RawRoundInput, rank_points: &RankPointTable) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            input_scores: inputs,
            final_scores: settle_round(&inputs, rank_points),
        }
    }
}

/// Per-session scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    pub initial_points: i32,
    pub rank_points: RankPointOption,
    pub chip_distribution: i32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            initial_points: INITIAL_POINTS,
            rank_points: RankPointOption::default(),
            chip_distribution: 0,
        }
    }
}

/// A scoring session: four named seats, the editable round history, the
/// chip row, and the derived standings cached from the last
/// recomputation. The hosting application persists this document as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionModel {
    pub id: String,
    pub name: String,
    pub players: [String; SEAT_COUNT],
    pub settings: SessionSettings,
    pub rounds: Vec<Round>,
    /// Per-seat chip counts; an absent entry means the neutral 20.
    pub chip_counts: [Option<i32>; SEAT_COUNT],
    pub final_stats: HashMap<String, PlayerStats>,
    pub ranking_counts: HashMap<String, PlacementCounts>,
    pub created_at: DateTime<Utc>,
}

impl SessionModel {
    /// Creates an empty session with freshly computed (all-zero) views.
    pub fn new(name: String, players: [String; SEAT_COUNT]) -> Self {
        let mut session = Self {
            id: Uuid::new_v4().to_string(),
            name,
            players,
            settings: SessionSettings::default(),
            rounds: Vec::new(),
            chip_counts: [None; SEAT_COUNT],
            final_stats: HashMap::new(),
            ranking_counts: HashMap::new(),
            created_at: Utc::now(),
        };
        session.recompute_derived();
        session
    }

    /// The chip row and distribution as the aggregator consumes them.
    pub fn chip_adjustment(&self) -> ChipAdjustment {
        ChipAdjustment {
            counts: self.chip_counts,
            distribution: self.settings.chip_distribution,
        }
    }

    pub fn round_mut(&mut self, round_id: Uuid) -> Option<&mut Round> {
        self.rounds.iter_mut().find(|round| round.id == round_id)
    }

    /// Rebuilds both derived views from scratch. Every mutation runs
    /// this before the session is persisted; the stored views are only
    /// a cache of the last computation.
    pub fn recompute_derived(&mut self) {
        let finals: Vec<[i32; SEAT_COUNT]> =
            self.rounds.iter().map(|round| round.final_scores).collect();
        self.final_stats =
            recompute_session_stats(&self.players, &finals, &self.chip_adjustment());
        self.ranking_counts = recompute_rank_histogram(&self.players, &finals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_players() -> [String; SEAT_COUNT] {
        ["A", "B", "C", "D"].map(String::from)
    }

    #[test]
    fn new_session_starts_with_zeroed_views() {
        let session = SessionModel::new("2026-08-04".to_string(), four_players());

        assert!(session.rounds.is_empty());
        assert_eq!(session.final_stats.len(), 4);
        assert_eq!(session.ranking_counts.len(), 4);
        assert_eq!(session.final_stats.get("A"), Some(&PlayerStats::default()));
        assert_eq!(session.settings.rank_points, RankPointOption::TenThirty);
    }

    #[test]
    fn settled_round_keeps_raw_and_final_scores() {
        let round = Round::settle(
            [40_000, 30_000, 20_000, 10_000],
            &RankPointOption::TenThirty.table(),
        );

        assert_eq!(round.input_scores, [40_000, 30_000, 20_000, 10_000]);
        assert_eq!(round.final_scores, [60, 10, -20, -50]);
    }

    #[test]
    fn recompute_reflects_round_history_and_chips() {
        let mut session = SessionModel::new("test".to_string(), four_players());
        session.rounds.push(Round::settle(
            [40_000, 30_000, 20_000, 10_000],
            &session.settings.rank_points.table(),
        ));
        session.settings.chip_distribution = 300;
        session.chip_counts[0] = Some(30);
        session.recompute_derived();

        let a = session.final_stats.get("A").unwrap();
        assert_eq!(a.final_result, 60);
        assert_eq!(a.chip_bonus, 30.0);
        assert_eq!(a.half_result, 90.0);
        assert_eq!(session.ranking_counts.get("A").unwrap().count(1), 1);
    }

    #[test]
    fn session_document_round_trips_through_json() {
        let mut session = SessionModel::new("2026-01-17".to_string(), four_players());
        session.rounds.push(Round::settle(
            [40_000, 30_000, 20_000, 10_000],
            &session.settings.rank_points.table(),
        ));
        session.recompute_derived();

        let json = serde_json::to_string(&session).unwrap();
        let restored: SessionModel = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.id, session.id);
        assert_eq!(restored.rounds[0].final_scores, [60, 10, -20, -50]);
        assert_eq!(restored.final_stats, session.final_stats);
        assert_eq!(restored.ranking_counts, session.ranking_counts);
    }
}

// Library crate for the hanchan scoring engine
// This file exposes the public API for integration tests

pub mod analysis;
pub mod scoring;
pub mod session;

// Re-export commonly used types for easier access in tests
pub use scoring::{
    recompute_rank_histogram, recompute_session_stats, round_to_thousands, settle_round,
    ChipAdjustment, PlacementCounts, PlayerStats, RankPointOption, RankPointTable, RawRoundInput,
    SEAT_COUNT,
};
pub use session::{
    InMemorySessionRepository, Round, SessionError, SessionModel, SessionRepository,
    SessionService, SessionSettings,
};

// Public API
pub use aggregate::{recompute_session_stats, ChipAdjustment, PlayerStats, NEUTRAL_CHIPS};
pub use histogram::{recompute_rank_histogram, PlacementCounts};
pub use rank_points::{RankPointOption, RankPointTable};
pub use rounder::round_to_thousands;
pub use settlement::{settle_round, RawRoundInput};

// Internal modules
mod aggregate;
mod histogram;
mod rank_points;
mod rounder;
mod settlement;

/// Number of seats at the table. Every per-seat array in this crate has
/// this length.
pub const SEAT_COUNT: usize = 4;

/// Points each seat starts a session with.
pub const INITIAL_POINTS: i32 = 25_000;

/// Baseline a non-winning seat's raw score is settled against.
pub const RETURN_POINTS: i32 = 30_000;

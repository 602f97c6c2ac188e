use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::SEAT_COUNT;

/// Chip count a seat is assumed to hold when no entry was made. A seat
/// at the neutral count earns a bonus of zero.
pub const NEUTRAL_CHIPS: i32 = 20;

/// The session-wide chip side bet: one chip count per seat (absent means
/// neutral) and the payout per chip step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChipAdjustment {
    pub counts: [Option<i32>; SEAT_COUNT],
    pub distribution: i32,
}

/// Cumulative standings for one player name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Sum of the player's settled scores over every round.
    pub final_result: i32,
    /// Session-wide chip bonus, applied once rather than per round.
    pub chip_bonus: f64,
    pub half_result: f64,
}

/// Recomputes cumulative standings from scratch over the full round
/// history. `rounds` holds each round's settled finals in seat order.
///
/// Standings are keyed by trimmed seat name; blank seats are left out
/// entirely, and two seats sharing a name merge into one entry. Each
/// seat's chip bonus overwrites its name's entry in seat order, so for
/// a shared name the later seat's chips win.
pub fn recompute_session_stats(
    players: &[String; SEAT_COUNT],
    rounds: &[[i32; SEAT_COUNT]],
    chips: &ChipAdjustment,
) -> HashMap<String, PlayerStats> {
    let mut stats: HashMap<String, PlayerStats> = HashMap::new();
    for name in players {
        let name = name.trim();
        if !name.is_empty() {
            stats.entry(name.to_string()).or_default();
        }
    }

    for finals in rounds {
        for (seat, name) in players.iter().enumerate() {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            if let Some(entry) = stats.get_mut(name) {
                entry.final_result += finals[seat];
            }
        }
    }

    for (seat, name) in players.iter().enumerate() {
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let chip_input = chips.counts[seat].unwrap_or(NEUTRAL_CHIPS);
        let bonus = f64::from((chip_input - NEUTRAL_CHIPS) * chips.distribution) / 100.0;
        if let Some(entry) = stats.get_mut(name) {
            entry.chip_bonus = bonus;
            entry.half_result = f64::from(entry.final_result) + bonus;
        }
    }

    stats
}

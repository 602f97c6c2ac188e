use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::SEAT_COUNT;

/// How many times a player placed 1st through 4th.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementCounts(pub [u32; SEAT_COUNT]);

impl PlacementCounts {
    /// Count for a 1-based placement.
    pub fn count(&self, placement: usize) -> u32 {
        self.0[placement - 1]
    }

    /// Total rounds this player has a recorded placement in.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

/// Recounts every player's placements over the full round history.
/// `rounds` holds each round's settled finals in seat order.
///
/// Placements are assigned against the current seat names, so renaming a
/// seat moves its entire placement history to the new name. A blank seat
/// is never counted but still takes up its sorted position.
pub fn recompute_rank_histogram(
    players: &[String; SEAT_COUNT],
    rounds: &[[i32; SEAT_COUNT]],
) -> HashMap<String, PlacementCounts> {
    let mut counts: HashMap<String, PlacementCounts> = HashMap::new();
    for name in players {
        let name = name.trim();
        if !name.is_empty() {
            counts.entry(name.to_string()).or_default();
        }
    }

    for finals in rounds {
        let mut placed: Vec<(usize, i32)> = finals.iter().copied().enumerate().collect();
        // Same ordering as settlement: stable descending, ties keep seat order.
        placed.sort_by(|a, b| b.1.cmp(&a.1));

        for (position, &(seat, _)) in placed.iter().enumerate() {
            let name = players[seat].trim();
            if name.is_empty() {
                continue;
            }
            counts.entry(name.to_string()).or_default().0[position] += 1;
        }
    }

    counts
}

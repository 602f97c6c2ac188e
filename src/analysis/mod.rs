//! Cross-session reporting: filters a set of stored sessions by year and
//! player, then totals results and placement rates from the cached
//! derived views.

use chrono::Datelike;
use serde::Serialize;

use crate::scoring::{PlacementCounts, SEAT_COUNT};
use crate::session::SessionModel;

#[derive(Debug, Clone, Default)]
pub struct AnalysisFilter {
    pub year: Option<i32>,
    pub player: Option<String>,
}

/// One session's contribution to the selected player's totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRow {
    pub session: String,
    pub final_result: i32,
    pub chip_bonus: f64,
    pub half_result: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisSummary {
    pub rows: Vec<SessionRow>,
    pub total_final: i32,
    pub total_chip: f64,
    pub total_half: f64,
    pub placements: PlacementCounts,
}

impl AnalysisSummary {
    /// Share of the selected player's placements that landed at the
    /// 1-based `placement`, as a fraction of their counted rounds.
    pub fn placement_rate(&self, placement: usize) -> f64 {
        let total = self.placements.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.placements.count(placement)) / f64::from(total)
    }
}

/// Every player name that appears in any session's standings, sorted.
pub fn player_names(sessions: &[SessionModel]) -> Vec<String> {
    let mut names: Vec<String> = sessions
        .iter()
        .flat_map(|session| session.final_stats.keys().cloned())
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Every year with at least one recorded session, sorted.
pub fn years(sessions: &[SessionModel]) -> Vec<i32> {
    let mut years: Vec<i32> = sessions
        .iter()
        .map(|session| session.created_at.year())
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

/// Summarizes the sessions that pass the filter. Rows and placements
/// carry values only when a player is selected; without one the summary
/// is a labeled skeleton, as in a report with no player picked.
pub fn summarize(sessions: &[SessionModel], filter: &AnalysisFilter) -> AnalysisSummary {
    let mut summary = AnalysisSummary::default();

    for session in sessions {
        if let Some(year) = filter.year {
            if session.created_at.year() != year {
                continue;
            }
        }
        let stats = match &filter.player {
            Some(player) => match session.final_stats.get(player) {
                Some(stats) => *stats,
                None => continue,
            },
            None => Default::default(),
        };

        summary.rows.push(SessionRow {
            session: session.name.clone(),
            final_result: stats.final_result,
            chip_bonus: stats.chip_bonus,
            half_result: stats.half_result,
        });
        summary.total_final += stats.final_result;
        summary.total_chip += stats.chip_bonus;
        summary.total_half += stats.half_result;

        if let Some(player) = &filter.player {
            if let Some(counts) = session.ranking_counts.get(player) {
                for bucket in 0..SEAT_COUNT {
                    summary.placements.0[bucket] += counts.0[bucket];
                }
            }
        }
    }

    summary
}

use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod code;
pub mod combine;
pub mod merge;
pub mod rank;
pub mod stats;
pub mod tally;

use crate::selection::{CombinedSelection, ParticipantSelections};

/// How many matches get extra coverage in the combined bong.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageBudget {
    /// Matches that end up with exactly two outcomes.
    pub half_covers: usize,
    /// Matches that end up with all three outcomes.
    pub full_covers: usize,
}

impl CoverageBudget {
    pub fn none() -> Self {
        Self {
            half_covers: 0,
            full_covers: 0,
        }
    }
}

/// The budget mode configured for a session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BongBudget {
    /// Explicit half/full-cover counts; the contentiousness ranking
    /// decides which matches get them.
    Covers(CoverageBudget),
    /// Legacy row cap: OR-merge, then trim back toward the cap.
    #[serde(rename_all = "camelCase")]
    MaxRows { max_rows: u64 },
    /// Plain OR-merge with no budget at all.
    Unlimited,
}

impl Default for BongBudget {
    fn default() -> Self {
        BongBudget::Unlimited
    }
}

/// Derived statistics for a combined bong.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BongSummary {
    pub combined: Vec<CombinedSelection>,
    pub rows: u64,
    pub total_cost: u64,
    pub cost_per_participant: u64,
}

/// Produces the combined bong for the configured budget mode.
pub fn generate(
    all_selections: &[ParticipantSelections],
    match_indices: &[u8],
    budget: &BongBudget,
) -> Vec<CombinedSelection> {
    debug!(
        participants = all_selections.len(),
        matches = match_indices.len(),
        "Generating combined bong"
    );
    match *budget {
        BongBudget::Covers(covers) => {
            combine::build_combined_coupon(all_selections, match_indices, covers)
        }
        BongBudget::MaxRows { max_rows } => {
            let tally = tally::tally_primary_votes(all_selections, match_indices);
            let merged = merge::merge_selections_by_primary(all_selections);
            merge::trim_to_budget(merged, max_rows, &tally)
        }
        BongBudget::Unlimited => merge::merge_selections_by_primary(all_selections),
    }
}

/// Bundles a combined bong with its row count and cost split.
pub fn summarize(
    combined: Vec<CombinedSelection>,
    bet_per_row: u64,
    participant_count: usize,
) -> BongSummary {
    let rows = stats::compute_row_count(&combined);
    let total_cost = stats::compute_cost(&combined, bet_per_row);
    let cost_per_participant = stats::cost_per_participant(total_cost, participant_count);
    BongSummary {
        combined,
        rows,
        total_cost,
        cost_per_participant,
    }
}

use serde::{Deserialize, Serialize};

use crate::bong::{BongBudget, BongSummary};
use crate::selection::ParticipantSelections;

/// A generation request as the surrounding application submits it.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// 1-based, contiguous, at most 13 entries on a full coupon.
    pub match_indices: Vec<u8>,
    pub participants: Vec<ParticipantSelections>,
    #[serde(default)]
    pub budget: BongBudget,
    /// Whole currency units per row; falls back to the configured default.
    pub bet_per_row: Option<u64>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(flatten)]
    pub summary: BongSummary,
    pub participant_count: usize,
    pub bet_per_row: u64,
}

use crate::selection::CombinedSelection;

/// Number of betting rows the bong expands to: the product of per-match
/// outcome counts. A match with no outcomes contributes a factor of 1 so
/// a malformed entry cannot zero out the whole product.
pub fn compute_row_count(combined: &[CombinedSelection]) -> u64 {
    combined
        .iter()
        .map(|entry| entry.outcomes.len().max(1) as u64)
        .product()
}

/// Total stake in whole currency units.
pub fn compute_cost(combined: &[CombinedSelection], bet_per_row: u64) -> u64 {
    compute_row_count(combined) * bet_per_row
}

/// Each participant's share of the total cost, rounded up.
pub fn cost_per_participant(total_cost: u64, participant_count: usize) -> u64 {
    if participant_count == 0 {
        return total_cost;
    }
    let count = participant_count as u64;
    (total_cost + count - 1) / count
}

use std::collections::BTreeMap;

use super::rank::rank_by_contentiousness;
use super::tally::tally_primary_votes;
use super::CoverageBudget;
use crate::selection::{CombinedSelection, OutcomeSet, ParticipantSelections};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Cover {
    Full,
    Half,
    Single,
}

/// Builds the combined bong under a half/full-cover budget.
///
/// The most contentious matches get the budget: the top `full_covers`
/// ranked matches include all three outcomes, the next `half_covers` their
/// two highest-voted outcomes, and the rest only the top pick. A budget
/// larger than the coupon saturates; the extra covers are simply never
/// assigned. Output is in ascending match-index order.
pub fn build_combined_coupon(
    all_selections: &[ParticipantSelections],
    match_indices: &[u8],
    budget: CoverageBudget,
) -> Vec<CombinedSelection> {
    let tally = tally_primary_votes(all_selections, match_indices);
    let ranked = rank_by_contentiousness(&tally, match_indices);

    let mut covers: BTreeMap<u8, Cover> = ranked
        .iter()
        .map(|&match_index| (match_index, Cover::Single))
        .collect();
    for &match_index in ranked.iter().take(budget.full_covers) {
        covers.insert(match_index, Cover::Full);
    }
    for &match_index in ranked
        .iter()
        .skip(budget.full_covers)
        .take(budget.half_covers)
    {
        covers.insert(match_index, Cover::Half);
    }

    // BTreeMap iteration restores ascending match-index order.
    covers
        .into_iter()
        .map(|(match_index, cover)| {
            let by_votes = tally.counts(match_index).ranked();
            let outcomes = match cover {
                Cover::Full => OutcomeSet::full(),
                Cover::Half => OutcomeSet::of(&[by_votes[0].0, by_votes[1].0]),
                // With zero votes everywhere the stable ranking puts home
                // first, so an empty match still gets a pick.
                Cover::Single => OutcomeSet::single(by_votes[0].0),
            };
            CombinedSelection {
                match_index,
                outcomes,
            }
        })
        .collect()
}

use std::collections::BTreeMap;

use super::stats::compute_row_count;
use super::tally::PrimaryVoteTally;
use crate::selection::{CombinedSelection, MatchOutcome, OutcomeSet, ParticipantSelections};

/// Merges every participant's picks with primary-pick logic, no budget.
///
/// An outcome lands in the combined bong if some participant declared it as
/// their primary pick, or chose it at all on a legacy row. A declared
/// secondary pick on its own never forces an outcome in. The accumulation
/// is a per-match OR, so participant order never affects the result.
pub fn merge_selections_by_primary(
    all_selections: &[ParticipantSelections],
) -> Vec<CombinedSelection> {
    let mut merged: BTreeMap<u8, OutcomeSet> = BTreeMap::new();

    for participant in all_selections {
        for entry in &participant.selections {
            let outcomes = merged
                .entry(entry.match_index)
                .or_insert_with(OutcomeSet::empty);
            *outcomes = outcomes.union(entry.selection.primary_votes());
        }
    }

    merged
        .into_iter()
        .map(|(match_index, outcomes)| CombinedSelection {
            match_index,
            outcomes,
        })
        .collect()
}

/// Trims a merged bong down toward a maximum row count.
///
/// Each step removes the least-supported outcome (fewest primary votes)
/// among matches that still have more than one; on equal votes the match
/// currently contributing the largest row multiplier loses an outcome,
/// since that shrinks the row count the most. A match is never reduced
/// below one outcome, so an unreachable budget leaves the row count above
/// `max_rows` once every match is down to a single pick.
pub fn trim_to_budget(
    mut combined: Vec<CombinedSelection>,
    max_rows: u64,
    tally: &PrimaryVoteTally,
) -> Vec<CombinedSelection> {
    while compute_row_count(&combined) > max_rows {
        // (position, outcome, votes, multiplier) of the best removal so far.
        let mut candidate: Option<(usize, MatchOutcome, u32, usize)> = None;

        for (position, entry) in combined.iter().enumerate() {
            let multiplier = entry.outcomes.len();
            if multiplier < 2 {
                continue;
            }
            // Reverse enumeration order so equal-vote ties within a match
            // drop the lower-ranked outcome and keep home-most picks.
            for &outcome in MatchOutcome::ALL.iter().rev() {
                if !entry.outcomes.contains(outcome) {
                    continue;
                }
                let votes = tally.counts(entry.match_index).get(outcome);
                let better = match candidate {
                    None => true,
                    Some((_, _, best_votes, best_multiplier)) => {
                        votes < best_votes
                            || (votes == best_votes && multiplier > best_multiplier)
                    }
                };
                if better {
                    candidate = Some((position, outcome, votes, multiplier));
                }
            }
        }

        match candidate {
            Some((position, outcome, _, _)) => combined[position].outcomes.remove(outcome),
            // Every match is already a single pick.
            None => break,
        }
    }

    combined
}

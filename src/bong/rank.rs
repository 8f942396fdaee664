use std::cmp::Reverse;

use super::tally::PrimaryVoteTally;

/// Orders matches by how contested they are, most contentious first.
///
/// The primary key is the second-highest vote count (how strongly a second
/// outcome competes for inclusion, i.e. half-cover candidacy); the tie-break
/// is the third-highest count (full-cover candidacy). The sort is stable,
/// so fully tied matches stay in ascending match-index order.
pub fn rank_by_contentiousness(tally: &PrimaryVoteTally, match_indices: &[u8]) -> Vec<u8> {
    let mut ranked = match_indices.to_vec();
    ranked.sort_by_key(|&match_index| {
        let counts = tally.counts(match_index).ranked();
        (Reverse(counts[1].1), Reverse(counts[2].1))
    });
    ranked
}

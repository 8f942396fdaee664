use std::collections::BTreeMap;

use crate::selection::{MatchOutcome, ParticipantSelections};

/// Primary-pick votes for one match.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct VoteCount {
    pub home: u32,
    pub draw: u32,
    pub away: u32,
}

impl VoteCount {
    pub fn get(&self, outcome: MatchOutcome) -> u32 {
        match outcome {
            MatchOutcome::Home => self.home,
            MatchOutcome::Draw => self.draw,
            MatchOutcome::Away => self.away,
        }
    }

    fn bump(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Home => self.home += 1,
            MatchOutcome::Draw => self.draw += 1,
            MatchOutcome::Away => self.away += 1,
        }
    }

    /// Outcomes ordered by vote count, most-voted first. The sort is
    /// stable, so equal counts keep home < draw < away order.
    pub fn ranked(&self) -> [(MatchOutcome, u32); 3] {
        let mut ranked = [
            (MatchOutcome::Home, self.home),
            (MatchOutcome::Draw, self.draw),
            (MatchOutcome::Away, self.away),
        ];
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

/// Per-match primary-pick vote counts, keyed by match index.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PrimaryVoteTally(BTreeMap<u8, VoteCount>);

impl PrimaryVoteTally {
    pub fn counts(&self, match_index: u8) -> VoteCount {
        self.0.get(&match_index).copied().unwrap_or_default()
    }
}

/// Counts every participant's primary picks per match.
///
/// A declared primary contributes one vote for that outcome only; legacy
/// rows without one contribute a vote for each chosen outcome. Matches
/// nobody submitted picks for keep zero counts. Picks at indices outside
/// `match_indices` are ignored.
pub fn tally_primary_votes(
    all_selections: &[ParticipantSelections],
    match_indices: &[u8],
) -> PrimaryVoteTally {
    let mut tally: BTreeMap<u8, VoteCount> = match_indices
        .iter()
        .map(|&index| (index, VoteCount::default()))
        .collect();

    for participant in all_selections {
        for entry in &participant.selections {
            let counts = match tally.get_mut(&entry.match_index) {
                Some(counts) => counts,
                None => continue,
            };
            for outcome in entry.selection.primary_votes().iter() {
                counts.bump(outcome);
            }
        }
    }

    PrimaryVoteTally(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{
        MatchSelection, OutcomeSet, ParticipantId, Selection,
    };

    fn participant(selections: Vec<MatchSelection>) -> ParticipantSelections {
        ParticipantSelections {
            participant_id: ParticipantId::new(),
            selections,
        }
    }

    fn with_primary(match_index: u8, chosen: &[MatchOutcome], primary: MatchOutcome) -> MatchSelection {
        MatchSelection {
            match_index,
            selection: Selection::WithPrimary {
                chosen: OutcomeSet::of(chosen),
                primary,
            },
        }
    }

    #[test]
    fn counts_primaries_only_for_modern_rows() {
        let participants = vec![
            participant(vec![with_primary(1, &[MatchOutcome::Home], MatchOutcome::Home)]),
            participant(vec![with_primary(
                1,
                &[MatchOutcome::Home, MatchOutcome::Draw],
                MatchOutcome::Home,
            )]),
            participant(vec![with_primary(1, &[MatchOutcome::Draw], MatchOutcome::Draw)]),
        ];

        let tally = tally_primary_votes(&participants, &[1]);
        assert_eq!(
            tally.counts(1),
            VoteCount {
                home: 2,
                draw: 1,
                away: 0,
            }
        );
    }

    #[test]
    fn legacy_rows_vote_for_every_chosen_outcome() {
        let participants = vec![participant(vec![MatchSelection {
            match_index: 3,
            selection: Selection::Legacy {
                chosen: OutcomeSet::of(&[MatchOutcome::Draw, MatchOutcome::Away]),
            },
        }])];

        let tally = tally_primary_votes(&participants, &[3]);
        assert_eq!(
            tally.counts(3),
            VoteCount {
                home: 0,
                draw: 1,
                away: 1,
            }
        );
    }

    #[test]
    fn matches_without_picks_keep_zero_counts() {
        let tally = tally_primary_votes(&[], &[1, 2]);
        assert_eq!(tally.counts(1), VoteCount::default());
        assert_eq!(tally.counts(2), VoteCount::default());
    }

    #[test]
    fn picks_outside_the_coupon_are_ignored() {
        let participants = vec![participant(vec![with_primary(
            9,
            &[MatchOutcome::Away],
            MatchOutcome::Away,
        )])];

        let tally = tally_primary_votes(&participants, &[1, 2]);
        assert_eq!(tally.counts(9), VoteCount::default());
    }

    #[test]
    fn ranked_breaks_ties_in_enumeration_order() {
        let counts = VoteCount {
            home: 1,
            draw: 1,
            away: 2,
        };
        let ranked = counts.ranked();
        assert_eq!(ranked[0], (MatchOutcome::Away, 2));
        assert_eq!(ranked[1], (MatchOutcome::Home, 1));
        assert_eq!(ranked[2], (MatchOutcome::Draw, 1));
    }
}

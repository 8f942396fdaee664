use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Hash, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_string(&self) -> String {
        self.0.to_hyphenated().to_string()
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

/// One of the three 1X2 outcomes of a match.
#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Home,
    Draw,
    Away,
}

impl MatchOutcome {
    /// Enumeration order used for display and for all tie-breaking.
    pub const ALL: [MatchOutcome; 3] = [MatchOutcome::Home, MatchOutcome::Draw, MatchOutcome::Away];
}

/// A subset of the three outcomes for one match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct OutcomeSet {
    pub home: bool,
    pub draw: bool,
    pub away: bool,
}

impl OutcomeSet {
    pub fn empty() -> Self {
        Self {
            home: false,
            draw: false,
            away: false,
        }
    }

    pub fn full() -> Self {
        Self {
            home: true,
            draw: true,
            away: true,
        }
    }

    pub fn single(outcome: MatchOutcome) -> Self {
        let mut set = Self::empty();
        set.insert(outcome);
        set
    }

    pub fn of(outcomes: &[MatchOutcome]) -> Self {
        let mut set = Self::empty();
        for &outcome in outcomes {
            set.insert(outcome);
        }
        set
    }

    pub fn contains(&self, outcome: MatchOutcome) -> bool {
        match outcome {
            MatchOutcome::Home => self.home,
            MatchOutcome::Draw => self.draw,
            MatchOutcome::Away => self.away,
        }
    }

    pub fn insert(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Home => self.home = true,
            MatchOutcome::Draw => self.draw = true,
            MatchOutcome::Away => self.away = true,
        }
    }

    pub fn remove(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Home => self.home = false,
            MatchOutcome::Draw => self.draw = false,
            MatchOutcome::Away => self.away = false,
        }
    }

    pub fn union(&self, other: OutcomeSet) -> OutcomeSet {
        OutcomeSet {
            home: self.home || other.home,
            draw: self.draw || other.draw,
            away: self.away || other.away,
        }
    }

    pub fn len(&self) -> usize {
        self.home as usize + self.draw as usize + self.away as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates included outcomes in home < draw < away order.
    pub fn iter(self) -> impl Iterator<Item = MatchOutcome> {
        MatchOutcome::ALL
            .iter()
            .copied()
            .filter(move |&outcome| self.contains(outcome))
    }
}

/// One participant's picks for one match: one or two outcomes.
///
/// Rows submitted before primary picks existed have no declared primary;
/// for those, every chosen outcome counts as a primary pick.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    WithPrimary {
        chosen: OutcomeSet,
        primary: MatchOutcome,
    },
    Legacy {
        chosen: OutcomeSet,
    },
}

impl Selection {
    pub fn chosen(&self) -> OutcomeSet {
        match *self {
            Selection::WithPrimary { chosen, .. } => chosen,
            Selection::Legacy { chosen } => chosen,
        }
    }

    /// The outcomes that count as primary picks during consolidation.
    ///
    /// A primary that is not a member of the chosen subset violates the
    /// submission contract; such a row is treated as legacy data rather
    /// than producing a vote for an outcome nobody picked.
    pub fn primary_votes(&self) -> OutcomeSet {
        match *self {
            Selection::WithPrimary { chosen, primary } if chosen.contains(primary) => {
                OutcomeSet::single(primary)
            }
            Selection::WithPrimary { chosen, .. } => chosen,
            Selection::Legacy { chosen } => chosen,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSelection {
    pub match_index: u8,
    #[serde(flatten)]
    pub selection: Selection,
}

/// Every pick one participant submitted, one entry per match index.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSelections {
    pub participant_id: ParticipantId,
    pub selections: Vec<MatchSelection>,
}

/// One match's entry in the combined bong: 1 to 3 included outcomes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedSelection {
    pub match_index: u8,
    pub outcomes: OutcomeSet,
}

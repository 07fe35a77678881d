use super::backlog::Backlog;
use super::roster::Roster;
use super::rules::Rules;
use crate::cards::Card;
use crate::gameplay::Score;
use crate::save::Record;
use crate::save::Status;
use crate::Error;
use crate::Position;
use crate::Round;
use std::collections::BTreeMap;

/// Aggregate root for one estimation session.
///
/// Owns the roster, the backlog, the configured rules, and the live
/// round state: the feature pointer, the round counter, the vote map,
/// and the accumulated results. The vote and result maps are owned
/// exclusively here; the engine mutates them through methods only.
#[derive(Debug, Clone)]
pub struct Session {
    roster: Roster,
    backlog: Backlog,
    rules: Rules,
    feature: Position,
    round: Round,
    votes: BTreeMap<String, Card>,
    validated: BTreeMap<String, Score>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
            backlog: Backlog::default(),
            rules: Rules::default(),
            feature: 0,
            round: 1,
            votes: BTreeMap::new(),
            validated: BTreeMap::new(),
        }
    }
    /// back to a blank session: empty roster and backlog, default rule,
    /// pointers at the start, no votes, no results.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }
    pub fn backlog(&self) -> &Backlog {
        &self.backlog
    }
    pub fn backlog_mut(&mut self) -> &mut Backlog {
        &mut self.backlog
    }
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn rules_mut(&mut self) -> &mut Rules {
        &mut self.rules
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn votes(&self) -> &BTreeMap<String, Card> {
        &self.votes
    }
    pub fn validated(&self) -> &BTreeMap<String, Score> {
        &self.validated
    }

    /// the feature currently being estimated, None once the
    /// backlog is exhausted and the session is complete.
    pub fn current_feature(&self) -> Option<&str> {
        self.backlog.get(self.feature)
    }
    pub fn is_complete(&self) -> bool {
        self.feature >= self.backlog.len()
    }

    /// record or overwrite the current voter's card. overwriting before
    /// the round closes keeps exactly one vote per player.
    pub fn cast(&mut self, name: &str, card: Card) {
        self.votes.insert(name.to_string(), card);
    }
    /// write the accepted estimate for the current feature.
    /// no-op if there is no current feature.
    pub fn record(&mut self, score: Score) {
        let Some(feature) = self.current_feature().map(str::to_string) else {
            return;
        };
        self.validated.insert(feature, score);
    }
    /// advance to the next feature: round counter back to 1, votes cleared.
    pub fn next_feature(&mut self) {
        self.feature += 1;
        self.round = 1;
        self.votes.clear();
    }
    /// same feature, next round: counter up, votes cleared.
    pub fn next_round(&mut self) {
        self.round += 1;
        self.votes.clear();
    }

    /// full-state export at one of the three checkpoints.
    pub fn snapshot(&self, status: Status) -> Record {
        Record {
            status,
            rules: Some(self.rules.selected().to_string()),
            players: self.roster.names(),
            backlog: self.backlog.features(),
            current_feature_index: self.feature,
            current_round_number: self.round,
            validated_features: self.validated.clone(),
        }
    }
}

/// full-state import. builds a fresh session from the record so a failed
/// load leaves the caller's live session untouched. duplicate names in the
/// record are silently deduplicated through the add path.
impl TryFrom<Record> for Session {
    type Error = Error;
    fn try_from(record: Record) -> Result<Self, Self::Error> {
        let mut session = Session::new();
        if let Some(name) = &record.rules {
            session.rules.set_mode(name)?;
        }
        for player in &record.players {
            session.roster.add(player);
        }
        for feature in &record.backlog {
            session.backlog.add(feature);
        }
        session.feature = record.current_feature_index;
        session.round = record.current_round_number;
        session.validated = record.validated_features;
        Ok(session)
    }
}

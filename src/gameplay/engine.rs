use super::outcome::Outcome;
use super::score::Score;
use super::turn::Turn;
use crate::cards::Card;
use crate::save::Status;
use crate::session::Session;
use crate::Points;
use crate::Position;

/// The round state machine.
///
/// Owns its Session exclusively and sequences one vote per registered
/// player in registration order. The ticker and the revealed flag are
/// transient: they are never persisted and come back as zero/false
/// whenever a session is loaded or a round restarts.
///
/// Its immutable methods reveal pure functions representing the rules
/// of how a round may conclude; the only mutation outside the vote map
/// is the explicit PAUSED snapshot on the coffee break path.
#[derive(Debug, Clone)]
pub struct Engine {
    session: Session,
    ticker: Position,
    revealed: bool,
}

impl From<Session> for Engine {
    fn from(session: Session) -> Self {
        Self {
            session,
            ticker: 0,
            revealed: false,
        }
    }
}

impl Engine {
    pub fn session(&self) -> &Session {
        &self.session
    }
    pub fn into_session(self) -> Session {
        self.session
    }
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// the player whose vote is awaited, None once everyone voted
    pub fn voter(&self) -> Option<&str> {
        self.session.roster().get(self.ticker).map(|p| p.name())
    }
    pub fn turn(&self) -> Turn {
        match self.is_round_finished() {
            false => Turn::Choice(self.ticker),
            true => Turn::Terminal,
        }
    }
    /// all players have voted. pure query, no side effect.
    pub fn is_round_finished(&self) -> bool {
        self.ticker >= self.session.roster().len()
    }
    pub fn is_session_complete(&self) -> bool {
        self.session.is_complete()
    }

    /// record the current voter's card and move the ticker along.
    /// false with no mutation once the round is already complete;
    /// that is "nothing to do", not an error.
    pub fn cast(&mut self, card: Card) -> bool {
        let Some(voter) = self.voter().map(str::to_string) else {
            return false;
        };
        log::debug!("{:<24}{}", voter, card);
        self.session.cast(&voter, card);
        self.ticker += 1;
        true
    }

    /// show the votes and settle the round.
    ///
    /// evaluation order: the coffee break override first, then the
    /// numeric subset, then round-1 strict unanimity, then from round 2
    /// the configured rule (with "?" accepted when nothing numeric
    /// remains). reading the votes never mutates them.
    pub fn reveal(&mut self) -> Outcome {
        assert!(self.is_round_finished(), "reveal before all votes cast");
        self.revealed = true;
        let outcome = self.evaluate();
        log::info!("{:<24}{}", "round outcome", outcome);
        outcome
    }

    fn evaluate(&self) -> Outcome {
        if self.is_coffee_break() {
            return Outcome::Break(self.session.snapshot(Status::Paused));
        }
        let numeric = self.numeric();
        if self.session.round() == 1 {
            return match numeric.split_first() {
                None => Outcome::Revote,
                Some((first, rest)) if rest.iter().all(|v| v == first) => {
                    Outcome::Validated(Score::Points(*first))
                }
                Some(_) => Outcome::Revote,
            };
        }
        if numeric.is_empty() {
            return Outcome::Validated(Score::Unknown);
        }
        match self.session.rules().selected().decide(&numeric) {
            Some(points) => Outcome::Validated(Score::Points(points)),
            None => Outcome::Revote,
        }
    }

    /// everyone asked for coffee. takes precedence over all scoring,
    /// round-1 unanimity included. an empty vote map is not a break.
    fn is_coffee_break(&self) -> bool {
        !self.session.votes().is_empty()
            && self.session.votes().values().all(|v| *v == Card::Break)
    }
    /// the numeric subset of the votes, sentinels dropped
    fn numeric(&self) -> Vec<Points> {
        self.session
            .votes()
            .values()
            .filter_map(Card::points)
            .collect()
    }

    /// same feature, fresh round: voting restarts at the first player.
    pub fn revote(&mut self) {
        self.session.next_round();
        self.restart();
    }
    /// accept the score for the current feature and advance the backlog.
    pub fn validate(&mut self, score: Score) {
        self.session.record(score);
        self.session.next_feature();
        self.restart();
    }
    fn restart(&mut self) {
        self.ticker = 0;
        self.revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Rule;

    fn engine() -> Engine {
        let mut session = Session::new();
        session.roster_mut().add("Alice");
        session.roster_mut().add("Bob");
        session.roster_mut().add("Charlie");
        session.backlog_mut().add("User Story 1");
        Engine::from(session)
    }

    fn cast_all(engine: &mut Engine, cards: &[Card]) {
        for card in cards {
            assert!(engine.cast(*card));
        }
    }

    #[test]
    fn voting_walks_the_roster_in_order() {
        let mut engine = engine();
        assert!(engine.voter() == Some("Alice"));
        assert!(engine.turn() == Turn::Choice(0));
        assert!(engine.cast(Card::Five));
        assert!(engine.voter() == Some("Bob"));
        assert!(!engine.is_round_finished());
        assert!(engine.cast(Card::Eight));
        assert!(!engine.is_round_finished());
        assert!(engine.cast(Card::Five));
        assert!(engine.is_round_finished());
        assert!(engine.turn() == Turn::Terminal);
        assert!(engine.voter() == None);
    }

    #[test]
    fn cast_after_round_complete_is_refused() {
        let mut engine = engine();
        cast_all(&mut engine, &[Card::Five, Card::Five, Card::Five]);
        assert!(!engine.cast(Card::Eight));
        assert!(engine.session().votes().len() == 3);
    }

    #[test]
    fn round_one_requires_strict_unanimity() {
        let mut engine = engine();
        cast_all(&mut engine, &[Card::Five, Card::Five, Card::Eight]);
        assert!(engine.reveal() == Outcome::Revote);

        let mut engine = self::engine();
        cast_all(&mut engine, &[Card::Five, Card::Five, Card::Five]);
        assert!(engine.reveal() == Outcome::Validated(Score::Points(5)));
    }

    #[test]
    fn round_one_ignores_the_configured_rule() {
        let mut engine = engine();
        engine.session.rules_mut().select(Rule::Average);
        cast_all(&mut engine, &[Card::Three, Card::Five, Card::Eight]);
        assert!(engine.reveal() == Outcome::Revote);
    }

    #[test]
    fn round_one_all_sentinels_is_a_revote() {
        let mut engine = engine();
        cast_all(&mut engine, &[Card::Abstain, Card::Abstain, Card::Break]);
        assert!(engine.reveal() == Outcome::Revote);
    }

    #[test]
    fn round_two_average() {
        let mut engine = engine();
        engine.session.rules_mut().select(Rule::Average);
        engine.revote(); // round 2
        cast_all(&mut engine, &[Card::Three, Card::Five, Card::Eight]);
        assert!(engine.reveal() == Outcome::Validated(Score::Points(5)));
    }

    #[test]
    fn round_two_absolute_majority() {
        let mut engine = engine();
        engine.session.rules_mut().select(Rule::AbsoluteMajority);
        engine.revote();
        cast_all(&mut engine, &[Card::Five, Card::Five, Card::Eight]);
        assert!(engine.reveal() == Outcome::Validated(Score::Points(5)));

        let mut engine = self::engine();
        engine.session.rules_mut().select(Rule::AbsoluteMajority);
        engine.revote();
        cast_all(&mut engine, &[Card::Three, Card::Five, Card::Eight]);
        assert!(engine.reveal() == Outcome::Revote);
    }

    #[test]
    fn abstain_is_excluded_from_aggregation() {
        let mut engine = engine();
        engine.session.rules_mut().select(Rule::Average);
        engine.revote();
        cast_all(&mut engine, &[Card::Five, Card::Thirteen, Card::Abstain]);
        assert!(engine.reveal() == Outcome::Validated(Score::Points(9)));
    }

    #[test]
    fn round_two_without_numbers_settles_on_unknown() {
        let mut engine = engine();
        engine.revote();
        cast_all(&mut engine, &[Card::Abstain, Card::Abstain, Card::Break]);
        assert!(engine.reveal() == Outcome::Validated(Score::Unknown));
    }

    #[test]
    fn coffee_break_beats_everything_and_snapshots_paused() {
        let mut engine = engine();
        cast_all(&mut engine, &[Card::Break, Card::Break, Card::Break]);
        match engine.reveal() {
            Outcome::Break(record) => {
                assert!(record.status == Status::Paused);
                assert!(record.players == vec!["Alice", "Bob", "Charlie"]);
                assert!(record.current_round_number == 1);
            }
            outcome => panic!("expected a break, got {}", outcome),
        }
        // the session itself is untouched by the snapshot
        assert!(engine.session().votes().len() == 3);
        assert!(engine.session().round() == 1);
    }

    #[test]
    fn revote_restarts_the_same_feature() {
        let mut engine = engine();
        cast_all(&mut engine, &[Card::Five, Card::Five, Card::Eight]);
        assert!(engine.reveal() == Outcome::Revote);
        engine.revote();
        assert!(engine.session().round() == 2);
        assert!(engine.session().votes().is_empty());
        assert!(engine.voter() == Some("Alice"));
        assert!(!engine.revealed());
        assert!(engine.session().current_feature() == Some("User Story 1"));
    }

    #[test]
    fn validation_advances_the_backlog_to_completion() {
        let mut engine = engine();
        engine.session.backlog_mut().add("User Story 2");
        cast_all(&mut engine, &[Card::Five, Card::Five, Card::Five]);
        let Outcome::Validated(score) = engine.reveal() else {
            panic!("unanimous round should validate")
        };
        engine.validate(score);
        assert!(engine.session().validated()["User Story 1"] == Score::Points(5));
        assert!(engine.session().current_feature() == Some("User Story 2"));
        assert!(engine.session().round() == 1);
        assert!(!engine.is_session_complete());
        cast_all(&mut engine, &[Card::Eight, Card::Eight, Card::Eight]);
        let Outcome::Validated(score) = engine.reveal() else {
            panic!("unanimous round should validate")
        };
        engine.validate(score);
        assert!(engine.is_session_complete());
        assert!(engine.session().validated().len() == 2);
    }

    #[test]
    fn transient_state_resets_on_load() {
        let mut engine = engine();
        cast_all(&mut engine, &[Card::Five, Card::Five, Card::Five]);
        let record = engine.session().snapshot(Status::InProgress);
        let restored = Engine::from(Session::try_from(record).unwrap());
        assert!(restored.voter() == Some("Alice"));
        assert!(!restored.revealed());
        assert!(!restored.is_round_finished());
    }
}

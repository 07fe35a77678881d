/// terminal disposition of a revealed round, in precedence order:
/// the coffee break overrides any scoring, then a concrete score
/// validates the feature, anything else restarts the round.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// every cast vote was the break card. carries the PAUSED
    /// snapshot taken before the outcome was returned.
    Break(Record),
    /// consensus reached, or the "?" fallback past round 1
    Validated(Score),
    /// no consensus, the same feature revotes at round + 1
    Revote,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Break(_) => write!(f, "{}", "BREAK".magenta()),
            Self::Validated(score) => write!(f, "{}", format!("VALIDATED {}", score).green()),
            Self::Revote => write!(f, "{}", "REVOTE".yellow()),
        }
    }
}

use super::score::Score;
use crate::save::Record;
use colored::Colorize;

use crate::Position;

/// whose move it is within a round
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    /// the i-th registered player still has to vote
    Choice(Position),
    /// everyone voted, the round is ready to reveal
    Terminal,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(i) => write!(f, "P{}", i),
            Self::Terminal => write!(f, "XX"),
        }
    }
}

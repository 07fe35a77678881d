use crate::Error;
use crate::Points;
use std::collections::BTreeMap;

/// the closed set of consensus policies. consulted from round 2 on,
/// round 1 always demands strict unanimity regardless of selection.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Rule {
    #[default]
    Unanimity,
    AbsoluteMajority,
    RelativeMajority,
    Median,
    Average,
}

impl Rule {
    /// stable order for UI enumeration
    pub const fn all() -> &'static [Self] {
        &[
            Self::Unanimity,
            Self::AbsoluteMajority,
            Self::RelativeMajority,
            Self::Median,
            Self::Average,
        ]
    }

    /// apply this rule to the numeric votes of a round.
    /// None means no consensus and the round must be revoted.
    /// callers guarantee a non-empty slice.
    pub fn decide(&self, votes: &[Points]) -> Option<Points> {
        assert!(!votes.is_empty(), "rules decide on non-empty votes");
        match self {
            Self::Unanimity => votes
                .windows(2)
                .all(|w| w[0] == w[1])
                .then(|| votes[0]),
            Self::Average => {
                let sum = votes.iter().sum::<Points>() as f64;
                Some(round_half_even(sum / votes.len() as f64))
            }
            Self::Median => Some(round_half_even(median(votes))),
            Self::AbsoluteMajority => {
                let (winner, count) = leader(votes);
                (count * 2 > votes.len()).then(|| winner)
            }
            Self::RelativeMajority => Some(leader(votes).0),
        }
    }
}

/// the most frequent value and its count. ties in frequency break
/// deterministically toward the larger value.
fn leader(votes: &[Points]) -> (Points, usize) {
    let mut counts = BTreeMap::new();
    for vote in votes {
        *counts.entry(*vote).or_insert(0usize) += 1;
    }
    counts
        .into_iter()
        .fold((0, 0), |(w, c), (k, v)| if v >= c { (k, v) } else { (w, c) })
}

fn median(votes: &[Points]) -> f64 {
    let mut sorted = votes.to_vec();
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    }
}

/// banker's rounding, matching the reference behavior for Average/Median
fn round_half_even(x: f64) -> Points {
    let below = x.floor() as Points;
    let frac = x - x.floor();
    if frac > 0.5 {
        below + 1
    } else if frac < 0.5 {
        below
    } else if below % 2 == 0 {
        below
    } else {
        below + 1
    }
}

/// str isomorphism
impl TryFrom<&str> for Rule {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "Unanimity" => Ok(Self::Unanimity),
            "AbsoluteMajority" => Ok(Self::AbsoluteMajority),
            "RelativeMajority" => Ok(Self::RelativeMajority),
            "Median" => Ok(Self::Median),
            "Average" => Ok(Self::Average),
            _ => Err(Error::InvalidRule(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unanimity => write!(f, "Unanimity"),
            Self::AbsoluteMajority => write!(f, "AbsoluteMajority"),
            Self::RelativeMajority => write!(f, "RelativeMajority"),
            Self::Median => write!(f, "Median"),
            Self::Average => write!(f, "Average"),
        }
    }
}

/// the configured policy. defaults to Unanimity; an unknown name is
/// rejected distinctly and leaves the selection untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct Rules {
    selected: Rule,
}

impl Rules {
    pub fn selected(&self) -> Rule {
        self.selected
    }
    pub fn select(&mut self, rule: Rule) {
        self.selected = rule;
    }
    pub fn set_mode(&mut self, name: &str) -> Result<(), Error> {
        self.selected = Rule::try_from(name)?;
        Ok(())
    }
}

/// one card from the estimation deck.
///
/// ten numeric sizes on a loosely Fibonacci scale, plus two sentinels:
/// Abstain sits out of the numeric aggregation, Break asks for a coffee
/// pause. Exactly one card is cast per player per round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Card {
    Zero,
    One,
    Two,
    Three,
    Five,
    Eight,
    Thirteen,
    Twenty,
    Forty,
    Hundred,
    Abstain,
    Break,
}

impl Card {
    /// the full deck in display order
    pub const fn deck() -> &'static [Self] {
        &[
            Self::Zero,
            Self::One,
            Self::Two,
            Self::Three,
            Self::Five,
            Self::Eight,
            Self::Thirteen,
            Self::Twenty,
            Self::Forty,
            Self::Hundred,
            Self::Abstain,
            Self::Break,
        ]
    }
    /// numeric value, None for the two sentinels
    pub const fn points(&self) -> Option<Points> {
        match self {
            Self::Zero => Some(0),
            Self::One => Some(1),
            Self::Two => Some(2),
            Self::Three => Some(3),
            Self::Five => Some(5),
            Self::Eight => Some(8),
            Self::Thirteen => Some(13),
            Self::Twenty => Some(20),
            Self::Forty => Some(40),
            Self::Hundred => Some(100),
            Self::Abstain | Self::Break => None,
        }
    }
    pub const fn is_numeric(&self) -> bool {
        self.points().is_some()
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "0" => Ok(Self::Zero),
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            "3" => Ok(Self::Three),
            "5" => Ok(Self::Five),
            "8" => Ok(Self::Eight),
            "13" => Ok(Self::Thirteen),
            "20" => Ok(Self::Twenty),
            "40" => Ok(Self::Forty),
            "100" => Ok(Self::Hundred),
            "abstain" => Ok(Self::Abstain),
            "break" => Ok(Self::Break),
            _ => Err("card not in deck"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.points() {
            Some(n) => write!(f, "{}", n),
            None => match self {
                Self::Abstain => write!(f, "{}", "abstain".yellow()),
                Self::Break => write!(f, "{}", "break".magenta()),
                _ => unreachable!(),
            },
        }
    }
}

use crate::Points;
use colored::Colorize;
use std::fmt::{Display, Formatter};

/// a validated estimate: either story points or the "?" sentinel a
/// round settles on when no numeric votes remain past round 1.
/// the sentinel is an accepted terminal value, not a revote trigger.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Score {
    Points(Points),
    Unknown,
}

impl From<Points> for Score {
    fn from(points: Points) -> Self {
        Self::Points(points)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Points(n) => write!(f, "{}", n),
            Self::Unknown => write!(f, "?"),
        }
    }
}

/// on the wire a score is a bare number or the "?" string,
/// matching the original result exports.
impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Points(n) => serializer.serialize_u32(*n),
            Self::Unknown => serializer.serialize_str("?"),
        }
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct ScoreVisitor;
        impl serde::de::Visitor<'_> for ScoreVisitor {
            type Value = Score;
            fn expecting(&self, f: &mut Formatter) -> Result {
                write!(f, "a number or the \"?\" sentinel")
            }
            fn visit_u64<E: serde::de::Error>(self, n: u64) -> std::result::Result<Score, E> {
                Ok(Score::Points(n as Points))
            }
            fn visit_i64<E: serde::de::Error>(self, n: i64) -> std::result::Result<Score, E> {
                if n < 0 {
                    Err(E::custom("negative estimate"))
                } else {
                    Ok(Score::Points(n as Points))
                }
            }
            fn visit_str<E: serde::de::Error>(self, s: &str) -> std::result::Result<Score, E> {
                match s {
                    "?" => Ok(Score::Unknown),
                    _ => Err(E::custom(format!("unknown score sentinel: {}", s))),
                }
            }
        }
        deserializer.deserialize_any(ScoreVisitor)
    }
}

use crate::Points;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

use super::status::Status;
use crate::gameplay::Score;
use crate::Position;
use crate::Round;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// The persisted session record, field for field the shape the original
/// exports used, so saves round-trip bit-exact.
///
/// The setup-only variant (players, features, rule; no round or result
/// fields) deserializes through the same shape: aliases cover the field
/// spellings and absent fields take their defaults (index 0, round 1,
/// empty results, IN_PROGRESS).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub status: Status,
    #[serde(alias = "rule", default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<String>,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(alias = "features", default)]
    pub backlog: Vec<String>,
    #[serde(default)]
    pub current_feature_index: Position,
    #[serde(default = "first_round")]
    pub current_round_number: Round,
    #[serde(default)]
    pub validated_features: BTreeMap<String, Score>,
}

const fn first_round() -> Round {
    1
}

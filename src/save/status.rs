use serde::Deserialize;
use serde::Serialize;

/// checkpoint at which a session record was taken
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// mid-session snapshot between features
    #[default]
    InProgress,
    /// the coffee break condition paused the whole session
    Paused,
    /// every feature in the backlog carries an estimate
    Finished,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Paused => write!(f, "PAUSED"),
            Self::Finished => write!(f, "FINISHED"),
        }
    }
}

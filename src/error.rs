/// Error taxonomy of the estimation engine.
///
/// Roster and Backlog rejections (empty or duplicate names) are expected
/// user interactions modeled as boolean results, so they never show up here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// a rule name outside the five recognized consensus policies
    #[error("unknown rule: {0}")]
    InvalidRule(String),
    /// an import record that is not a usable session shape
    #[error("malformed state: {0}")]
    MalformedState(String),
    /// surfaced from the persistence collaborator, never generated here
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

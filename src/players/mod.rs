pub mod human;
pub use human::*;

use crate::cards::Card;
use crate::Round;

/// the seam between the table and whoever picks the cards.
/// votes are entered serially, one voter at a time.
pub trait Voter {
    /// choose a card for the named player voting on the given feature
    fn vote(&self, player: &str, feature: &str, round: Round) -> Card;
}

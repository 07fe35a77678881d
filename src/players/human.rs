pub struct Human;

impl Voter for Human {
    fn vote(&self, player: &str, feature: &str, round: Round) -> Card {
        let deck = Card::deck();
        let selection = Select::new()
            .with_prompt(format!(
                "\n{} votes on {} (round {})",
                player.bold(),
                feature,
                round
            ))
            .report(false)
            .items(deck)
            .default(0)
            .interact()
            .unwrap();
        deck[selection]
    }
}

use super::Voter;
use crate::cards::Card;
use crate::Round;
use colored::Colorize;
use dialoguer::Select;

use super::engine::Engine;
use super::outcome::Outcome;
use super::turn::Turn;
use crate::players::Human;
use crate::players::Voter;
use crate::save::disk;
use crate::save::Status;
use crate::session::Rule;
use crate::session::Session;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use std::path::PathBuf;

/// Interactive table driving a full estimation session in the terminal.
///
/// Walks the backlog feature by feature: prompts every voter in turn,
/// reveals, and disposes of the outcome. Snapshots go to the save path:
/// IN_PROGRESS between features, PAUSED on a coffee break, FINISHED at
/// the end. A failed save is a notification, never a crash, and never
/// touches the in-memory session.
pub struct Table {
    engine: Engine,
    voter: Box<dyn Voter>,
    path: PathBuf,
}

impl Table {
    pub fn new(session: Session, path: PathBuf) -> Self {
        Self::with_voter(session, path, Box::new(Human))
    }
    pub fn with_voter(session: Session, path: PathBuf, voter: Box<dyn Voter>) -> Self {
        Self {
            engine: Engine::from(session),
            voter,
            path,
        }
    }

    /// interactive session setup: at least two players, at least one
    /// feature, one of the five rules. the original setup flow.
    pub fn setup() -> Session {
        let mut session = Session::new();
        println!("{}", "~ table setup ~".bold());
        loop {
            let name = prompt("add player (empty to continue)");
            if name.is_empty() {
                match session.roster().len() {
                    0 | 1 => println!("{}", "need at least 2 players".red()),
                    _ => break,
                }
                continue;
            }
            if !session.roster_mut().add(&name) {
                println!("{}", "name already taken".yellow());
            }
        }
        loop {
            let name = prompt("add feature (empty to continue)");
            if name.is_empty() {
                match session.backlog().len() {
                    0 => println!("{}", "need at least 1 feature".red()),
                    _ => break,
                }
                continue;
            }
            if !session.backlog_mut().add(&name) {
                println!("{}", "feature already listed".yellow());
            }
        }
        let rules = Rule::all();
        let selection = Select::new()
            .with_prompt("consensus rule from round 2 on")
            .items(rules)
            .default(0)
            .interact()
            .unwrap();
        session.rules_mut().select(rules[selection]);
        session
    }

    /// run the session to its end: backlog exhausted or coffee break.
    pub fn play(mut self) -> Session {
        while !self.engine.is_session_complete() {
            self.begin_round();
            while let Turn::Choice(_) = self.engine.turn() {
                self.next_vote();
            }
            let outcome = self.engine.reveal();
            self.show_votes();
            match outcome {
                Outcome::Break(record) => {
                    self.save(&record);
                    println!("{}", "everyone asked for coffee. session paused.".magenta());
                    return self.engine.into_session();
                }
                Outcome::Revote => {
                    println!("{}", "no consensus, voting again".yellow());
                    self.engine.revote();
                }
                Outcome::Validated(score) => {
                    let feature = self
                        .engine
                        .session()
                        .current_feature()
                        .expect("validated round has a feature")
                        .to_string();
                    println!("{}", format!("{} estimated at {}", feature, score).green());
                    self.engine.validate(score);
                    if !self.engine.is_session_complete() {
                        self.save(&self.engine.session().snapshot(Status::InProgress));
                    }
                }
            }
        }
        self.finish()
    }

    fn begin_round(&self) {
        let session = self.engine.session();
        let feature = session.current_feature().expect("session not complete");
        println!("\n{}", "-".repeat(21));
        println!(
            "{} {}  {} {}",
            "FEATURE".bold(),
            feature,
            "ROUND".bold(),
            session.round()
        );
    }
    fn next_vote(&mut self) {
        let voter = self.engine.voter().expect("open round has a voter").to_string();
        let feature = self
            .engine
            .session()
            .current_feature()
            .expect("open round has a feature")
            .to_string();
        let card = self
            .voter
            .vote(&voter, &feature, self.engine.session().round());
        self.engine.cast(card);
    }
    fn show_votes(&self) {
        for (name, card) in self.engine.session().votes() {
            println!("  {:<16}{}", name, card);
        }
    }
    fn save(&self, record: &crate::save::Record) {
        // non-fatal by design of the persistence contract
        if let Err(e) = disk::write(&self.path, record) {
            log::warn!("{:<24}{}", "save failed", e);
            println!("{}", format!("could not save session: {}", e).red());
        }
    }

    fn finish(self) -> Session {
        let session = self.engine.into_session();
        let record = session.snapshot(Status::Finished);
        if let Err(e) = disk::write(&self.path, &record) {
            log::warn!("{:<24}{}", "save failed", e);
        }
        println!("\n{}", "~ all features estimated ~".bold());
        for (feature, score) in session.validated() {
            println!("  {:<32}{}", feature, score.to_string().green());
        }
        session
    }
}

fn prompt(message: &str) -> String {
    Input::<String>::new()
        .with_prompt(message)
        .allow_empty(true)
        .interact_text()
        .unwrap()
        .trim()
        .to_string()
}

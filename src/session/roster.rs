use crate::Position;

/// a registered participant. the name is the identity key and is
/// never mutated between registration and removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// the set of registered participants, unique by exact name,
/// ordered by registration.
#[derive(Debug, Default, Clone)]
pub struct Roster(Vec<Player>);

impl Roster {
    /// false on an empty or already-registered name. not an error,
    /// duplicates are routine user input.
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.push(Player {
            name: name.to_string(),
        });
        true
    }
    /// no-op if absent
    pub fn remove(&mut self, name: &str) {
        self.0.retain(|p| p.name != name);
    }
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|p| p.name == name)
    }
    pub fn get(&self, position: Position) -> Option<&Player> {
        self.0.get(position)
    }
    /// registration order
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|p| p.name.clone()).collect()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.0.iter()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration() {
        let mut roster = Roster::default();
        assert!(roster.add("Alice"));
        assert!(roster.add("Bob"));
        assert!(!roster.add("Alice")); // duplicate
        assert!(!roster.add("")); // empty
        assert!(roster.len() == 2);
        assert!(roster.names() == vec!["Alice", "Bob"]);
    }

    #[test]
    fn removal_is_silent() {
        let mut roster = Roster::default();
        roster.add("Alice");
        roster.add("Bob");
        roster.remove("Alice");
        roster.remove("Nobody"); // absent, no-op
        assert!(roster.names() == vec!["Bob"]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut roster = Roster::default();
        assert!(roster.add("alice"));
        assert!(roster.add("Alice"));
        assert!(roster.len() == 2);
    }
}

use crate::Position;

/// the ordered list of features (user stories) awaiting estimates.
/// names are unique, insertion order preserved. mutated only during
/// setup or import; during play only the session's pointer walks it.
#[derive(Debug, Default, Clone)]
pub struct Backlog(Vec<String>);

impl Backlog {
    /// same contract as Roster::add: false on empty or duplicate.
    pub fn add(&mut self, name: &str) -> bool {
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.0.push(name.to_string());
        true
    }
    /// no-op if absent
    pub fn remove(&mut self, name: &str) {
        self.0.retain(|f| f != name);
    }
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|f| f == name)
    }
    pub fn get(&self, position: Position) -> Option<&str> {
        self.0.get(position).map(String::as_str)
    }
    pub fn features(&self) -> Vec<String> {
        self.0.clone()
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
    fn insertion_order_and_uniqueness() {
        let mut backlog = Backlog::default();
        assert!(backlog.add("Login Page"));
        assert!(backlog.add("Logout"));
        assert!(!backlog.add("Login Page")); // duplicate
        assert!(!backlog.add("")); // empty
        assert!(backlog.features() == vec!["Login Page", "Logout"]);
        assert!(backlog.get(0) == Some("Login Page"));
    }

    #[test]
    fn removal_is_silent() {
        let mut backlog = Backlog::default();
        backlog.add("Login Page");
        backlog.remove("Login Page");
        backlog.remove("Not There");
        assert!(backlog.is_empty());
    }
}

//! Clause and ClauseSet - named units of recommended will content.

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// A recommended clause: its name and why it matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Clause {
    pub name: &'static str,
    pub explanation: &'static str,
}

impl Clause {
    pub const fn new(name: &'static str, explanation: &'static str) -> Self {
        Self { name, explanation }
    }
}

/// Insertion-ordered clauses keyed by name.
///
/// Inserting a name that is already present keeps the first entry. The rule
/// table never declares one clause name with two different texts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    entries: IndexMap<&'static str, &'static str>,
}

impl ClauseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `clause` unless its name is already present. Returns true if added.
    pub fn insert_if_absent(&mut self, clause: Clause) -> bool {
        if self.entries.contains_key(clause.name) {
            return false;
        }
        self.entries.insert(clause.name, clause.explanation);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<Clause> {
        self.entries
            .get_key_value(name)
            .map(|(n, e)| Clause::new(*n, *e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clauses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Clause> + '_ {
        self.entries.iter().map(|(n, e)| Clause::new(*n, *e))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.keys().copied().collect()
    }
}

impl Serialize for ClauseSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

//! A bomber that replays fixed action codes and records what it saw.

use crate::bomber::Bomber;
use crate::config::MatchConfig;
use crate::game::{Position, TerrainMatrix, STAY};

/// Everything a bomber was shown in one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// Terrain matrix of the turn.
    pub terrain: TerrainMatrix,
    /// Own field first, then the other alive bombers.
    pub bombers: Vec<Position>,
    /// Codes of the moves that were open.
    pub available_moves: Vec<i32>,
}

/// Plays `codes` in order, starting over when they run out.
///
/// An empty script always stays in place.
#[derive(Debug, Clone)]
pub struct Scripted {
    name: String,
    codes: Vec<i32>,
    cursor: usize,
    rules: Option<MatchConfig>,
    rules_received: u32,
    observations: Vec<Observation>,
}

impl Scripted {
    /// Create a scripted bomber.
    #[must_use]
    pub fn new(name: impl Into<String>, codes: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            codes,
            cursor: 0,
            rules: None,
            rules_received: 0,
            observations: Vec::new(),
        }
    }

    /// A bomber that returns the same code every turn.
    #[must_use]
    pub fn repeating(name: impl Into<String>, code: i32) -> Self {
        Self::new(name, vec![code])
    }

    /// The rules received, if any.
    #[must_use]
    pub const fn rules(&self) -> Option<MatchConfig> {
        self.rules
    }

    /// How many times the rules were delivered.
    #[must_use]
    pub const fn rules_received(&self) -> u32 {
        self.rules_received
    }

    /// One observation per call to `go`, oldest first.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }
}

impl Bomber for Scripted {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_rules(&mut self, rules: MatchConfig) {
        self.rules = Some(rules);
        self.rules_received += 1;
    }

    fn go(&mut self, arena: &TerrainMatrix, bombers: &[Position], available_moves: &[i32]) -> i32 {
        self.observations.push(Observation {
            terrain: arena.clone(),
            bombers: bombers.to_vec(),
            available_moves: available_moves.to_vec(),
        });

        if self.codes.is_empty() {
            return STAY;
        }
        let code = self.codes[self.cursor % self.codes.len()];
        self.cursor += 1;
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GridArena, Snapshot};

    #[test]
    fn test_script_cycles() {
        let arena = GridArena::from_layout("S.").unwrap();
        let snapshot = Snapshot::capture(&arena).unwrap();
        let mut bomber = Scripted::new("s", vec![4, 13]);

        let codes: Vec<i32> = (0..5)
            .map(|_| bomber.go(snapshot.terrain(), &[Position::new(0, 0)], &[4]))
            .collect();
        assert_eq!(codes, vec![4, 13, 4, 13, 4]);
        assert_eq!(bomber.observations().len(), 5);
        assert_eq!(bomber.observations()[0].available_moves, vec![4]);
    }

    #[test]
    fn test_empty_script_stays() {
        let arena = GridArena::from_layout("S.").unwrap();
        let snapshot = Snapshot::capture(&arena).unwrap();
        let mut bomber = Scripted::new("s", Vec::new());
        assert_eq!(bomber.go(snapshot.terrain(), &[], &[]), STAY);
    }

    #[test]
    fn test_rules_are_recorded() {
        let mut bomber = Scripted::repeating("s", 0);
        assert_eq!(bomber.rules(), None);
        bomber.set_rules(MatchConfig::default());
        assert_eq!(bomber.rules(), Some(MatchConfig::default()));
        assert_eq!(bomber.rules_received(), 1);
    }
}

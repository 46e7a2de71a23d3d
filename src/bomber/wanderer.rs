//! A bomber that walks around without planting.

use crate::bomber::Bomber;
use crate::config::MatchConfig;
use crate::game::{Position, TerrainMatrix, STAY};

/// Rotates through whatever moves it is offered, one per turn.
#[derive(Debug, Clone)]
pub struct Wanderer {
    name: String,
    turn: usize,
}

impl Wanderer {
    /// Create a wanderer.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            turn: 0,
        }
    }
}

impl Bomber for Wanderer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_rules(&mut self, _rules: MatchConfig) {
        self.turn = 0;
    }

    fn go(&mut self, _arena: &TerrainMatrix, _bombers: &[Position], available_moves: &[i32]) -> i32 {
        let turn = self.turn;
        self.turn += 1;
        if available_moves.is_empty() {
            STAY
        } else {
            available_moves[turn % available_moves.len()]
        }
    }
}

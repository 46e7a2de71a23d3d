//! Bombers: the strategies that play a match.
//!
//! A bomber is told the match rules once, then asked for one action code
//! per turn. It sees the turn's terrain matrix, its own field followed by
//! every other alive bomber's field (no names), and the wire codes of the
//! moves currently open to it.

mod hunter;
mod scripted;
mod wanderer;

pub use hunter::Hunter;
pub use scripted::{Observation, Scripted};
pub use wanderer::Wanderer;

use crate::config::MatchConfig;
use crate::game::{Position, TerrainMatrix, STAY};

/// A strategy taking part in a match.
pub trait Bomber {
    /// Name of this bomber, unique within a match.
    fn name(&self) -> &str;

    /// Receive the match rules. Called once, before the first turn.
    fn set_rules(&mut self, rules: MatchConfig);

    /// Choose an action code for this turn.
    ///
    /// `bombers[0]` is this bomber's own field. `available_moves` holds the
    /// codes of directions that are legal right now.
    fn go(
        &mut self,
        arena: &TerrainMatrix,
        bombers: &[Position],
        available_moves: &[i32],
    ) -> i32;
}

/// A bomber that never moves and never plants.
#[derive(Debug, Clone)]
pub struct Idle {
    name: String,
}

impl Idle {
    /// Create an idle bomber.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Bomber for Idle {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_rules(&mut self, _rules: MatchConfig) {}

    fn go(&mut self, _arena: &TerrainMatrix, _bombers: &[Position], _available_moves: &[i32]) -> i32 {
        STAY
    }
}

//! Built-in bombers selectable from the command line.

use super::CliError;
use bomber_match::{Bomber, Hunter, Idle, MatchConfig, Position, TerrainMatrix, Wanderer};

/// A built-in strategy picked by name.
#[derive(Debug, Clone)]
pub(super) enum BuiltinBomber {
    /// Never moves.
    Idle(Idle),
    /// Walks around.
    Wanderer(Wanderer),
    /// Chases and bombs.
    Hunter(Hunter),
}

impl BuiltinBomber {
    fn as_bomber(&self) -> &dyn Bomber {
        match self {
            Self::Idle(b) => b,
            Self::Wanderer(b) => b,
            Self::Hunter(b) => b,
        }
    }

    fn as_bomber_mut(&mut self) -> &mut dyn Bomber {
        match self {
            Self::Idle(b) => b,
            Self::Wanderer(b) => b,
            Self::Hunter(b) => b,
        }
    }
}

impl Bomber for BuiltinBomber {
    fn name(&self) -> &str {
        self.as_bomber().name()
    }

    fn set_rules(&mut self, rules: MatchConfig) {
        self.as_bomber_mut().set_rules(rules);
    }

    fn go(&mut self, arena: &TerrainMatrix, bombers: &[Position], available_moves: &[i32]) -> i32 {
        self.as_bomber_mut().go(arena, bombers, available_moves)
    }
}

/// Parse `kind[:name]` specs. Unnamed bombers become `kind-N` (1-based).
pub(super) fn parse_roster(specs: &[String]) -> Result<Vec<BuiltinBomber>, CliError> {
    specs
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let (kind, name) = match spec.split_once(':') {
                Some((kind, name)) if !name.is_empty() => (kind, name.to_string()),
                Some(_) => {
                    return Err(CliError::new(format!("Empty bomber name in '{spec}'")));
                }
                None => (spec.as_str(), format!("{spec}-{}", i + 1)),
            };
            match kind {
                "idle" => Ok(BuiltinBomber::Idle(Idle::new(name))),
                "wanderer" => Ok(BuiltinBomber::Wanderer(Wanderer::new(name))),
                "hunter" => Ok(BuiltinBomber::Hunter(Hunter::new(name))),
                other => Err(CliError::new(format!(
                    "Unknown bomber kind '{other}' (expected idle, wanderer or hunter)"
                ))),
            }
        })
        .collect()
}

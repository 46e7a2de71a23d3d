//! Match parameters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters fixed for the whole match.
///
/// Every bomber receives them once before the first turn, and the arena
/// receives radius and fuse when each bomber spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Turns played before the match ends in a timeout draw.
    pub max_turns: u32,
    /// Fields a blast reaches in each direction.
    pub detonation_radius: u32,
    /// Flushes between planting a bomb and its detonation.
    pub fuse_length: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_turns: 200,
            detonation_radius: 2,
            fuse_length: 3,
        }
    }
}

impl MatchConfig {
    /// Read a JSON config file. Missing fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// a match config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

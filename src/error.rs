//! Error types for matches, arenas, layouts and configuration.

use std::io;

use thiserror::Error;

use crate::game::Position;

/// Failures raised by an arena when asked to register a bomber.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// Every spawn point of the layout is already taken.
    #[error("no free spawn point left for bomber '{0}'")]
    SpawnPointsExhausted(String),
    /// A bomber with this name was already respawned into the arena.
    #[error("bomber '{0}' is already in the arena")]
    AlreadySpawned(String),
    /// Bombs with a zero fuse would go off before anyone could react.
    #[error("bomber '{0}' needs a fuse length of at least 1")]
    ZeroFuse(String),
}

/// Failures while taking a turn snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The arena shows one alive bomber on two fields.
    #[error("bomber '{name}' is alive on two fields: {first:?} and {second:?}")]
    DuplicateBomber {
        /// Bomber name.
        name: String,
        /// First field in scan order.
        first: Position,
        /// Second field in scan order.
        second: Position,
    },
}

/// Failures while parsing a text arena layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout has no rows.
    #[error("layout is empty")]
    Empty,
    /// A row is wider or narrower than the first row.
    #[error("row {row} has width {found}, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A character that is not part of the layout alphabet.
    #[error("unexpected character {found:?} at line {line}, column {column}")]
    UnknownCell {
        /// One-based line number.
        line: usize,
        /// One-based column number.
        column: usize,
        /// The rejected character.
        found: char,
    },
}

/// Failures while loading or validating a [`MatchConfig`](crate::MatchConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),
    /// The config file is not valid JSON for a match config.
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that stop a match from being built or played.
#[derive(Debug, Error)]
pub enum MatchError {
    /// Two bombers share a name, so the registry would be ambiguous.
    #[error("duplicate bomber name '{0}'")]
    DuplicateBomber(String),
    /// The arena reported an alive bomber the match never registered.
    #[error("bomber '{0}' not found")]
    UnknownBomber(String),
    /// The arena reported an alive bomber that has no field in the turn snapshot.
    #[error("bomber '{0}' is alive but has no position in the snapshot")]
    MissingPosition(String),
    /// `run` was called on a match that has already been played.
    #[error("match has already been played")]
    AlreadyPlayed,
    /// The arena refused to spawn a bomber.
    #[error(transparent)]
    Arena(#[from] ArenaError),
    /// The turn snapshot could not be built from the arena.
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Result alias for match operations.
pub type MatchResult<T> = Result<T, MatchError>;

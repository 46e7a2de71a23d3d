// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Bomber Match: a deterministic, turn-based elimination arena for bots.
//!
//! Bombers act one after another on a shared grid: they may plant timed
//! bombs and step to a neighbouring field. The match ends when at most one
//! bomber is left alive or the turn budget runs out.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Match runner (turn loop)          │
//! ├──────────────────┬──────────────────┤
//! │   Bombers        │   Snapshots      │
//! ├──────────────────┴──────────────────┤
//! │   Arena (fields, bombs, blasts)     │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use bomber_match::{run_match, Bomber, GridArena, Idle, MatchConfig, MatchOutcome};
//!
//! let arena = GridArena::with_default_layout().unwrap();
//! let mut a = Idle::new("a");
//! let mut b = Idle::new("b");
//! let config = MatchConfig { max_turns: 5, ..MatchConfig::default() };
//!
//! let bombers: Vec<&mut dyn Bomber> = vec![&mut a, &mut b];
//! let report = run_match(arena, bombers, config).unwrap();
//! assert_eq!(report.outcome, MatchOutcome::Timeout);
//! ```

pub mod bomber;
pub mod config;
pub mod error;
pub mod game;
pub mod runner;

pub use bomber::{Bomber, Hunter, Idle, Scripted, Wanderer};
pub use config::MatchConfig;
pub use error::{ArenaError, ConfigError, LayoutError, MatchError, MatchResult, SnapshotError};
pub use game::{Action, ActionCode, Arena, Direction, GridArena, Position, Snapshot, TerrainMatrix};
pub use runner::{run_match, BomberStats, Match, MatchOutcome, MatchReport};

//! Match orchestration.
//!
//! A [`Match`] owns the arena for its whole duration and drives the turn
//! loop:
//!
//! 1. Snapshot the arena and read the list of alive bombers.
//! 2. Ask each of them, in the arena's order, for an action code. Bombers
//!    share the turn's snapshot but get their legal moves from the live
//!    arena, so they see moves made earlier in the same turn.
//! 3. Apply each action right away: plant first, then move.
//! 4. Flush the arena and stop on zero or one survivor.
//!
//! Running out of turns ends the match in a timeout draw.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, info, trace, warn};

use crate::bomber::Bomber;
use crate::config::MatchConfig;
use crate::error::{MatchError, MatchResult};
use crate::game::{encode_directions, ActionCode, Arena, Snapshot};

/// How a match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Exactly one bomber survived the turn.
    Winner {
        /// Name of the survivor.
        name: String,
        /// Zero-based turn in which the match was decided.
        turn: u32,
    },
    /// The last bombers died in the same turn.
    Draw {
        /// Zero-based turn in which the last bombers died.
        turn: u32,
    },
    /// The turn budget ran out with two or more bombers alive.
    Timeout,
}

impl MatchOutcome {
    /// Name of the winner, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        match self {
            Self::Winner { name, .. } => Some(name),
            Self::Draw { .. } | Self::Timeout => None,
        }
    }

    /// Turn the match was decided in; `None` for a timeout.
    #[must_use]
    pub const fn turn(&self) -> Option<u32> {
        match self {
            Self::Winner { turn, .. } | Self::Draw { turn } => Some(*turn),
            Self::Timeout => None,
        }
    }

    /// Whether nobody won.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        !matches!(self, Self::Winner { .. })
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Winner { name, turn } => write!(f, "The winner is ... {name} [action #{turn}]"),
            Self::Draw { turn } => write!(f, "Draw! No one survived [action #{turn}]"),
            Self::Timeout => write!(f, "Draw! Timeout"),
        }
    }
}

/// Per-bomber counters collected during a match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BomberStats {
    /// Bomber name.
    pub name: String,
    /// Bombs the arena accepted.
    pub bombs_planted: u32,
    /// Moves the arena accepted.
    pub moves_made: u32,
    /// Plant or move requests the arena turned down.
    pub rejected_requests: u32,
    /// Turns whose movement code was neither a direction nor "stay".
    pub invalid_actions: u32,
    /// Turn the bomber died in (`None` if it survived).
    pub eliminated_turn: Option<u32>,
}

impl BomberStats {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

/// Result of a played match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// How the match ended.
    pub outcome: MatchOutcome,
    /// Turns played, including the deciding one.
    pub turns_played: u32,
    /// Counters per bomber, in registration order.
    pub stats: Vec<BomberStats>,
}

impl MatchReport {
    /// Stats of one bomber.
    #[must_use]
    pub fn stats_for(&self, name: &str) -> Option<&BomberStats> {
        self.stats.iter().find(|s| s.name == name)
    }
}

/// A match between bombers in an arena.
///
/// The bombers stay owned by the caller; the match borrows them for its
/// lifetime so their state can be inspected afterwards.
pub struct Match<'a, A: Arena> {
    arena: A,
    bombers: Vec<&'a mut dyn Bomber>,
    /// Bomber name to index in `bombers`.
    registry: HashMap<String, usize>,
    config: MatchConfig,
    stats: Vec<BomberStats>,
    played: bool,
}

impl<A: Arena + fmt::Debug> fmt::Debug for Match<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("arena", &self.arena)
            .field("bombers", &self.stats.iter().map(|s| &s.name).collect::<Vec<_>>())
            .field("config", &self.config)
            .field("played", &self.played)
            .finish_non_exhaustive()
    }
}

impl<'a, A: Arena> Match<'a, A> {
    /// Register the bombers and spawn each of them into the arena.
    ///
    /// # Errors
    ///
    /// Returns an error if two bombers share a name (nothing is spawned in
    /// that case) or the arena refuses a spawn.
    pub fn new(
        mut arena: A,
        bombers: Vec<&'a mut dyn Bomber>,
        config: MatchConfig,
    ) -> MatchResult<Self> {
        let mut registry = HashMap::with_capacity(bombers.len());
        for (idx, bomber) in bombers.iter().enumerate() {
            if registry.insert(bomber.name().to_string(), idx).is_some() {
                return Err(MatchError::DuplicateBomber(bomber.name().to_string()));
            }
        }

        for bomber in &bombers {
            arena.respawn_bomber(bomber.name(), config.detonation_radius, config.fuse_length)?;
        }

        let stats = bombers.iter().map(|b| BomberStats::new(b.name())).collect();

        Ok(Self {
            arena,
            bombers,
            registry,
            config,
            stats,
            played: false,
        })
    }

    /// The arena in its current state.
    #[must_use]
    pub fn arena(&self) -> &A {
        &self.arena
    }

    /// Give the arena back, ending the match's ownership of it.
    #[must_use]
    pub fn into_arena(self) -> A {
        self.arena
    }

    /// The match parameters.
    #[must_use]
    pub const fn config(&self) -> MatchConfig {
        self.config
    }

    /// Play the match to the end.
    ///
    /// # Errors
    ///
    /// Returns an error if the match was already played, if the arena
    /// reports an alive bomber that the match does not know or that is
    /// missing from the turn snapshot, or if the snapshot cannot be taken.
    pub fn run(&mut self) -> MatchResult<MatchReport> {
        if self.played {
            return Err(MatchError::AlreadyPlayed);
        }
        self.played = true;

        for bomber in &mut self.bombers {
            bomber.set_rules(self.config);
        }
        info!(
            bombers = self.bombers.len(),
            max_turns = self.config.max_turns,
            detonation_radius = self.config.detonation_radius,
            fuse_length = self.config.fuse_length,
            "match started"
        );

        for turn in 0..self.config.max_turns {
            self.play_turn(turn)?;
            self.arena.flush();

            let alive = self.arena.alive_bombers();
            self.record_eliminations(turn, &alive);

            match alive.as_slice() {
                [] => return Ok(self.finish(MatchOutcome::Draw { turn }, turn + 1)),
                [winner] => {
                    let outcome = MatchOutcome::Winner {
                        name: winner.clone(),
                        turn,
                    };
                    return Ok(self.finish(outcome, turn + 1));
                }
                _ => {}
            }
        }

        Ok(self.finish(MatchOutcome::Timeout, self.config.max_turns))
    }

    /// Let every bomber alive at the start of the turn act once.
    fn play_turn(&mut self, turn: u32) -> MatchResult<()> {
        let snapshot = Snapshot::capture(&self.arena)?;
        let alive = self.arena.alive_bombers();
        debug!(turn, alive = alive.len(), "turn started");

        for name in &alive {
            let idx = *self
                .registry
                .get(name)
                .ok_or_else(|| MatchError::UnknownBomber(name.clone()))?;
            let view = snapshot
                .relative_positions(name)
                .ok_or_else(|| MatchError::MissingPosition(name.clone()))?;
            let moves = encode_directions(&self.arena.available_moves(name));

            let code = ActionCode(self.bombers[idx].go(snapshot.terrain(), &view, &moves));
            debug!(turn, bomber = %name, code = code.0, "bomber acted");
            self.apply(idx, name, code);
        }
        Ok(())
    }

    /// Forward an action code to the arena: plant first, then move.
    fn apply(&mut self, idx: usize, name: &str, code: ActionCode) {
        if code.plants_bomb() {
            if self.arena.plant_bomb(name) {
                self.stats[idx].bombs_planted += 1;
            } else {
                trace!(bomber = name, "plant rejected");
                self.stats[idx].rejected_requests += 1;
            }
        }

        if code.is_violation() {
            warn!(bomber = name, code = code.0, "action code out of range, treating as stay");
            self.stats[idx].invalid_actions += 1;
            return;
        }

        if let Some(direction) = code.direction() {
            if self.arena.move_bomber(name, direction) {
                self.stats[idx].moves_made += 1;
            } else {
                trace!(bomber = name, %direction, "move rejected");
                self.stats[idx].rejected_requests += 1;
            }
        }
    }

    fn record_eliminations(&mut self, turn: u32, alive: &[String]) {
        for stats in &mut self.stats {
            if stats.eliminated_turn.is_none() && !alive.contains(&stats.name) {
                debug!(turn, bomber = %stats.name, "bomber eliminated");
                stats.eliminated_turn = Some(turn);
            }
        }
    }

    fn finish(&self, outcome: MatchOutcome, turns_played: u32) -> MatchReport {
        info!(%outcome, turns_played, "match finished");
        MatchReport {
            outcome,
            turns_played,
            stats: self.stats.clone(),
        }
    }
}

/// Build a match and play it in one go.
///
/// # Errors
///
/// Returns any error from [`Match::new`] or [`Match::run`].
pub fn run_match<A: Arena>(
    arena: A,
    bombers: Vec<&mut dyn Bomber>,
    config: MatchConfig,
) -> MatchResult<MatchReport> {
    Match::new(arena, bombers, config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bomber::{Idle, Scripted};
    use crate::error::ArenaError;
    use crate::game::{GridArena, Position};

    fn config(max_turns: u32) -> MatchConfig {
        MatchConfig {
            max_turns,
            detonation_radius: 1,
            fuse_length: 2,
        }
    }

    #[test]
    fn test_outcome_display() {
        let win = MatchOutcome::Winner {
            name: "alpha".to_string(),
            turn: 7,
        };
        assert_eq!(win.to_string(), "The winner is ... alpha [action #7]");
        assert_eq!(
            MatchOutcome::Draw { turn: 3 }.to_string(),
            "Draw! No one survived [action #3]"
        );
        assert_eq!(MatchOutcome::Timeout.to_string(), "Draw! Timeout");
    }

    #[test]
    fn test_outcome_accessors() {
        let win = MatchOutcome::Winner {
            name: "alpha".to_string(),
            turn: 7,
        };
        assert_eq!(win.winner(), Some("alpha"));
        assert_eq!(win.turn(), Some(7));
        assert!(!win.is_draw());
        assert_eq!(MatchOutcome::Timeout.turn(), None);
        assert!(MatchOutcome::Draw { turn: 0 }.is_draw());
    }

    #[test]
    fn test_duplicate_names_rejected_before_spawn() {
        let arena = GridArena::from_layout("S.S").unwrap();
        let mut a = Idle::new("twin");
        let mut b = Idle::new("twin");
        let result = Match::new(arena, vec![&mut a, &mut b], config(5));
        assert!(matches!(result, Err(MatchError::DuplicateBomber(name)) if name == "twin"));
    }

    #[test]
    fn test_zero_turn_budget_times_out() {
        let arena = GridArena::from_layout("S.S").unwrap();
        let mut a = Scripted::repeating("a", 10);
        let mut b = Idle::new("b");
        let mut game = Match::new(arena, vec![&mut a, &mut b], config(0)).unwrap();
        assert_eq!(game.config().max_turns, 0);

        let report = game.run().unwrap();
        assert_eq!(report.outcome, MatchOutcome::Timeout);
        assert_eq!(report.turns_played, 0);
        assert_eq!(report.stats_for("a").unwrap().bombs_planted, 0);

        // Nobody acted, so the arena is exactly as spawned.
        let arena = game.into_arena();
        assert_eq!(arena.alive_bombers(), vec!["a", "b"]);
        assert!(!arena.field(Position::new(0, 0)).unwrap().has_bomb());
        drop(arena);
        assert!(a.observations().is_empty());
        assert_eq!(a.rules_received(), 1);
    }

    #[test]
    fn test_zero_fuse_refused_by_grid_arena() {
        let arena = GridArena::from_layout("S.S").unwrap();
        let mut a = Idle::new("a");
        let result = Match::new(arena, vec![&mut a], MatchConfig { fuse_length: 0, ..config(5) });
        assert!(matches!(
            result,
            Err(MatchError::Arena(ArenaError::ZeroFuse(name))) if name == "a"
        ));
    }

    #[test]
    fn test_spawn_failure_propagates() {
        let arena = GridArena::from_layout("S..").unwrap();
        let mut a = Idle::new("a");
        let mut b = Idle::new("b");
        let result = Match::new(arena, vec![&mut a, &mut b], config(5));
        assert!(matches!(result, Err(MatchError::Arena(_))));
    }

    #[test]
    fn test_run_twice_fails() {
        let arena = GridArena::from_layout("S.S").unwrap();
        let mut a = Idle::new("a");
        let mut b = Idle::new("b");
        let mut game = Match::new(arena, vec![&mut a, &mut b], config(2)).unwrap();
        assert_eq!(game.run().unwrap().outcome, MatchOutcome::Timeout);
        assert!(matches!(game.run(), Err(MatchError::AlreadyPlayed)));
    }

    #[test]
    fn test_plant_then_move_order() {
        // "a" plants and steps right in the same turn; the bomb stays behind.
        let arena = GridArena::from_layout("S...S").unwrap();
        let mut a = Scripted::new("a", vec![14, 4, 0]);
        let mut b = Idle::new("b");
        let mut game = Match::new(arena, vec![&mut a, &mut b], config(1)).unwrap();
        let report = game.run().unwrap();

        let field = game.arena().field(Position::new(0, 0)).unwrap();
        assert!(field.has_bomb());
        assert_eq!(game.arena().position_of("a"), Some(Position::new(0, 1)));
        let stats = report.stats_for("a").unwrap();
        assert_eq!((stats.bombs_planted, stats.moves_made), (1, 1));
    }

    #[test]
    fn test_invalid_code_counts_and_stays() {
        let arena = GridArena::from_layout("S...S").unwrap();
        let mut a = Scripted::repeating("a", 7);
        let mut b = Idle::new("b");
        let mut game = Match::new(arena, vec![&mut a, &mut b], config(3)).unwrap();
        let report = game.run().unwrap();

        assert_eq!(report.outcome, MatchOutcome::Timeout);
        assert_eq!(report.turns_played, 3);
        let stats = report.stats_for("a").unwrap();
        assert_eq!(stats.invalid_actions, 3);
        assert_eq!(stats.moves_made, 0);
        assert_eq!(game.arena().position_of("a"), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_elimination_turn_recorded() {
        // "a" plants where it stands and never moves; fuse 2 means it dies in turn 1.
        let arena = GridArena::from_layout("S...S").unwrap();
        let mut a = Scripted::repeating("a", 10);
        let mut b = Idle::new("b");
        let report = run_match(arena, vec![&mut a, &mut b], config(10)).unwrap();

        assert_eq!(
            report.outcome,
            MatchOutcome::Winner {
                name: "b".to_string(),
                turn: 1
            }
        );
        assert_eq!(report.turns_played, 2);
        assert_eq!(report.stats_for("a").unwrap().eliminated_turn, Some(1));
        assert_eq!(report.stats_for("b").unwrap().eliminated_turn, None);
        // Second plant on the same field is refused.
        assert_eq!(report.stats_for("a").unwrap().rejected_requests, 1);
    }
}

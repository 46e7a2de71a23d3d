//! A greedy bomber that chases the nearest opponent.
//!
//! Each turn it:
//! 1. Plants and steps aside when an opponent shares its row or column
//!    within blast reach.
//! 2. Otherwise steps towards the nearest opponent, avoiding fields in
//!    reach of a bomb.
//! 3. Leaves a threatened field when nothing better is possible.

use crate::bomber::Bomber;
use crate::config::MatchConfig;
use crate::game::{Action, Direction, Position, TerrainMatrix, STAY};

/// Chases, plants, and dodges.
#[derive(Debug, Clone)]
pub struct Hunter {
    name: String,
    detonation_radius: u32,
}

impl Hunter {
    /// Create a hunter. Until rules arrive it assumes the default radius.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detonation_radius: MatchConfig::default().detonation_radius,
        }
    }

    fn reach(&self) -> usize {
        usize::try_from(self.detonation_radius).unwrap_or(usize::MAX)
    }

    /// Whether `target` lies in line with `origin` within blast reach.
    fn in_reach(&self, origin: Position, target: Position) -> bool {
        let reach = self.reach();
        (origin.row == target.row && origin.col.abs_diff(target.col) <= reach)
            || (origin.col == target.col && origin.row.abs_diff(target.row) <= reach)
    }

    /// Whether any bomb on the terrain could hit `position`.
    fn threatened(&self, arena: &TerrainMatrix, position: Position) -> bool {
        (0..arena.rows()).any(|row| {
            (0..arena.cols()).any(|col| {
                arena.get(row, col).is_some_and(|value| value > 0)
                    && self.in_reach(Position::new(row, col), position)
            })
        })
    }

    fn destination(arena: &TerrainMatrix, from: Position, direction: Direction) -> Option<Position> {
        from.step(direction, arena.rows(), arena.cols())
    }

    /// First open move whose destination is out of every bomb's reach,
    /// preferring directions in `preferred`.
    fn safe_move(
        &self,
        arena: &TerrainMatrix,
        me: Position,
        moves: &[Direction],
        preferred: &[Direction],
    ) -> Option<Direction> {
        let is_safe = |direction: Direction| {
            Self::destination(arena, me, direction).is_some_and(|to| !self.threatened(arena, to))
        };
        preferred
            .iter()
            .chain(Direction::ALL.iter())
            .copied()
            .filter(|direction| moves.contains(direction))
            .find(|&direction| is_safe(direction))
    }
}

impl Bomber for Hunter {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_rules(&mut self, rules: MatchConfig) {
        self.detonation_radius = rules.detonation_radius;
    }

    fn go(&mut self, arena: &TerrainMatrix, bombers: &[Position], available_moves: &[i32]) -> i32 {
        let Some((&me, others)) = bombers.split_first() else {
            return STAY;
        };
        let moves: Vec<Direction> = available_moves
            .iter()
            .filter_map(|&code| Direction::from_code(code))
            .collect();

        let Some(&target) = others.iter().min_by_key(|other| me.distance(**other)) else {
            return STAY;
        };

        let standing_on_bomb = arena.at(me) > 0;
        if !standing_on_bomb && self.in_reach(me, target) {
            // Every neighbour is inside the new blast; stepping sideways leaves
            // a corner to duck behind next turn.
            let sideways: &[Direction] = if me.row == target.row {
                &[Direction::Up, Direction::Down]
            } else {
                &[Direction::Left, Direction::Right]
            };
            if let Some(escape) = self.safe_move(arena, me, &moves, sideways) {
                return Action::plant(Some(escape)).code();
            }
        }

        let closer: Vec<Direction> = moves
            .iter()
            .copied()
            .filter(|&direction| {
                Self::destination(arena, me, direction)
                    .is_some_and(|to| to.distance(target) < me.distance(target))
            })
            .collect();
        if let Some(step) = self.safe_move(arena, me, &closer, &[]) {
            return Action::step(step).code();
        }

        if self.threatened(arena, me) {
            if let Some(escape) = self.safe_move(arena, me, &moves, &[]) {
                return Action::step(escape).code();
            }
        }
        STAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{encode_directions, Arena, GridArena, Snapshot};

    fn decide(hunter: &mut Hunter, arena: &GridArena, me: &str) -> i32 {
        let snapshot = Snapshot::capture(arena).unwrap();
        let view = snapshot.relative_positions(me).unwrap();
        let moves = encode_directions(&arena.available_moves(me));
        hunter.go(snapshot.terrain(), &view, &moves)
    }

    #[test]
    fn test_plants_when_opponent_in_line() {
        let mut arena = GridArena::from_layout("...\nS.S\n...").unwrap();
        arena.respawn_bomber("h", 2, 3).unwrap();
        arena.respawn_bomber("x", 2, 3).unwrap();

        let mut hunter = Hunter::new("h");
        hunter.set_rules(MatchConfig {
            max_turns: 10,
            detonation_radius: 2,
            fuse_length: 3,
        });
        let code = decide(&mut hunter, &arena, "h");
        assert_eq!(code, Action::plant(Some(Direction::Up)).code());
    }

    #[test]
    fn test_walks_towards_opponent() {
        let mut arena = GridArena::from_layout("S....\n.....\n....S").unwrap();
        arena.respawn_bomber("h", 1, 3).unwrap();
        arena.respawn_bomber("x", 1, 3).unwrap();

        let mut hunter = Hunter::new("h");
        hunter.set_rules(MatchConfig {
            max_turns: 10,
            detonation_radius: 1,
            fuse_length: 3,
        });
        let code = decide(&mut hunter, &arena, "h");
        assert!(code == Direction::Down.code() || code == Direction::Right.code());
    }

    #[test]
    fn test_avoids_bomb_field_while_chasing() {
        let mut arena = GridArena::from_layout("S.#\n..#\n###\n##S").unwrap();
        arena.respawn_bomber("h", 1, 3).unwrap();
        arena.respawn_bomber("x", 1, 3).unwrap();
        // Own bomb blocks the right-hand field.
        assert!(arena.move_bomber("h", Direction::Right));
        assert!(arena.plant_bomb("h"));
        assert!(arena.move_bomber("h", Direction::Left));

        let mut hunter = Hunter::new("h");
        hunter.set_rules(MatchConfig {
            max_turns: 10,
            detonation_radius: 1,
            fuse_length: 3,
        });
        let code = decide(&mut hunter, &arena, "h");
        assert_eq!(code, Direction::Down.code());
    }

    #[test]
    fn test_alone_stays() {
        let mut hunter = Hunter::new("h");
        let arena = GridArena::from_layout("S").unwrap();
        let snapshot = Snapshot::capture(&arena).unwrap();
        assert_eq!(hunter.go(snapshot.terrain(), &[Position::new(0, 0)], &[]), STAY);
        assert_eq!(hunter.go(snapshot.terrain(), &[], &[]), STAY);
    }
}

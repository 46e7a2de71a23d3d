//! The arena capability used by a match.
//!
//! A match never reaches into an arena's internals. It spawns bombers,
//! forwards plant and move requests, asks which moves are legal, advances
//! world time with [`Arena::flush`], and reads fields to build snapshots.

use crate::error::ArenaError;
use crate::game::Direction;

/// A field coordinate: row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index (0 is the top row).
    pub row: usize,
    /// Column index (0 is the leftmost column).
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step away, if it stays inside
    /// a grid of `rows` by `cols`.
    #[must_use]
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < rows && col < cols).then_some(Position { row, col })
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub const fn distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// A bomber standing on a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    /// Bomber name.
    pub name: String,
    /// Whether the bomber is still alive. Dead bombers stay where they fell.
    pub alive: bool,
}

/// A bomb waiting to go off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bomb {
    /// Flushes left before detonation (at least 1 while the bomb is live).
    pub fuse: u32,
    /// Number of fields the blast reaches in each direction.
    pub radius: u32,
}

/// A passable field of the arena.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    /// Active bomb on this field, if any.
    pub bomb: Option<Bomb>,
    /// Bombers standing here, alive or dead, in arrival order.
    pub occupants: Vec<Occupant>,
}

impl Field {
    /// Whether an active bomb lies on this field.
    #[must_use]
    pub const fn has_bomb(&self) -> bool {
        self.bomb.is_some()
    }

    /// Iterate over the names of alive bombers standing here.
    pub fn alive_bombers(&self) -> impl Iterator<Item = &str> {
        self.occupants
            .iter()
            .filter(|o| o.alive)
            .map(|o| o.name.as_str())
    }
}

/// The world a match is played in.
///
/// All mutation happens through these operations, one at a time, from the
/// match loop. Moves and plants take effect immediately, so later queries in
/// the same turn observe them.
pub trait Arena {
    /// Register a bomber at its starting field.
    ///
    /// Bombs it plants use `detonation_radius` and `fuse_length`.
    ///
    /// # Errors
    ///
    /// Returns an error if the arena cannot place the bomber.
    fn respawn_bomber(
        &mut self,
        name: &str,
        detonation_radius: u32,
        fuse_length: u32,
    ) -> Result<(), ArenaError>;

    /// Names of bombers currently alive, in the arena's processing order.
    fn alive_bombers(&self) -> Vec<String>;

    /// Legal directions for the bomber from its current field.
    fn available_moves(&self, name: &str) -> Vec<Direction>;

    /// Plant a bomb on the bomber's field. Returns whether a bomb was planted.
    fn plant_bomb(&mut self, name: &str) -> bool;

    /// Step the bomber in `direction`. Returns whether the bomber moved.
    fn move_bomber(&mut self, name: &str, direction: Direction) -> bool;

    /// Advance world time by one turn: fuses, detonations, deaths.
    fn flush(&mut self);

    /// Grid size as `(rows, cols)`.
    fn dimensions(&self) -> (usize, usize);

    /// The field at `position`, or `None` where there is no passable field.
    fn field(&self, position: Position) -> Option<&Field>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_grid() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.step(Direction::Up, 3, 3), Some(Position::new(0, 1)));
        assert_eq!(pos.step(Direction::Right, 3, 3), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_step_off_grid() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3, 3), None);
        assert_eq!(corner.step(Direction::Left, 3, 3), None);
        let far = Position::new(2, 2);
        assert_eq!(far.step(Direction::Down, 3, 3), None);
        assert_eq!(far.step(Direction::Right, 3, 3), None);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Position::new(1, 4).distance(Position::new(3, 1)), 5);
    }

    #[test]
    fn test_field_alive_bombers_skips_dead() {
        let field = Field {
            bomb: None,
            occupants: vec![
                Occupant {
                    name: "a".to_string(),
                    alive: false,
                },
                Occupant {
                    name: "b".to_string(),
                    alive: true,
                },
            ],
        };
        assert_eq!(field.alive_bombers().collect::<Vec<_>>(), vec!["b"]);
    }
}

//! Movement directions and their wire codes.
//!
//! Codes are what bombers see in their list of available moves and what
//! they send back in the movement part of an action code.

use std::fmt;

/// A step to one of the four neighbouring fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Wire code of this direction (`1..=4`).
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::Right => 4,
        }
    }

    /// Decode a wire code.
    ///
    /// Returns `None` for `0` (stay in place) and for any other value
    /// outside `1..=4`.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Direction::Up),
            2 => Some(Direction::Down),
            3 => Some(Direction::Left),
            4 => Some(Direction::Right),
            _ => None,
        }
    }

    /// Row and column offset of one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// The direction pointing back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl TryFrom<i32> for Direction {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Direction::from_code(code).ok_or(code)
    }
}

impl From<Direction> for i32 {
    fn from(direction: Direction) -> Self {
        direction.code()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// Encode a list of directions into wire codes.
#[must_use]
pub fn encode_directions(directions: &[Direction]) -> Vec<i32> {
    directions.iter().map(|d| d.code()).collect()
}

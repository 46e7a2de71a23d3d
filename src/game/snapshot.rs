//! Per-turn arena snapshots handed to bombers.
//!
//! A snapshot is taken once at the start of a turn and is never updated,
//! even though bombers acting earlier in the turn already move around the
//! live arena. Every bomber deciding in that turn sees the same terrain.

use crate::error::SnapshotError;
use crate::game::{Arena, Position};

/// Terrain value of a position without a field.
pub const NO_FIELD: i32 = -1;

/// Terrain value of an open field without a bomb.
pub const OPEN_FIELD: i32 = 0;

/// Terrain of the arena as plain integers, row-major.
///
/// Each cell is [`NO_FIELD`], [`OPEN_FIELD`], or the remaining fuse of the
/// bomb lying there (at least 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl TerrainMatrix {
    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Value at `(row, col)`, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Value at a position, treating anything outside as [`NO_FIELD`].
    #[must_use]
    pub fn at(&self, position: Position) -> i32 {
        self.get(position.row, position.col).unwrap_or(NO_FIELD)
    }

    /// One row of the matrix, or `None` outside the matrix.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[i32]> {
        if row >= self.rows {
            return None;
        }
        self.cells.get(row * self.cols..(row + 1) * self.cols)
    }

    /// All cells, row-major.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }

    /// Copy into nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells.chunks(self.cols.max(1)).map(<[i32]>::to_vec).collect()
    }
}

/// Frozen view of the arena at the start of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    terrain: TerrainMatrix,
    /// Alive bombers in row-major scan order of their fields.
    alive_positions: Vec<(String, Position)>,
}

impl Snapshot {
    /// Scan every field of the arena once, row by row.
    ///
    /// # Errors
    ///
    /// Returns an error if the arena shows the same alive bomber on two
    /// fields.
    pub fn capture<A: Arena + ?Sized>(arena: &A) -> Result<Self, SnapshotError> {
        let (rows, cols) = arena.dimensions();
        let mut cells = Vec::with_capacity(rows * cols);
        let mut alive_positions: Vec<(String, Position)> = Vec::new();

        for row in 0..rows {
            for col in 0..cols {
                let position = Position::new(row, col);
                let Some(field) = arena.field(position) else {
                    cells.push(NO_FIELD);
                    continue;
                };

                let value = field.bomb.map_or(OPEN_FIELD, |bomb| {
                    i32::try_from(bomb.fuse).unwrap_or(i32::MAX).max(1)
                });
                cells.push(value);

                for name in field.alive_bombers() {
                    if let Some(&(_, first)) = alive_positions.iter().find(|(known, _)| known == name) {
                        return Err(SnapshotError::DuplicateBomber {
                            name: name.to_string(),
                            first,
                            second: position,
                        });
                    }
                    alive_positions.push((name.to_string(), position));
                }
            }
        }

        Ok(Self {
            terrain: TerrainMatrix { rows, cols, cells },
            alive_positions,
        })
    }

    /// The terrain matrix.
    #[must_use]
    pub fn terrain(&self) -> &TerrainMatrix {
        &self.terrain
    }

    /// Alive bombers and their fields, in scan order.
    #[must_use]
    pub fn alive_positions(&self) -> &[(String, Position)] {
        &self.alive_positions
    }

    /// Field of an alive bomber at snapshot time.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<Position> {
        self.alive_positions
            .iter()
            .find(|(known, _)| known == name)
            .map(|&(_, position)| position)
    }

    /// The egocentric view of one bomber.
    ///
    /// Row 0 is the bomber's own field; the other alive bombers follow in
    /// scan order without their names. Returns `None` if the bomber was not
    /// alive when the snapshot was taken.
    #[must_use]
    pub fn relative_positions(&self, name: &str) -> Option<Vec<Position>> {
        let own = self.position_of(name)?;
        let mut view = Vec::with_capacity(self.alive_positions.len());
        view.push(own);
        view.extend(
            self.alive_positions
                .iter()
                .filter(|(other, _)| other != name)
                .map(|&(_, position)| position),
        );
        Some(view)
    }
}

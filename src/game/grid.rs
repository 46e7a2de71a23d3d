//! Grid arena built from a text layout.
//!
//! Layout alphabet:
//! - `#` no field (impassable)
//! - `.` open field
//! - `S` open field and spawn point
//!
//! Spawn points are handed out in row-major order as bombers are respawned.

use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{ArenaError, LayoutError};
use crate::game::{resolve_bombs, Arena, Bomb, Direction, Field, Occupant, Position};

/// A bomber tracked by the arena.
#[derive(Debug, Clone)]
struct BomberSlot {
    name: String,
    position: Position,
    alive: bool,
    detonation_radius: u32,
    fuse_length: u32,
}

/// Rectangular arena of open and missing fields.
#[derive(Debug, Clone)]
pub struct GridArena {
    rows: usize,
    cols: usize,
    /// Fields in row-major order; `None` where there is no field.
    fields: Vec<Option<Field>>,
    spawn_points: Vec<Position>,
    next_spawn: usize,
    /// Bombers in spawn order.
    bombers: Vec<BomberSlot>,
}

impl GridArena {
    /// 11×11 arena with a pillar grid and one spawn point in each corner.
    pub const DEFAULT_LAYOUT: &'static str = "\
S.........S
.#.#.#.#.#.
...........
.#.#.#.#.#.
...........
.#.#.#.#.#.
...........
.#.#.#.#.#.
...........
.#.#.#.#.#.
S.........S
";

    /// Parse a layout.
    ///
    /// Blank lines are skipped and trailing whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout is empty, rows differ in width, or a
    /// character is outside the layout alphabet.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let mut fields = Vec::new();
        let mut spawn_points = Vec::new();
        let mut cols = None;
        let mut rows = 0;

        for (line_idx, line) in layout.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let width = line.chars().count();
            let expected = *cols.get_or_insert(width);
            if width != expected {
                return Err(LayoutError::RaggedRow {
                    row: rows,
                    expected,
                    found: width,
                });
            }

            for (col, ch) in line.chars().enumerate() {
                let field = match ch {
                    '#' => None,
                    '.' => Some(Field::default()),
                    'S' => {
                        spawn_points.push(Position::new(rows, col));
                        Some(Field::default())
                    }
                    found => {
                        return Err(LayoutError::UnknownCell {
                            line: line_idx + 1,
                            column: col + 1,
                            found,
                        });
                    }
                };
                fields.push(field);
            }
            rows += 1;
        }

        let Some(cols) = cols else {
            return Err(LayoutError::Empty);
        };

        Ok(Self {
            rows,
            cols,
            fields,
            spawn_points,
            next_spawn: 0,
            bombers: Vec::new(),
        })
    }

    /// Arena built from [`GridArena::DEFAULT_LAYOUT`].
    ///
    /// # Errors
    ///
    /// Never fails for the built-in layout; the `Result` mirrors
    /// [`GridArena::from_layout`].
    pub fn with_default_layout() -> Result<Self, LayoutError> {
        Self::from_layout(Self::DEFAULT_LAYOUT)
    }

    /// Spawn points in the order they are handed out.
    #[must_use]
    pub fn spawn_points(&self) -> &[Position] {
        &self.spawn_points
    }

    /// Number of passable fields.
    #[must_use]
    pub fn open_fields(&self) -> usize {
        self.fields.iter().flatten().count()
    }

    /// Current field of a bomber, alive or dead.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<Position> {
        self.slot(name).map(|slot| slot.position)
    }

    /// Whether the bomber is known and alive.
    #[must_use]
    pub fn is_alive(&self, name: &str) -> bool {
        self.slot(name).is_some_and(|slot| slot.alive)
    }

    fn slot(&self, name: &str) -> Option<&BomberSlot> {
        self.bombers.iter().find(|slot| slot.name == name)
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.cols + position.col
    }

    fn field_mut(&mut self, position: Position) -> Option<&mut Field> {
        let idx = self.index(position);
        self.fields[idx].as_mut()
    }

    /// Fields a bomber at `position` may step onto.
    fn open_neighbours(&self, position: Position) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                position
                    .step(direction, self.rows, self.cols)
                    .and_then(|next| self.field(next))
                    .is_some_and(|field| !field.has_bomb())
            })
            .collect()
    }

    fn kill_at(&mut self, position: Position) {
        if let Some(field) = self.field_mut(position) {
            for occupant in &mut field.occupants {
                occupant.alive = false;
            }
        }
        for slot in &mut self.bombers {
            if slot.alive && slot.position == position {
                debug!(bomber = %slot.name, row = position.row, col = position.col, "bomber caught in blast");
                slot.alive = false;
            }
        }
    }
}

impl FromStr for GridArena {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}

impl Arena for GridArena {
    fn respawn_bomber(
        &mut self,
        name: &str,
        detonation_radius: u32,
        fuse_length: u32,
    ) -> Result<(), ArenaError> {
        if self.slot(name).is_some() {
            return Err(ArenaError::AlreadySpawned(name.to_string()));
        }
        if fuse_length == 0 {
            return Err(ArenaError::ZeroFuse(name.to_string()));
        }
        let Some(&position) = self.spawn_points.get(self.next_spawn) else {
            return Err(ArenaError::SpawnPointsExhausted(name.to_string()));
        };
        self.next_spawn += 1;

        if let Some(field) = self.field_mut(position) {
            field.occupants.push(Occupant {
                name: name.to_string(),
                alive: true,
            });
        }
        self.bombers.push(BomberSlot {
            name: name.to_string(),
            position,
            alive: true,
            detonation_radius,
            fuse_length,
        });
        debug!(bomber = name, row = position.row, col = position.col, "bomber spawned");
        Ok(())
    }

    fn alive_bombers(&self) -> Vec<String> {
        self.bombers
            .iter()
            .filter(|slot| slot.alive)
            .map(|slot| slot.name.clone())
            .collect()
    }

    fn available_moves(&self, name: &str) -> Vec<Direction> {
        match self.slot(name) {
            Some(slot) if slot.alive => self.open_neighbours(slot.position),
            _ => Vec::new(),
        }
    }

    fn plant_bomb(&mut self, name: &str) -> bool {
        let Some(slot) = self.slot(name).filter(|slot| slot.alive) else {
            return false;
        };
        let position = slot.position;
        let bomb = Bomb {
            fuse: slot.fuse_length,
            radius: slot.detonation_radius,
        };
        match self.field_mut(position) {
            Some(field) if !field.has_bomb() => {
                field.bomb = Some(bomb);
                true
            }
            _ => {
                trace!(bomber = name, "field already holds a bomb");
                false
            }
        }
    }

    fn move_bomber(&mut self, name: &str, direction: Direction) -> bool {
        let Some(slot) = self.slot(name).filter(|slot| slot.alive) else {
            return false;
        };
        let from = slot.position;
        if !self.open_neighbours(from).contains(&direction) {
            trace!(bomber = name, %direction, "move blocked");
            return false;
        }
        let Some(to) = from.step(direction, self.rows, self.cols) else {
            return false;
        };

        let mut occupant = None;
        if let Some(field) = self.field_mut(from) {
            if let Some(idx) = field.occupants.iter().position(|o| o.name == name) {
                occupant = Some(field.occupants.remove(idx));
            }
        }
        if let (Some(occupant), Some(field)) = (occupant, self.field_mut(to)) {
            field.occupants.push(occupant);
        }
        if let Some(slot) = self.bombers.iter_mut().find(|slot| slot.name == name) {
            slot.position = to;
        }
        true
    }

    fn flush(&mut self) {
        let blasted = resolve_bombs(&mut self.fields, self.rows, self.cols);
        for position in blasted {
            self.kill_at(position);
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn field(&self, position: Position) -> Option<&Field> {
        if position.row >= self.rows || position.col >= self.cols {
            return None;
        }
        self.fields[self.index(position)].as_ref()
    }
}

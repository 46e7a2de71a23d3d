//! Game layer: the world bombers play in and the data they see.
//!
//! - Direction codec and action codes (the bomber wire format)
//! - The [`Arena`] capability and a grid implementation
//! - Bomb fuses and blast resolution
//! - Per-turn snapshots

mod action;
mod arena;
mod blast;
mod direction;
mod grid;
mod snapshot;

pub use action::{Action, ActionCode, PLANT_FLAG, STAY};
pub use arena::{Arena, Bomb, Field, Occupant, Position};
pub use blast::{blast_area, resolve_bombs};
pub use direction::{encode_directions, Direction};
pub use grid::GridArena;
pub use snapshot::{Snapshot, TerrainMatrix, NO_FIELD, OPEN_FIELD};

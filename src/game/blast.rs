//! Fuse countdown and detonation.
//!
//! Fields are stored row-major with `None` for missing fields. A blast
//! spreads from the bomb in the four directions and stops at the first
//! missing field or after `radius` steps. Bombs caught in a blast go off in
//! the same resolution pass.

use crate::game::{Direction, Field, Position};

/// Positions covered by a blast of `radius` centred on `origin`.
///
/// The origin comes first, then each arm in [`Direction::ALL`] order.
#[must_use]
pub fn blast_area(
    fields: &[Option<Field>],
    rows: usize,
    cols: usize,
    origin: Position,
    radius: u32,
) -> Vec<Position> {
    let mut area = vec![origin];
    for direction in Direction::ALL {
        let mut current = origin;
        for _ in 0..radius {
            let Some(next) = current.step(direction, rows, cols) else {
                break;
            };
            if fields[next.row * cols + next.col].is_none() {
                break;
            }
            area.push(next);
            current = next;
        }
    }
    area
}

/// Count every fuse down by one and detonate the bombs that reach zero,
/// including any bombs their blasts reach.
///
/// Detonated bombs are removed. Returns the blasted positions in row-major
/// order, without duplicates.
pub fn resolve_bombs(fields: &mut [Option<Field>], rows: usize, cols: usize) -> Vec<Position> {
    let mut pending: Vec<usize> = Vec::new();
    for (idx, field) in fields.iter_mut().enumerate() {
        if let Some(bomb) = field.as_mut().and_then(|f| f.bomb.as_mut()) {
            bomb.fuse = bomb.fuse.saturating_sub(1);
            if bomb.fuse == 0 {
                pending.push(idx);
            }
        }
    }

    let mut blasted = vec![false; fields.len()];
    while let Some(idx) = pending.pop() {
        // Already went off earlier in this chain.
        let Some(bomb) = fields[idx].as_mut().and_then(|f| f.bomb.take()) else {
            continue;
        };
        let origin = Position::new(idx / cols, idx % cols);
        for hit in blast_area(fields, rows, cols, origin, bomb.radius) {
            let hit_idx = hit.row * cols + hit.col;
            blasted[hit_idx] = true;
            if fields[hit_idx].as_ref().is_some_and(Field::has_bomb) {
                pending.push(hit_idx);
            }
        }
    }

    blasted
        .iter()
        .enumerate()
        .filter(|&(_, hit)| *hit)
        .map(|(idx, _)| Position::new(idx / cols, idx % cols))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Bomb;

    fn open_grid(rows: usize, cols: usize) -> Vec<Option<Field>> {
        vec![Some(Field::default()); rows * cols]
    }

    fn place(fields: &mut [Option<Field>], cols: usize, pos: Position, fuse: u32, radius: u32) {
        if let Some(field) = fields[pos.row * cols + pos.col].as_mut() {
            field.bomb = Some(Bomb { fuse, radius });
        }
    }

    #[test]
    fn test_blast_area_open_grid() {
        let fields = open_grid(5, 5);
        let area = blast_area(&fields, 5, 5, Position::new(2, 2), 1);
        assert_eq!(area.len(), 5);
        assert!(area.contains(&Position::new(1, 2)));
        assert!(area.contains(&Position::new(2, 3)));
    }

    #[test]
    fn test_blast_area_stops_at_missing_field_and_edge() {
        let mut fields = open_grid(1, 5);
        fields[3] = None;
        let area = blast_area(&fields, 1, 5, Position::new(0, 1), 3);
        assert_eq!(
            area,
            vec![Position::new(0, 1), Position::new(0, 0), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_fuse_counts_down_without_blast() {
        let mut fields = open_grid(3, 3);
        place(&mut fields, 3, Position::new(1, 1), 2, 1);

        let blasted = resolve_bombs(&mut fields, 3, 3);
        assert!(blasted.is_empty());
        let bomb = fields[4].as_ref().and_then(|f| f.bomb);
        assert_eq!(bomb, Some(Bomb { fuse: 1, radius: 1 }));
    }

    #[test]
    fn test_detonation_removes_bomb() {
        let mut fields = open_grid(3, 3);
        place(&mut fields, 3, Position::new(0, 0), 1, 1);

        let blasted = resolve_bombs(&mut fields, 3, 3);
        assert_eq!(
            blasted,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)]
        );
        assert!(fields.iter().flatten().all(|f| !f.has_bomb()));
    }

    #[test]
    fn test_chain_reaction() {
        let mut fields = open_grid(1, 6);
        place(&mut fields, 6, Position::new(0, 0), 1, 2);
        place(&mut fields, 6, Position::new(0, 2), 5, 2);

        let blasted = resolve_bombs(&mut fields, 1, 6);
        assert_eq!(blasted.len(), 5);
        assert!(blasted.contains(&Position::new(0, 4)));
        assert!(!blasted.contains(&Position::new(0, 5)));
        assert!(fields.iter().flatten().all(|f| !f.has_bomb()));
    }
}

//! Property-based tests for action codes, snapshots and match termination.
//!
//! Run with: cargo test prop_match

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use bomber_match::game::{NO_FIELD, PLANT_FLAG};
use bomber_match::{
    run_match, ActionCode, Arena, Bomber, Direction, GridArena, Idle, MatchConfig, MatchOutcome,
    Scripted, Snapshot,
};
use proptest::prelude::*;

/// One-row spawn strip on top of open rows: `S.S.S` for three bombers.
fn open_layout(bombers: usize, extra_cols: usize, rows: usize) -> String {
    let cols = 2 * bombers - 1 + extra_cols;
    let mut layout = String::new();
    for col in 0..cols {
        layout.push(if col % 2 == 0 && col < 2 * bombers - 1 { 'S' } else { '.' });
    }
    layout.push('\n');
    for _ in 1..rows {
        layout.push_str(&".".repeat(cols));
        layout.push('\n');
    }
    layout
}

fn well_formed_code() -> impl Strategy<Value = i32> {
    prop_oneof![0..=4i32, 10..=14i32]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_well_formed_codes_reencode(code in well_formed_code()) {
        let action = ActionCode(code).decode();
        prop_assert!(!ActionCode(code).is_violation());
        prop_assert_eq!(action.plant_bomb, code >= PLANT_FLAG);
        prop_assert_eq!(action.code(), code);
    }

    #[test]
    fn prop_any_code_decodes(code in any::<i32>()) {
        let code = ActionCode(code);
        let action = code.decode();
        prop_assert_eq!(action.plant_bomb, code.0 >= PLANT_FLAG);
        if code.is_violation() {
            prop_assert_eq!(action.direction, None);
        }
    }

    #[test]
    fn prop_direction_codes_round_trip(idx in 0usize..4) {
        let direction = Direction::ALL[idx];
        prop_assert_eq!(Direction::from_code(direction.code()), Some(direction));
        prop_assert_eq!(direction.opposite().opposite(), direction);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_relative_view_starts_with_self(
        bombers in 1usize..=4,
        extra_cols in 0usize..3,
        rows in 1usize..4,
        moves in prop::collection::vec(0usize..4, 0..12),
    ) {
        let mut arena = GridArena::from_layout(&open_layout(bombers, extra_cols, rows)).unwrap();
        let names: Vec<String> = (0..bombers).map(|i| format!("b{i}")).collect();
        for name in &names {
            arena.respawn_bomber(name, 1, 3).unwrap();
        }
        for (step, &idx) in moves.iter().enumerate() {
            let name = &names[step % names.len()];
            arena.move_bomber(name, Direction::ALL[idx]);
        }

        let snapshot = Snapshot::capture(&arena).unwrap();
        let alive = arena.alive_bombers();
        for name in &alive {
            let view = snapshot.relative_positions(name).unwrap();
            prop_assert_eq!(view.len(), alive.len());
            prop_assert_eq!(Some(view[0]), arena.position_of(name));
        }

        let (rows, cols) = arena.dimensions();
        prop_assert_eq!(snapshot.terrain().as_slice().len(), rows * cols);
        prop_assert!(snapshot.terrain().as_slice().iter().all(|&cell| cell != NO_FIELD));
    }

    #[test]
    fn prop_idle_bombers_always_time_out(bombers in 2usize..=4, max_turns in 0u32..30) {
        let arena = GridArena::from_layout(&open_layout(bombers, 0, 1)).unwrap();
        let mut idle: Vec<Idle> = (0..bombers).map(|i| Idle::new(format!("idle-{i}"))).collect();
        let roster: Vec<&mut dyn Bomber> = idle.iter_mut().map(|b| b as &mut dyn Bomber).collect();
        let config = MatchConfig { max_turns, ..MatchConfig::default() };

        let report = run_match(arena, roster, config).unwrap();
        prop_assert_eq!(report.outcome, MatchOutcome::Timeout);
        prop_assert_eq!(report.turns_played, max_turns);
    }

    #[test]
    fn prop_match_ends_on_deciding_turn(
        scripts in prop::collection::vec(prop::collection::vec(-5i32..20, 1..6), 2..=4),
        radius in 1u32..3,
        fuse in 1u32..4,
    ) {
        let arena = GridArena::from_layout(&open_layout(scripts.len(), 1, 3)).unwrap();
        let mut bombers: Vec<Scripted> = scripts
            .iter()
            .enumerate()
            .map(|(i, codes)| Scripted::new(format!("s{i}"), codes.clone()))
            .collect();
        let roster: Vec<&mut dyn Bomber> = bombers.iter_mut().map(|b| b as &mut dyn Bomber).collect();
        let config = MatchConfig { max_turns: 40, detonation_radius: radius, fuse_length: fuse };

        let report = run_match(arena, roster, config).unwrap();
        prop_assert!(report.turns_played <= config.max_turns);

        match &report.outcome {
            MatchOutcome::Winner { name, turn } => {
                prop_assert_eq!(report.turns_played, turn + 1);
                prop_assert_eq!(report.stats_for(name).unwrap().eliminated_turn, None);
                prop_assert!(report.stats.iter().any(|s| s.eliminated_turn == Some(*turn)));
            }
            MatchOutcome::Draw { turn } => {
                prop_assert_eq!(report.turns_played, turn + 1);
                prop_assert!(report.stats.iter().all(|s| s.eliminated_turn.is_some()));
                prop_assert!(report.stats.iter().any(|s| s.eliminated_turn == Some(*turn)));
            }
            MatchOutcome::Timeout => {
                prop_assert_eq!(report.turns_played, config.max_turns);
                prop_assert!(report.stats.iter().filter(|s| s.eliminated_turn.is_none()).count() >= 2);
            }
        }

        // Nobody acts after being eliminated or after the match ends.
        for (bomber, stats) in bombers.iter().zip(&report.stats) {
            let acted = u32::try_from(bomber.observations().len()).unwrap();
            let expected = stats.eliminated_turn.map_or(report.turns_played, |turn| turn + 1);
            prop_assert_eq!(acted, expected);
        }
    }
}

#![no_main]

//! Whole-match fuzzer.
//!
//! Scripted bombers return arbitrary action codes, including codes outside
//! the valid range. Every match must end with a report and a consistent
//! outcome.

use arbitrary::Arbitrary;
use bomber_match::{run_match, Bomber, GridArena, MatchConfig, MatchOutcome, Scripted};
use libfuzzer_sys::fuzz_target;

/// Structured input for match fuzzing.
#[derive(Arbitrary, Debug)]
struct MatchInput {
    /// One script per bomber.
    scripts: Vec<Vec<i32>>,
    /// Turn budget.
    max_turns: u8,
    /// Bomb detonation radius.
    radius: u8,
    /// Bomb fuse length.
    fuse: u8,
}

fuzz_target!(|input: MatchInput| {
    // The default layout has four spawn points.
    let scripts: Vec<Vec<i32>> = input
        .scripts
        .into_iter()
        .take(4)
        .map(|codes| codes.into_iter().take(16).collect())
        .collect();
    if scripts.is_empty() {
        return;
    }

    let Ok(arena) = GridArena::with_default_layout() else {
        return;
    };
    let config = MatchConfig {
        max_turns: u32::from(input.max_turns % 64).max(1),
        detonation_radius: u32::from(input.radius % 8),
        fuse_length: u32::from(input.fuse % 8).max(1),
    };

    let mut bombers: Vec<Scripted> = scripts
        .into_iter()
        .enumerate()
        .map(|(i, codes)| Scripted::new(format!("fuzz-{i}"), codes))
        .collect();
    let roster: Vec<&mut dyn Bomber> = bombers.iter_mut().map(|b| b as &mut dyn Bomber).collect();

    let report = run_match(arena, roster, config).expect("valid matches never fail");
    assert!(report.turns_played <= config.max_turns);
    if let MatchOutcome::Winner { name, .. } = &report.outcome {
        assert!(report.stats_for(name).is_some_and(|s| s.eliminated_turn.is_none()));
    }
});

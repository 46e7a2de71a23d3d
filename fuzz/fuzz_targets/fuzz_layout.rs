#![no_main]

//! Layout parser fuzzer.
//!
//! Arbitrary text must either parse into a consistent arena or be rejected
//! with a layout error, never panic.

use bomber_match::{Arena, GridArena, Snapshot};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let Ok(arena) = GridArena::from_layout(text) else {
        return;
    };

    let (rows, cols) = arena.dimensions();
    assert!(rows > 0 && cols > 0);
    assert!(arena.open_fields() <= rows * cols);
    assert!(arena.spawn_points().len() <= arena.open_fields());

    let snapshot = Snapshot::capture(&arena).expect("a fresh arena has no bombers");
    assert_eq!(snapshot.terrain().as_slice().len(), rows * cols);
    assert!(snapshot.alive_positions().is_empty());
});

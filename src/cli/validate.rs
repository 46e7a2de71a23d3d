//! Layout validation command implementation.

use super::CliError;
use bomber_match::{Arena, GridArena};
use std::fs;
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the layout file cannot be read or does not parse.
pub(crate) fn execute(layout: &Path) -> Result<(), CliError> {
    let text = fs::read_to_string(layout).map_err(|e| {
        CliError::new(format!("Failed to read {}: {e}", layout.display()))
    })?;

    println!("Validating: {}", layout.display());
    println!();

    let arena = match GridArena::from_layout(&text) {
        Ok(arena) => {
            print_check("Layout parses", true);
            arena
        }
        Err(e) => {
            print_check("Layout parses", false);
            return Err(e.into());
        }
    };

    let spawns = arena.spawn_points().len();
    let spawns_ok = spawns >= 2;
    print_check("At least two spawn points", spawns_ok);

    let (rows, cols) = arena.dimensions();
    println!();
    println!("Summary:");
    println!("  Size:         {rows} x {cols}");
    println!("  Open fields:  {}", arena.open_fields());
    println!("  Spawn points: {spawns}");

    if !spawns_ok {
        return Err(CliError::new("A match needs at least two spawn points"));
    }

    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}

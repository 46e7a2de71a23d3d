//! Run command implementation.

use super::bots::parse_roster;
use super::output::{format_text, JsonMatchReport};
use super::{CliError, OutputFormat};
use bomber_match::{run_match, Bomber, GridArena, MatchConfig};
use std::fs;
use std::path::Path;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the layout, config or roster is invalid, or the match
/// cannot be played.
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute(
    bots: &[String],
    layout: Option<&Path>,
    config: Option<&Path>,
    turns: Option<u32>,
    radius: Option<u32>,
    fuse: Option<u32>,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let arena = match layout {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| {
                CliError::new(format!("Failed to read {}: {e}", path.display()))
            })?;
            GridArena::from_layout(&text)?
        }
        None => GridArena::with_default_layout()?,
    };

    let mut config = match config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };
    if let Some(turns) = turns {
        config.max_turns = turns;
    }
    if let Some(radius) = radius {
        config.detonation_radius = radius;
    }
    if let Some(fuse) = fuse {
        config.fuse_length = fuse;
    }

    let mut roster = parse_roster(bots)?;

    if !quiet && format == OutputFormat::Text {
        let names: Vec<_> = roster.iter().map(Bomber::name).collect();
        println!("Bombers: {}", names.join(", "));
        println!(
            "Turns: {}, radius: {}, fuse: {}",
            config.max_turns, config.detonation_radius, config.fuse_length
        );
        println!();
    }

    let bombers: Vec<&mut dyn Bomber> = roster.iter_mut().map(|b| b as &mut dyn Bomber).collect();
    let report = run_match(arena, bombers, config)?;

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&report));
        }
        OutputFormat::Json => {
            let json_report = JsonMatchReport::from_report(&report, config);
            let json = serde_json::to_string_pretty(&json_report)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}

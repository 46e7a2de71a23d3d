//! Output formatting utilities for CLI.

use std::fmt::Write as _;

use bomber_match::{MatchConfig, MatchOutcome, MatchReport};
use serde::Serialize;

/// JSON-serializable match report.
#[derive(Debug, Serialize)]
pub(super) struct JsonMatchReport {
    /// `win`, `draw` or `timeout`.
    pub(super) result: &'static str,
    /// Winner name (null unless `result` is `win`).
    pub(super) winner: Option<String>,
    /// Deciding turn (null on timeout).
    pub(super) turn: Option<u32>,
    /// Total turns played.
    pub(super) turns_played: u32,
    /// Human-readable outcome line.
    pub(super) summary: String,
    /// Match parameters used.
    pub(super) config: MatchConfig,
    /// Per-bomber results.
    pub(super) bombers: Vec<JsonBomberResult>,
}

/// JSON-serializable bomber result.
#[derive(Debug, Serialize)]
pub(super) struct JsonBomberResult {
    /// Bomber name.
    pub(super) name: String,
    /// Bombs planted.
    pub(super) bombs_planted: u32,
    /// Moves made.
    pub(super) moves_made: u32,
    /// Requests the arena refused.
    pub(super) rejected_requests: u32,
    /// Out-of-range action codes.
    pub(super) invalid_actions: u32,
    /// Turn eliminated (null if survived).
    pub(super) eliminated_turn: Option<u32>,
}

impl JsonMatchReport {
    /// Create from a `MatchReport`.
    pub(super) fn from_report(report: &MatchReport, config: MatchConfig) -> Self {
        let result = match report.outcome {
            MatchOutcome::Winner { .. } => "win",
            MatchOutcome::Draw { .. } => "draw",
            MatchOutcome::Timeout => "timeout",
        };
        Self {
            result,
            winner: report.outcome.winner().map(str::to_string),
            turn: report.outcome.turn(),
            turns_played: report.turns_played,
            summary: report.outcome.to_string(),
            config,
            bombers: report
                .stats
                .iter()
                .map(|s| JsonBomberResult {
                    name: s.name.clone(),
                    bombs_planted: s.bombs_planted,
                    moves_made: s.moves_made,
                    rejected_requests: s.rejected_requests,
                    invalid_actions: s.invalid_actions,
                    eliminated_turn: s.eliminated_turn,
                })
                .collect(),
        }
    }
}

/// Format a match report as human-readable text.
pub(super) fn format_text(report: &MatchReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{}", report.outcome);
    let _ = writeln!(output, "  Turns: {}\n", report.turns_played);

    for stats in &report.stats {
        let _ = write!(
            output,
            "  {:<16} bombs {:>3}  moves {:>4}  rejected {:>3}",
            stats.name, stats.bombs_planted, stats.moves_made, stats.rejected_requests
        );
        if stats.invalid_actions > 0 {
            let _ = write!(output, "  invalid {}", stats.invalid_actions);
        }
        if let Some(turn) = stats.eliminated_turn {
            let _ = write!(output, " [eliminated turn {turn}]");
        }
        output.push('\n');
    }

    output
}

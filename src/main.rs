//! Bomber Match CLI - run bomber matches from the command line.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Bomber Match - a turn-based bomb-planting arena for bots
#[derive(Parser, Debug)]
#[command(name = "bomber-match")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a single match between built-in bombers
    Run {
        /// Bombers as kind[:name], kind is idle, wanderer or hunter
        #[arg(required = true, num_args = 1..)]
        bots: Vec<String>,

        /// Arena layout file (default: built-in 11x11 arena)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Match config file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum turns (overrides config)
        #[arg(short, long)]
        turns: Option<u32>,

        /// Bomb detonation radius (overrides config)
        #[arg(short, long)]
        radius: Option<u32>,

        /// Bomb fuse length in turns (overrides config)
        #[arg(short, long)]
        fuse: Option<u32>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: cli::OutputFormat,

        /// Suppress the match header
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check an arena layout file
    Validate {
        /// Layout file to validate
        #[arg(required = true)]
        layout: PathBuf,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Run {
            bots,
            layout,
            config,
            turns,
            radius,
            fuse,
            format,
            quiet,
        } => cli::run::execute(
            &bots,
            layout.as_deref(),
            config.as_deref(),
            turns,
            radius,
            fuse,
            format,
            quiet,
        ),

        Commands::Validate { layout } => cli::validate::execute(&layout),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Maze agent command-line client.
//!
//! Composition root: loads mazes and settings through `maze-content`, runs
//! them through `runtime`, and reports the outcome.
//!
//! ```bash
//! # Generate a reproducible maze, then let the agent solve it
//! maze generate --rows 51 --cols 51 --seed 7 --out maze.csv
//! maze run --maze maze.csv --telemetry agent_log.csv --show-map
//! ```

mod commands;
mod dirs;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Generate, Run};

/// Autonomous maze explorer
#[derive(Parser)]
#[command(name = "maze")]
#[command(about = "Let an agent explore, loot, and escape a grid maze", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to `maze.log` in the platform cache directory
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run the agent on a maze file
    Run(Run),

    /// Generate a random maze file
    Generate(Generate),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for MAZE_* settings and RUST_LOG)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.log_file)?;

    match cli.command {
        Command::Run(cmd) => cmd.execute(),
        Command::Generate(cmd) => cmd.execute(),
    }
}

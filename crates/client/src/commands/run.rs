//! Run the agent on a maze file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use maze_content::{ConfigLoader, MazeLoader};
use maze_core::Cell;
use runtime::{
    CsvTelemetry, JsonLinesTelemetry, NullTelemetry, RunOutcome, Simulation, SimulationConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TelemetryFormat {
    Csv,
    Jsonl,
}

/// Run the agent on a maze file
///
/// Settings resolve in order: defaults, `--config` TOML, `MAZE_*`
/// environment variables, then flags.
#[derive(Parser, Debug)]
pub struct Run {
    /// Maze CSV (0 = path, 1 = wall, 2 = item)
    #[arg(short, long)]
    pub maze: PathBuf,

    /// TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write per-tick telemetry to this file
    #[arg(short, long)]
    pub telemetry: Option<PathBuf>,

    /// Telemetry file format
    #[arg(long, value_enum, default_value_t = TelemetryFormat::Csv)]
    pub format: TelemetryFormat,

    /// Sight radius in cells
    #[arg(long)]
    pub sight_radius: Option<u32>,

    /// A* heuristic weight (>= 1.0; above 1.0 paths may be suboptimal)
    #[arg(long)]
    pub heuristic_weight: Option<f64>,

    /// Stop after this many ticks
    #[arg(long)]
    pub max_ticks: Option<u64>,

    /// Start cell as `row,col`
    #[arg(long)]
    pub start: Option<Cell>,

    /// Exit cell as `row,col` (default: bottom-right corner)
    #[arg(long)]
    pub exit: Option<Cell>,

    /// Print the agent's belief map when the run ends
    #[arg(long)]
    pub show_map: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let maze = MazeLoader::load(&self.maze)?;
        let config = self.resolve_config()?;
        let mut simulation =
            Simulation::new(maze, config).context("Invalid simulation setup")?;

        let summary = match (&self.telemetry, self.format) {
            (Some(path), TelemetryFormat::Csv) => {
                let mut sink = CsvTelemetry::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                simulation.run(&mut sink)?
            }
            (Some(path), TelemetryFormat::Jsonl) => {
                let mut sink = JsonLinesTelemetry::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                simulation.run(&mut sink)?
            }
            (None, _) => simulation.run(&mut NullTelemetry)?,
        };

        if self.show_map {
            print!("{}", simulation.render_belief());
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!(
                "{}: {} ticks, {} items, {:.2}% explored, final position {}",
                summary.outcome,
                summary.ticks,
                summary.items_collected,
                summary.explored_percent,
                summary.position
            );
        }

        if summary.outcome == RunOutcome::TickLimit {
            anyhow::bail!("Agent did not escape within {} ticks", summary.ticks);
        }
        Ok(())
    }

    fn resolve_config(&self) -> Result<SimulationConfig> {
        Ok(self.apply_flags(self.file_config()?.with_env_overrides()))
    }

    fn file_config(&self) -> Result<SimulationConfig> {
        match &self.config {
            Some(path) => ConfigLoader::load::<SimulationConfig>(path),
            None => Ok(SimulationConfig::default()),
        }
    }

    fn apply_flags(&self, mut config: SimulationConfig) -> SimulationConfig {
        if let Some(radius) = self.sight_radius {
            config.agent.sight_radius = radius;
        }
        if let Some(weight) = self.heuristic_weight {
            config.agent.heuristic_weight = weight;
        }
        if let Some(max_ticks) = self.max_ticks {
            config.max_ticks = Some(max_ticks);
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(exit) = self.exit {
            config.exit = Some(exit);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn run(args: &[&str]) -> Run {
        Run::try_parse_from(std::iter::once("run").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "max_ticks = 10\nexit = {{ row = 1, col = 1 }}\n[agent]\nsight_radius = 4"
        )
        .unwrap();
        let path = file.path().to_str().unwrap();

        let cmd = run(&["--maze", "m.csv", "--config", path, "--max-ticks", "99", "--start", "2,3"]);
        let config = cmd.apply_flags(cmd.file_config().unwrap());

        assert_eq!(config.agent.sight_radius, 4);
        assert_eq!(config.agent.heuristic_weight, 1.0);
        assert_eq!(config.max_ticks, Some(99));
        assert_eq!(config.exit, Some(Cell::new(1, 1)));
        assert_eq!(config.start, Cell::new(2, 3));
    }

    #[test]
    fn missing_config_file_means_defaults() {
        let cmd = run(&["--maze", "m.csv", "--sight-radius", "5"]);
        let config = cmd.apply_flags(cmd.file_config().unwrap());

        assert_eq!(config.agent.sight_radius, 5);
        assert_eq!(config.max_ticks, None);
        assert_eq!(config.exit, None);
    }

    #[test]
    fn rejects_malformed_cell() {
        let result = Run::try_parse_from(["run", "--maze", "m.csv", "--exit", "north"]);
        assert!(result.is_err());
    }
}

//! Random maze generation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use maze_content::{MazeGenerator, MazeWriter};
use maze_core::TileKind;

/// Generate a random maze file
#[derive(Parser, Debug)]
pub struct Generate {
    /// Number of rows
    #[arg(long, default_value_t = MazeGenerator::DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns
    #[arg(long, default_value_t = MazeGenerator::DEFAULT_COLS)]
    pub cols: usize,

    /// RNG seed; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Chance that an open cell holds an item
    #[arg(long, default_value_t = MazeGenerator::DEFAULT_ITEM_PROBABILITY)]
    pub item_probability: f64,

    /// Output CSV path
    #[arg(short, long)]
    pub out: PathBuf,

    /// Also print the maze to stdout
    #[arg(long)]
    pub print: bool,
}

impl Generate {
    pub fn execute(self) -> Result<()> {
        let mut generator =
            MazeGenerator::new(self.rows, self.cols).with_item_probability(self.item_probability);
        if let Some(seed) = self.seed {
            generator = generator.with_seed(seed);
        }

        let maze = generator.generate()?;
        MazeWriter::write(&self.out, &maze)?;

        tracing::info!(
            rows = maze.rows(),
            cols = maze.cols(),
            seed = generator.seed(),
            items = maze.count(TileKind::Item),
            "generated maze"
        );

        if self.print {
            print!("{}", maze.render(None));
        }
        println!(
            "Wrote {}x{} maze to {} (seed {})",
            maze.rows(),
            maze.cols(),
            self.out.display(),
            generator.seed()
        );

        Ok(())
    }
}

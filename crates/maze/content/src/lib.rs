//! Maze content: file formats and procedural generation.
//!
//! This crate turns files into `maze-core` values and back:
//! - Maze matrices (comma-separated tile codes) via [`MazeLoader`] / [`MazeWriter`]
//! - Run configuration (TOML) via [`ConfigLoader`]
//! - Fresh mazes via the seeded depth-first [`MazeGenerator`]
//!
//! Content never appears in simulation state; it only seeds it.

pub mod generator;
pub mod loaders;

pub use generator::MazeGenerator;
pub use loaders::{ConfigLoader, LoadResult, MazeLoader, MazeWriter};

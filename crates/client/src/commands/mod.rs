//! Subcommand implementations.
//!
//! Each command owns its CLI args and execution logic.

mod generate;
mod run;

pub use generate::Generate;
pub use run::Run;

//! Runtime orchestration for the maze-exploring agent.
//!
//! This crate wires the pure rules in `maze-core` to the generic
//! `behavior-tree` engine and drives them one tick at a time. Consumers build
//! a [`Simulation`] from a ground-truth maze and a [`SimulationConfig`], then
//! call [`Simulation::tick`] or [`Simulation::run`].
//!
//! Modules are organized by responsibility:
//! - [`ai`] hosts the blackboard context, decision nodes, and tree presets
//! - [`simulation`] owns per-run state and the tick loop
//! - [`telemetry`] turns post-tick state into records and writes them out
//! - [`config`] resolves run parameters from defaults and environment
pub mod ai;
pub mod config;
pub mod error;
pub mod simulation;
pub mod telemetry;

pub use ai::{AgentContext, BehaviorTree, presets};
pub use config::SimulationConfig;
pub use error::{Result, RuntimeError};
pub use simulation::{RunOutcome, RunSummary, Simulation};
pub use telemetry::{
    ActionLabel, CsvTelemetry, InMemoryTelemetry, JsonLinesTelemetry, NullTelemetry,
    TelemetrySink, TickRecord,
};

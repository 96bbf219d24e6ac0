//! Unified error types surfaced by the runtime API.
//!
//! Everything here is fatal to a run. Search failures during a tick are not
//! errors at this level: the movement actions absorb them as
//! `Status::Failure` and the decision tree retries on later ticks.

use maze_core::{Cell, ConfigError, GridError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{role} cell {cell} is outside the {rows}x{cols} maze")]
    EndpointOutOfBounds {
        role: EndpointRole,
        cell: Cell,
        rows: usize,
        cols: usize,
    },

    #[error("{role} cell {cell} is a wall")]
    EndpointBlocked { role: EndpointRole, cell: Cell },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("failed to write telemetry")]
    Telemetry(#[from] std::io::Error),

    #[error("failed to encode telemetry record")]
    TelemetryEncode(#[from] serde_json::Error),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EndpointRole {
    Start,
    Exit,
}

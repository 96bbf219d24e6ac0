//! Lightweight behavior tree library for tick-driven agents.
//!
//! This library provides a minimal, deterministic behavior tree implementation
//! designed for simulations that evaluate one full tree per tick.
//!
//! - **No delta time**: Every tick completes immediately
//! - **Stateless nodes**: `Running` is reported, never stored; the next tick
//!   re-derives the active branch from the context
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success, Running, or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Leaf nodes: [`Condition`] over a read-only [`Predicate`]; actions are
//!   plain [`Behavior`] implementations

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use leaf::{Condition, Predicate};
pub use status::Status;

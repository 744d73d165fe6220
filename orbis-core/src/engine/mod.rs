//! Aggregation engine
//!
//! Owns the runtime state of every output group and re-evaluates
//! AND-over-inputs -> output on each polling pass.

pub mod group;
pub mod poll;

pub use group::{input_level, output_level, BoundInput, RuntimeGroup};
pub use poll::poll_groups;

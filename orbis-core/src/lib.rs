//! Board-agnostic core logic for the ORBIS 24-point automation controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration types and the startup validator
//! - GPIO line abstraction traits
//! - The AND-aggregation engine (inputs -> group output)
//! - Periodic timing primitives (interval timer, logger gate, heartbeat)

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod engine;
pub mod timing;
pub mod traits;

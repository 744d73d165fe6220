//! Configuration types and startup validation
//!
//! The configuration is a static in-memory table fixed at build time;
//! it is validated once at startup, before any pin is bound.

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{validate, ConfigError};

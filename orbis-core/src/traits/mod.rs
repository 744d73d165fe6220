//! Hardware abstraction traits
//!
//! These traits define the interface between the aggregation logic
//! and hardware-specific GPIO implementations.

pub mod gpio;

pub use gpio::{InputLine, OutputLine};

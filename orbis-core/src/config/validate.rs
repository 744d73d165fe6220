//! Startup configuration validator
//!
//! Pure function over the static configuration, no hardware access.
//! Runs once at startup; any violation is fatal and halts the firmware
//! before a single pin is bound.

use heapless::Vec;

use super::types::{
    is_valid_input_gpio, is_valid_output_gpio, BoardConfig, MAX_GROUPS, MAX_INPUTS_PER_GROUP,
};

/// Configuration violations, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// More groups defined than the board has output lines
    TooManyOutputs { count: usize },
    /// An output GPIO outside the board's output set
    InvalidOutputGpio { gpio: u8 },
    /// The same output GPIO used by two groups
    DuplicateOutputGpio { gpio: u8 },
    /// An input GPIO outside the board's input set
    InvalidInputGpio { gpio: u8 },
    /// The same input GPIO used twice, in any group
    DuplicateInputGpio { gpio: u8 },
}

impl ConfigError {
    /// Board-facing message, printed to the console and shown on the
    /// status display when one is present.
    pub fn message(&self) -> &'static str {
        match self {
            ConfigError::TooManyOutputs { .. } => "Too many outputs defined. Check program.",
            ConfigError::InvalidOutputGpio { .. } => "Invalid output gpio used. Check program.",
            ConfigError::DuplicateOutputGpio { .. } => "Duplicate output gpio used. Check program.",
            ConfigError::InvalidInputGpio { .. } => "Invalid input gpio used. Check program.",
            ConfigError::DuplicateInputGpio { .. } => "Duplicate input gpio used. Check program.",
        }
    }
}

/// Validate a board configuration, first violation wins.
///
/// Output-pin checks fully precede input-pin checks; within each phase,
/// groups are visited in declaration order.
pub fn validate(config: &BoardConfig) -> Result<(), ConfigError> {
    if config.groups.len() > MAX_GROUPS {
        return Err(ConfigError::TooManyOutputs {
            count: config.groups.len(),
        });
    }

    let mut used_outputs: Vec<u8, MAX_GROUPS> = Vec::new();
    for group in &config.groups {
        if !is_valid_output_gpio(group.output_gpio) {
            return Err(ConfigError::InvalidOutputGpio {
                gpio: group.output_gpio,
            });
        }
        if used_outputs.contains(&group.output_gpio) {
            return Err(ConfigError::DuplicateOutputGpio {
                gpio: group.output_gpio,
            });
        }
        let _ = used_outputs.push(group.output_gpio);
    }

    // A full input set (20 unique valid GPIOs) exactly fills the scratch
    // vec; any further input must fail one of the checks above the push.
    let mut used_inputs: Vec<u8, MAX_INPUTS_PER_GROUP> = Vec::new();
    for group in &config.groups {
        for &gpio in &group.input_gpio {
            if !is_valid_input_gpio(gpio) {
                return Err(ConfigError::InvalidInputGpio { gpio });
            }
            if used_inputs.contains(&gpio) {
                return Err(ConfigError::DuplicateInputGpio { gpio });
            }
            let _ = used_inputs.push(gpio);
        }
    }

    Ok(())
}

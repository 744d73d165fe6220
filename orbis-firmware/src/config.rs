//! Board configuration
//!
//! The configuration is fixed at build time: edit the table below and
//! reflash. Each group maps one output GPIO (20, 21, 22 or 28) to an
//! ordered list of input GPIOs (0..=19); the output is driven high only
//! while every listed input reads high. The table is validated once at
//! startup before any pin is bound.

use orbis_core::config::{BoardConfig, GroupConfig};

/// The shipped configuration: all twenty inputs gate output GPIO 20.
pub fn board_config() -> BoardConfig {
    let mut config = BoardConfig::new();

    let _ = config.groups.push(GroupConfig::new(
        1,
        20,
        &[
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
        ],
    ));

    // Example: two outputs with seven inputs each plus a single-input group.
    //
    // let _ = config.groups.push(GroupConfig::new(1, 20, &[0, 1, 2, 3, 4, 5, 6]));
    // let _ = config.groups.push(GroupConfig::new(2, 21, &[8, 9, 11, 10, 13, 14, 15]));
    // let _ = config.groups.push(GroupConfig::new(3, 22, &[19]));

    config
}

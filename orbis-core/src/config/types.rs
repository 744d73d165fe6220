//! Configuration types
//!
//! Strongly-typed, fixed-capacity replacement for the ad hoc table the
//! board is configured with: each group maps one output GPIO to an ordered
//! list of input GPIOs.

use heapless::Vec;

/// Hardware limit: the board has 4 physical output lines.
pub const MAX_GROUPS: usize = 4;

/// Maximum inputs per group (the board has 20 input lines in total).
pub const MAX_INPUTS_PER_GROUP: usize = 20;

/// Capacity of the configuration table. Deliberately larger than
/// [`MAX_GROUPS`] so an over-provisioned configuration can be represented
/// and rejected by the validator rather than silently truncated.
pub const CONFIG_CAPACITY: usize = 8;

/// GPIOs usable as group outputs on this board.
pub const VALID_OUTPUT_GPIOS: [u8; 4] = [20, 21, 22, 28];

/// Highest GPIO usable as a group input (inputs are GPIO 0..=19).
pub const MAX_INPUT_GPIO: u8 = 19;

/// Check whether a GPIO may be used as a group output
pub fn is_valid_output_gpio(gpio: u8) -> bool {
    VALID_OUTPUT_GPIOS.contains(&gpio)
}

/// Check whether a GPIO may be used as a group input
pub fn is_valid_input_gpio(gpio: u8) -> bool {
    gpio <= MAX_INPUT_GPIO
}

/// One output group: a single output GPIO gated by a list of input GPIOs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupConfig {
    /// Group id (1..=4, unique)
    pub id: u8,
    /// Output GPIO driven by this group
    pub output_gpio: u8,
    /// Input GPIOs, in declared order
    pub input_gpio: Vec<u8, MAX_INPUTS_PER_GROUP>,
}

impl GroupConfig {
    /// Create a group config from a slice of input GPIOs
    pub fn new(id: u8, output_gpio: u8, inputs: &[u8]) -> Self {
        let mut input_gpio = Vec::new();
        let _ = input_gpio.extend_from_slice(inputs);
        Self {
            id,
            output_gpio,
            input_gpio,
        }
    }
}

/// Complete board configuration: the set of output groups
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Configured groups, in declaration order
    pub groups: Vec<GroupConfig, CONFIG_CAPACITY>,
}

impl BoardConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Groups in ascending id order
    ///
    /// Pin binding and the aggregation pass iterate in this order, which
    /// fixes the startup console ordering.
    pub fn groups_by_id(&self) -> Vec<&GroupConfig, CONFIG_CAPACITY> {
        let mut sorted: Vec<&GroupConfig, CONFIG_CAPACITY> = self.groups.iter().collect();
        sorted.sort_unstable_by_key(|group| group.id);
        sorted
    }

    /// Find a group by its output GPIO
    pub fn find_by_output(&self, gpio: u8) -> Option<&GroupConfig> {
        self.groups.iter().find(|group| group.output_gpio == gpio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_config() {
        let group = GroupConfig::new(1, 20, &[0, 1, 2]);
        assert_eq!(group.id, 1);
        assert_eq!(group.output_gpio, 20);
        assert_eq!(group.input_gpio.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn test_empty_config() {
        let config = BoardConfig::new();
        assert!(config.groups.is_empty());
        assert!(config.find_by_output(20).is_none());
    }

    #[test]
    fn test_groups_by_id_sorts() {
        let mut config = BoardConfig::new();
        let _ = config.groups.push(GroupConfig::new(3, 22, &[5]));
        let _ = config.groups.push(GroupConfig::new(1, 20, &[0]));
        let _ = config.groups.push(GroupConfig::new(2, 21, &[3]));

        let ids: std::vec::Vec<u8> = config.groups_by_id().iter().map(|g| g.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_valid_pin_sets() {
        assert!(is_valid_output_gpio(20));
        assert!(is_valid_output_gpio(28));
        assert!(!is_valid_output_gpio(23));
        assert!(!is_valid_output_gpio(0));

        assert!(is_valid_input_gpio(0));
        assert!(is_valid_input_gpio(19));
        assert!(!is_valid_input_gpio(20));
    }
}

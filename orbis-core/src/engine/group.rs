//! Runtime group state
//!
//! A `RuntimeGroup` is an output group after pin binding: the bound output
//! line, the bound input lines in declared order, and the booleans the
//! polling pass refreshes. Groups live for the process lifetime; only the
//! boolean levels mutate.

use heapless::Vec;

use crate::config::MAX_INPUTS_PER_GROUP;

/// One input line of a group
///
/// `line` is `None` when binding failed at startup; the slot then stays
/// degraded for the process lifetime (samples as low, shown as absent).
#[derive(Debug)]
pub struct BoundInput<I> {
    /// Input GPIO number
    pub gpio: u8,
    /// Bound hardware line, `None` if binding failed
    pub line: Option<I>,
    /// Level sampled on the most recent polling pass
    pub level: bool,
}

/// An output group bound to hardware
#[derive(Debug)]
pub struct RuntimeGroup<I, O> {
    /// Group id (1..=4)
    pub id: u8,
    /// Output GPIO number
    pub output_gpio: u8,
    /// Bound output line, `None` if binding failed (writes become no-ops)
    pub output: Option<O>,
    /// Bound input lines, in the group's declared order
    pub inputs: Vec<BoundInput<I>, MAX_INPUTS_PER_GROUP>,
    /// True iff every input sampled high on the most recent pass
    pub all_inputs_high: bool,
}

impl<I, O> RuntimeGroup<I, O> {
    /// Create a group with its (possibly unbound) output line and no
    /// inputs yet. Inputs are attached in a second binding phase.
    pub fn new(id: u8, output_gpio: u8, output: Option<O>) -> Self {
        Self {
            id,
            output_gpio,
            output,
            inputs: Vec::new(),
            all_inputs_high: false,
        }
    }

    /// Attach an input line (bound or degraded) to the group
    pub fn push_input(&mut self, gpio: u8, line: Option<I>) {
        let _ = self.inputs.push(BoundInput {
            gpio,
            line,
            level: false,
        });
    }

    /// Sampled level of one of this group's inputs
    ///
    /// `None` when the GPIO is not assigned to this group or its line
    /// failed to bind (absent reads).
    pub fn input_level(&self, gpio: u8) -> Option<bool> {
        self.inputs
            .iter()
            .find(|input| input.gpio == gpio)
            .and_then(|input| input.line.is_some().then_some(input.level))
    }

    /// State driven onto this group's output line, `None` when the output
    /// failed to bind.
    pub fn output_level(&self) -> Option<bool> {
        self.output.is_some().then_some(self.all_inputs_high)
    }
}

/// Sampled level of an input GPIO across all groups
pub fn input_level<I, O>(groups: &[RuntimeGroup<I, O>], gpio: u8) -> Option<bool> {
    groups.iter().find_map(|group| group.input_level(gpio))
}

/// Driven state of an output GPIO across all groups
pub fn output_level<I, O>(groups: &[RuntimeGroup<I, O>], gpio: u8) -> Option<bool> {
    groups
        .iter()
        .find(|group| group.output_gpio == gpio)
        .and_then(|group| group.output_level())
}

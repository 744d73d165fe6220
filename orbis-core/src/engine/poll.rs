//! The aggregation pass
//!
//! One pass samples every input of every group, recomputes the AND, and
//! drives each group's output. Pure combinational re-evaluation: no edge
//! detection, no debounce, no memory of prior passes.

use crate::engine::group::RuntimeGroup;
use crate::traits::{InputLine, OutputLine};

/// Run one aggregation pass over all groups.
///
/// Groups are visited in slice order (the binding phase builds the slice
/// in ascending group-id order) and inputs in their declared order. An
/// unbound input samples as low; an unbound output makes the write a
/// no-op while the sample/compute step still runs, so diagnostics and the
/// display keep reflecting input state.
pub fn poll_groups<I: InputLine, O: OutputLine>(groups: &mut [RuntimeGroup<I, O>]) {
    for group in groups.iter_mut() {
        let mut all_high = true;
        for input in group.inputs.iter_mut() {
            input.level = input.line.as_ref().map(InputLine::is_high).unwrap_or(false);
            if !input.level {
                all_high = false;
            }
        }
        // A group with no inputs is vacuously true. Valid configurations
        // always carry at least one input; this is the documented fallback.
        group.all_inputs_high = all_high;

        if let Some(output) = group.output.as_mut() {
            output.set_high(all_high);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeInput {
        high: bool,
    }

    impl InputLine for FakeInput {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[derive(Default)]
    struct FakeOutput {
        high: bool,
        writes: usize,
    }

    impl OutputLine for FakeOutput {
        fn set_high(&mut self, high: bool) {
            self.high = high;
            self.writes += 1;
        }
    }

    fn group_with_inputs(levels: &[bool]) -> RuntimeGroup<FakeInput, FakeOutput> {
        let mut group = RuntimeGroup::new(1, 20, Some(FakeOutput::default()));
        for (i, &high) in levels.iter().enumerate() {
            group.push_input(i as u8, Some(FakeInput { high }));
        }
        group
    }

    #[test]
    fn test_all_inputs_high_drives_output_high() {
        let mut groups = [group_with_inputs(&[true, true, true])];
        poll_groups(&mut groups);

        assert!(groups[0].all_inputs_high);
        assert!(groups[0].output.as_ref().unwrap().high);
    }

    #[test]
    fn test_any_input_low_drives_output_low() {
        let mut groups = [group_with_inputs(&[true, false, true])];
        poll_groups(&mut groups);

        assert!(!groups[0].all_inputs_high);
        assert!(!groups[0].output.as_ref().unwrap().high);
    }

    #[test]
    fn test_reevaluated_fresh_every_pass() {
        let mut groups = [group_with_inputs(&[true, true])];
        poll_groups(&mut groups);
        assert!(groups[0].output.as_ref().unwrap().high);

        // Flip one input low: the very next pass must drop the output.
        groups[0].inputs[1].line.as_mut().unwrap().high = false;
        poll_groups(&mut groups);
        assert!(!groups[0].output.as_ref().unwrap().high);

        // And back again: no hysteresis, no memory.
        groups[0].inputs[1].line.as_mut().unwrap().high = true;
        poll_groups(&mut groups);
        assert!(groups[0].output.as_ref().unwrap().high);
        assert_eq!(groups[0].output.as_ref().unwrap().writes, 3);
    }

    #[test]
    fn test_unbound_input_samples_low() {
        let mut group = group_with_inputs(&[true]);
        group.push_input(9, None);
        let mut groups = [group];

        poll_groups(&mut groups);
        assert!(!groups[0].all_inputs_high);
        assert!(!groups[0].output.as_ref().unwrap().high);
    }

    #[test]
    fn test_unbound_output_still_samples_inputs() {
        let mut group: RuntimeGroup<FakeInput, FakeOutput> = RuntimeGroup::new(3, 22, None);
        group.push_input(4, Some(FakeInput { high: true }));
        let mut groups = [group];

        poll_groups(&mut groups);
        assert!(groups[0].all_inputs_high);
        assert_eq!(groups[0].inputs[0].level, true);
        assert_eq!(groups[0].output_level(), None);
    }

    #[test]
    fn test_empty_group_vacuously_true() {
        let group: RuntimeGroup<FakeInput, FakeOutput> =
            RuntimeGroup::new(1, 20, Some(FakeOutput::default()));
        let mut groups = [group];

        poll_groups(&mut groups);
        assert!(groups[0].all_inputs_high);
        assert!(groups[0].output.as_ref().unwrap().high);
    }

    #[test]
    fn test_groups_independent() {
        let mut first = group_with_inputs(&[true]);
        first.id = 1;
        let mut second = group_with_inputs(&[false]);
        second.id = 2;
        second.output_gpio = 21;
        let mut groups = [first, second];

        poll_groups(&mut groups);
        assert!(groups[0].output.as_ref().unwrap().high);
        assert!(!groups[1].output.as_ref().unwrap().high);
    }
}

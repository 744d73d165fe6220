//! Console diagnostics
//!
//! Per-group status block printed through the 3 s logger gate: the output
//! line, the input GPIO numbers, and their sampled levels aligned under
//! the numbers. The caller consults the gate once per pass, so the whole
//! block prints together or not at all.

use core::fmt::Write;

use defmt::info;
use heapless::String;

use orbis_core::engine::RuntimeGroup;

/// Print the diagnostic block for every group
pub fn log_groups<I, O>(groups: &[RuntimeGroup<I, O>]) {
    for group in groups {
        let mut header: String<32> = String::new();
        let _ = write!(
            header,
            "Output {}: GPIO{:02}: {}",
            group.id,
            group.output_gpio,
            if group.all_inputs_high { "ON" } else { "OFF" }
        );
        info!("{=str}", header.as_str());

        let mut ids: String<80> = String::new();
        let _ = ids.push_str("Inputs  : ");
        for input in &group.inputs {
            let _ = write!(ids, "{:02} ", input.gpio);
        }
        info!("{=str}", ids.as_str());

        let mut levels: String<80> = String::new();
        let _ = levels.push_str("          ");
        for input in &group.inputs {
            let _ = write!(levels, " {} ", input.level as u8);
        }
        info!("{=str}", levels.as_str());
    }
}

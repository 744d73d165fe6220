//! Board pin ownership and group binding
//!
//! The ORBIS board exposes GPIO 0-19 as input points, GPIO 20/21/22/28 as
//! output points, the onboard LED on GPIO 25, and the status display on
//! I2C1 (SDA=GPIO26, SCL=GPIO27). `PinBank` hands each automation point
//! out at most once; `bind_groups` turns the validated configuration into
//! runtime groups, degrading per pin instead of failing.

use core::fmt::Write;

use defmt::{info, warn};
use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::peripherals::{I2C1, PIN_25, PIN_26, PIN_27};
use embassy_rp::{Peri, Peripherals};
use heapless::{String, Vec};

use orbis_core::config::{BoardConfig, MAX_GROUPS};
use orbis_core::engine::RuntimeGroup;
use orbis_core::traits::{InputLine, OutputLine};

/// Slots for GPIO 0..=28; only the board's automation points are populated
const PIN_SLOTS: usize = 29;

/// Runtime group bound to this board's GPIO lines
pub type FwGroup = RuntimeGroup<Input<'static>, Output<'static>>;

impl InputLine for Input<'static> {
    fn is_high(&self) -> bool {
        Input::is_high(self)
    }
}

impl OutputLine for Output<'static> {
    fn set_high(&mut self, high: bool) {
        if high {
            Output::set_high(self);
        } else {
            Output::set_low(self);
        }
    }
}

/// One-shot pin dispenser: each automation GPIO can be taken exactly once
pub struct PinBank {
    slots: [Option<Peri<'static, AnyPin>>; PIN_SLOTS],
}

impl PinBank {
    /// Take ownership of a GPIO; `None` when the number is not an
    /// automation point or the pin was already claimed.
    pub fn take(&mut self, gpio: u8) -> Option<Peri<'static, AnyPin>> {
        self.slots.get_mut(gpio as usize).and_then(Option::take)
    }
}

/// The board's peripherals, split into automation points and the
/// dedicated LED / display pins.
pub struct BoardPins {
    pub bank: PinBank,
    pub led: Peri<'static, PIN_25>,
    pub i2c1: Peri<'static, I2C1>,
    pub i2c_sda: Peri<'static, PIN_26>,
    pub i2c_scl: Peri<'static, PIN_27>,
}

impl BoardPins {
    pub fn split(p: Peripherals) -> Self {
        let mut slots: [Option<Peri<'static, AnyPin>>; PIN_SLOTS] = [const { None }; PIN_SLOTS];

        // Input points
        slots[0] = Some(p.PIN_0.into());
        slots[1] = Some(p.PIN_1.into());
        slots[2] = Some(p.PIN_2.into());
        slots[3] = Some(p.PIN_3.into());
        slots[4] = Some(p.PIN_4.into());
        slots[5] = Some(p.PIN_5.into());
        slots[6] = Some(p.PIN_6.into());
        slots[7] = Some(p.PIN_7.into());
        slots[8] = Some(p.PIN_8.into());
        slots[9] = Some(p.PIN_9.into());
        slots[10] = Some(p.PIN_10.into());
        slots[11] = Some(p.PIN_11.into());
        slots[12] = Some(p.PIN_12.into());
        slots[13] = Some(p.PIN_13.into());
        slots[14] = Some(p.PIN_14.into());
        slots[15] = Some(p.PIN_15.into());
        slots[16] = Some(p.PIN_16.into());
        slots[17] = Some(p.PIN_17.into());
        slots[18] = Some(p.PIN_18.into());
        slots[19] = Some(p.PIN_19.into());

        // Output points
        slots[20] = Some(p.PIN_20.into());
        slots[21] = Some(p.PIN_21.into());
        slots[22] = Some(p.PIN_22.into());
        slots[28] = Some(p.PIN_28.into());

        Self {
            bank: PinBank { slots },
            led: p.PIN_25,
            i2c1: p.I2C1,
            i2c_sda: p.PIN_26,
            i2c_scl: p.PIN_27,
        }
    }
}

/// Bind the validated configuration to hardware.
///
/// All outputs are bound first (ascending group id), then all inputs for
/// all groups (same order) — this fixes the startup console ordering.
/// Outputs come up driven low; inputs get a pull-down so an unconnected
/// point reads low instead of floating. A pin that cannot be taken leaves
/// its slot unbound and the group degrades: reads sample low, writes
/// become no-ops, everything else keeps running.
pub fn bind_groups(config: &BoardConfig, bank: &mut PinBank) -> Vec<FwGroup, MAX_GROUPS> {
    let mut groups: Vec<FwGroup, MAX_GROUPS> = Vec::new();

    for cfg in config.groups_by_id() {
        let output = match bank.take(cfg.output_gpio) {
            Some(pin) => {
                info!("Output {} configured on GPIO {}", cfg.id, cfg.output_gpio);
                Some(Output::new(pin, Level::Low))
            }
            None => {
                warn!(
                    "Error configuring output GPIO {}: pin unavailable, output disabled",
                    cfg.output_gpio
                );
                None
            }
        };
        let _ = groups.push(RuntimeGroup::new(cfg.id, cfg.output_gpio, output));
    }

    for (group, cfg) in groups.iter_mut().zip(config.groups_by_id()) {
        let mut bound: String<70> = String::new();
        for &gpio in cfg.input_gpio.iter() {
            let line = match bank.take(gpio) {
                Some(pin) => {
                    let _ = write!(bound, "{} ", gpio);
                    Some(Input::new(pin, Pull::Down))
                }
                None => {
                    warn!(
                        "Error configuring input GPIO {}: pin unavailable, reads as low",
                        gpio
                    );
                    None
                }
            };
            group.push_input(gpio, line);
        }
        info!("Output {}: configured inputs: {=str}", group.id, bound.as_str());
    }

    groups
}

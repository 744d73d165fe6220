//! ORBIS 24-point automation board firmware
//!
//! Maps groups of digital inputs to one digital output per group: an
//! output is driven high only while every input in its group reads high.
//! A single cooperative loop re-evaluates all groups every pass and
//! multiplexes the periodic side tasks (status display, heartbeat LED,
//! console diagnostics) against independent wall-clock intervals.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use orbis_core::config::validate;
use orbis_core::engine::poll_groups;
use orbis_core::timing::{Heartbeat, LogGate};

use crate::board::BoardPins;
use crate::display::IoDisplay;

mod board;
mod config;
mod display;
mod monitor;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("ORBIS automation firmware starting");

    let p = embassy_rp::init(Default::default());
    let pins = BoardPins::split(p);

    // Display first, so a configuration error can be shown on it as well
    // as on the console.
    let mut display = IoDisplay::detect(pins.i2c1, pins.i2c_scl, pins.i2c_sda).await;

    let config = config::board_config();
    if let Err(e) = validate(&config) {
        error!("Configuration rejected: {}", e);
        display.show_error(e.message()).await;
        halt().await;
    }

    let mut bank = pins.bank;
    let mut groups = board::bind_groups(&config, &mut bank);

    let mut led = Output::new(pins.led, Level::Low);
    let mut heartbeat = Heartbeat::new();
    let mut gate = LogGate::new();

    info!("Entering polling loop");

    // Poll as fast as the executor allows; every periodic task gates its
    // own work against the single clock read at the top of the pass. The
    // gate must be refreshed before the aggregation pass consults it.
    loop {
        let now_ms = Instant::now().as_millis();

        if let Some(on) = heartbeat.update(now_ms) {
            led.set_level(if on { Level::High } else { Level::Low });
        }

        display.update(now_ms, &groups).await;

        gate.update(now_ms);

        poll_groups(&mut groups);
        if gate.is_open() {
            monitor::log_groups(&groups);
        }

        yield_now().await;
    }
}

/// Permanent halt after a fatal configuration error: keep the diagnostic
/// visible, never retry. There is no process exit on this target.
async fn halt() -> ! {
    loop {
        Timer::after_secs(10).await;
    }
}

//! Status display
//!
//! Optional SSD1306 OLED on I2C1, detected by a bus scan at startup. When
//! absent the controller runs headless and every update is skipped. When
//! present, the IO monitor screen shows all 24 automation points as
//! two-digit labels: inverted while the point is high, underscores when
//! the point is not assigned to any group (or its line failed to bind).

pub mod ssd1306;

use core::fmt::Write;

use defmt::{info, warn};
use embassy_rp::bind_interrupts;
use embassy_rp::i2c::{self, Async, I2c, InterruptHandler};
use embassy_rp::peripherals::{I2C1, PIN_26, PIN_27};
use embassy_rp::Peri;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal_async::i2c::I2c as _;
use heapless::String;

use orbis_core::config::{MAX_INPUT_GPIO, VALID_OUTPUT_GPIOS};
use orbis_core::engine::{input_level, output_level, RuntimeGroup};
use orbis_core::timing::IntervalTimer;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => InterruptHandler<I2C1>;
});

/// I2C bus frequency
const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Minimum time between redraws
const REFRESH_INTERVAL_MS: u64 = 500;

/// 7-bit address range probed by the startup scan
const SCAN_RANGE: core::ops::RangeInclusive<u8> = 0x08..=0x77;

type DisplayBus = I2c<'static, I2C1, Async>;

/// The IO monitor screen, or a stub when no panel was detected
pub struct IoDisplay {
    panel: Option<ssd1306::Ssd1306<DisplayBus>>,
    refresh: IntervalTimer,
}

impl IoDisplay {
    /// Bring up I2C1 and probe for a panel.
    ///
    /// The first address answering a read wins; no answer means the
    /// display is skipped entirely for the rest of the run.
    pub async fn detect(
        i2c1: Peri<'static, I2C1>,
        scl: Peri<'static, PIN_27>,
        sda: Peri<'static, PIN_26>,
    ) -> Self {
        let mut config = i2c::Config::default();
        config.frequency = I2C_FREQUENCY_HZ;
        let mut bus: DisplayBus = I2c::new_async(i2c1, scl, sda, Irqs, config);

        let refresh = IntervalTimer::new(REFRESH_INTERVAL_MS);

        let Some(address) = scan(&mut bus).await else {
            info!("No I2C display found during scan");
            return Self {
                panel: None,
                refresh,
            };
        };
        info!("Display configured on I2C1 dev 0x{=u8:x}", address);

        let mut panel = ssd1306::Ssd1306::new(bus, address);
        match panel.init().await {
            Ok(()) => Self {
                panel: Some(panel),
                refresh,
            },
            Err(_) => {
                warn!("Error configuring display, continuing without it");
                Self {
                    panel: None,
                    refresh,
                }
            }
        }
    }

    /// Redraw the IO monitor screen when the refresh interval elapsed
    pub async fn update<I, O>(&mut self, now_ms: u64, groups: &[RuntimeGroup<I, O>]) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        if !self.refresh.due(now_ms) {
            return;
        }
        self.refresh.fire(now_ms);

        panel.clear();
        draw_monitor(panel, groups);
        if panel.flush().await.is_err() {
            warn!("Error refreshing display");
        }
    }

    /// Show a fatal configuration error, word-wrapped
    pub async fn show_error(&mut self, message: &str) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };

        panel.clear();
        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let mut line: String<21> = String::new();
        let mut y = 8;
        for word in message.split_whitespace() {
            if !line.is_empty() && line.len() + 1 + word.len() > line.capacity() {
                let _ = Text::with_baseline(&line, Point::new(0, y), style, Baseline::Top)
                    .draw(panel);
                y += 11;
                line.clear();
            }
            if !line.is_empty() {
                let _ = line.push(' ');
            }
            let _ = line.push_str(word);
        }
        if !line.is_empty() {
            let _ = Text::with_baseline(&line, Point::new(0, y), style, Baseline::Top).draw(panel);
        }

        if panel.flush().await.is_err() {
            warn!("Error refreshing display");
        }
    }
}

/// Probe the bus for the first answering device
async fn scan(bus: &mut DisplayBus) -> Option<u8> {
    let mut probe = [0u8; 1];
    for address in SCAN_RANGE {
        if bus.read(address, &mut probe).await.is_ok() {
            return Some(address);
        }
    }
    None
}

/// Draw the IO monitor screen into the frame buffer
fn draw_monitor<I, O>(panel: &mut ssd1306::Ssd1306<DisplayBus>, groups: &[RuntimeGroup<I, O>]) {
    let normal = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let inverted = MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::Off)
        .background_color(BinaryColor::On)
        .build();

    let _ = Text::with_baseline("ORBIS Automation", Point::new(16, 0), normal, Baseline::Top)
        .draw(panel);

    let _ = Text::with_baseline("IN:", Point::new(0, 12), normal, Baseline::Top).draw(panel);
    for gpio in 0..=MAX_INPUT_GPIO {
        let col = i32::from(gpio % 10);
        let row = i32::from(gpio / 10);
        let point = Point::new(4 + col * 12, 22 + row * 10);
        draw_point_label(panel, point, gpio, input_level(groups, gpio), normal, inverted);
    }

    let _ = Text::with_baseline("OUT:", Point::new(0, 44), normal, Baseline::Top).draw(panel);
    for (idx, &gpio) in VALID_OUTPUT_GPIOS.iter().enumerate() {
        let point = Point::new(30 + idx as i32 * 12, 44);
        draw_point_label(panel, point, gpio, output_level(groups, gpio), normal, inverted);
    }
}

/// One two-digit point label: inverted when high, underscores when the
/// point is absent (unassigned or unbound).
fn draw_point_label(
    panel: &mut ssd1306::Ssd1306<DisplayBus>,
    point: Point,
    gpio: u8,
    level: Option<bool>,
    normal: MonoTextStyle<'static, BinaryColor>,
    inverted: MonoTextStyle<'static, BinaryColor>,
) {
    match level {
        Some(high) => {
            let mut label: String<2> = String::new();
            let _ = write!(label, "{:02}", gpio);
            let style = if high { inverted } else { normal };
            let _ = Text::with_baseline(&label, point, style, Baseline::Top).draw(panel);
        }
        None => {
            let _ = Text::with_baseline("__", point, normal, Baseline::Top).draw(panel);
        }
    }
}

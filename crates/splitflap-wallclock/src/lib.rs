//! Wall-clock tick source for the splitflap engine.
//!
//! Plays the host role the core leaves open: reads local time, formats
//! it as a six-digit reading, seeds the engine at startup, and forwards
//! `dt` ticks. The scheduling contract is the core's: call
//! [`ClockDriver::tick`] at >= 60 Hz at least while the face is
//! animating. A fixed-step loop, a frame callback, or a test harness
//! driving synthetic time all qualify.

use chrono::{Local, Timelike};

use splitflap_core::{
    ClockEvent, Command, Config, DigitReading, Engine, Inputs, Outputs, TimeFormat,
};

/// Scale presets offered by the host's size menu.
pub const SCALE_PRESETS: &[(&str, f32)] = &[
    ("Small (80%)", 0.8),
    ("Medium (100%)", 1.0),
    ("Large (120%)", 1.2),
    ("XL (150%)", 1.5),
    ("XXL (200%)", 2.0),
];

/// Source of hour/minute/second triples. Seam for tests: production
/// code uses [`LocalClock`], tests drive scripted time.
pub trait TimeSource {
    fn now_hms(&mut self) -> (u32, u32, u32);
}

/// Production source backed by the local system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now_hms(&mut self) -> (u32, u32, u32) {
        let now = Local::now();
        (now.hour(), now.minute(), now.second())
    }
}

/// Drives an [`Engine`] from a [`TimeSource`]: samples every tick,
/// delivers a reading only when it differs from the last one delivered
/// (once per wall-clock second in practice), and stages commands for
/// the next tick.
pub struct ClockDriver<S: TimeSource> {
    engine: Engine,
    source: S,
    format: TimeFormat,
    last_reading: DigitReading,
    pending: Vec<Command>,
}

impl<S: TimeSource> ClockDriver<S> {
    /// Build a driver and seed the engine from the source's current
    /// time, so the first frame shows the right face without flipping.
    pub fn new(cfg: Config, format: TimeFormat, mut source: S) -> Self {
        let (h, m, s) = source.now_hms();
        let reading = DigitReading::from_hms(h, m, s, format);
        let mut engine = Engine::new(cfg);
        engine.seed(reading);
        log::info!("seeded clock face at {reading}");
        Self {
            engine,
            source,
            format,
            last_reading: reading,
            pending: Vec::new(),
        }
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> &Outputs {
        let (h, m, s) = self.source.now_hms();
        let reading = DigitReading::from_hms(h, m, s, self.format);
        let mut inputs = Inputs {
            commands: std::mem::take(&mut self.pending),
            reading: None,
        };
        if reading != self.last_reading {
            self.last_reading = reading;
            inputs.reading = Some(reading);
        }
        let outputs = self.engine.update(dt, inputs);
        for event in &outputs.events {
            match event {
                ClockEvent::FlipStarted { slot, from, to } => {
                    log::debug!("digit {} flips {from} -> {to}", slot.0);
                }
                ClockEvent::FlipFinished { slot, value } => {
                    log::trace!("digit {} settled at {value}", slot.0);
                }
                _ => {}
            }
        }
        outputs
    }

    /// Stage a scale change for the next tick.
    pub fn set_scale(&mut self, scale: f32) {
        self.pending.push(Command::SetScale { scale });
    }

    /// Switch the hour convention. The hour digits flip naturally on
    /// the next reading that differs.
    pub fn set_format(&mut self, format: TimeFormat) {
        if format != self.format {
            log::debug!("time format -> {format:?}");
            self.format = format;
        }
    }

    #[inline]
    pub fn format(&self) -> TimeFormat {
        self.format
    }

    #[inline]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }
}

impl ClockDriver<LocalClock> {
    /// Driver on the local system clock.
    pub fn local(cfg: Config, format: TimeFormat) -> Self {
        Self::new(cfg, format, LocalClock)
    }
}

//! Minimal host: drives the clock at ~60 Hz against the local system
//! time and reprints the face whenever a digit commits.
//!
//! Run with `RUST_LOG=debug` to watch flips start and settle.

use std::thread;
use std::time::{Duration, Instant};

use splitflap_core::{ClockEvent, Config, DigitSlot, TimeFormat};
use splitflap_wallclock::{ClockDriver, LocalClock};

fn face_string(driver: &ClockDriver<LocalClock>) -> String {
    let engine = driver.engine();
    let d = |i: u8| engine.digit(DigitSlot(i)).current();
    format!("{}{}:{}{}:{}{}", d(0), d(1), d(2), d(3), d(4), d(5))
}

fn main() {
    env_logger::init();
    let mut driver = ClockDriver::local(Config::default(), TimeFormat::H24);
    println!("{}", face_string(&driver));

    let mut last = Instant::now();
    loop {
        thread::sleep(Duration::from_millis(16));
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        let committed = driver
            .tick(dt)
            .events
            .iter()
            .any(|e| matches!(e, ClockEvent::FlipFinished { .. }));
        if committed {
            println!("{}", face_string(&driver));
        }
    }
}

//! Engine: owns the clock face (six digit tiles, two colons) and steps it.
//!
//! `update` applies inputs first, then advances time, so a flip that
//! finishes in update N is committed before any request delivered in
//! update N+1 is processed. One tick of one digit can never overlap
//! another flip of the same digit; the six digits are independent.

use std::array;

use crate::colon::ColonBlinker;
use crate::config::Config;
use crate::digit::FlipDigit;
use crate::geometry::{clamp_scale, FaceLayout};
use crate::ids::{ColonSlot, DigitSlot, Slot, COLON_SLOTS, DIGIT_SLOTS, FACE_ORDER};
use crate::inputs::{Command, Inputs};
use crate::outputs::{Change, ClockEvent, Outputs, SlotPlan};
use crate::render::{plan_colon, plan_tile};
use crate::time::DigitReading;

#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    scale: f32,
    digits: [FlipDigit; DIGIT_SLOTS],
    colons: [ColonBlinker; COLON_SLOTS],
    /// Set when geometry changed and every slot must repaint this tick.
    face_dirty: bool,
    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create an engine with all digits at 0. Call [`Engine::seed`] with
    /// the first reading before the first update so the face does not
    /// flip in from six zeros.
    pub fn new(cfg: Config) -> Self {
        let scale = clamp_scale(cfg.scale);
        let digits = array::from_fn(|_| FlipDigit::new(0, cfg.flip_duration_ms, cfg.easing));
        let colons = array::from_fn(|_| ColonBlinker::new(cfg.blink_interval_ms));
        Self {
            cfg,
            scale,
            digits,
            colons,
            face_dirty: false,
            outputs: Outputs::default(),
        }
    }

    /// Adopt a reading without animating: every digit's committed and
    /// pending face become the reading's value.
    pub fn seed(&mut self, reading: DigitReading) {
        for (digit, &value) in self.digits.iter_mut().zip(reading.digits()) {
            digit.seed(value);
        }
    }

    /// Step the face by `dt` seconds with the given inputs.
    pub fn update(&mut self, dt: f32, inputs: Inputs) -> &Outputs {
        self.outputs.clear();
        self.apply_inputs(inputs);
        self.advance(dt);
        &self.outputs
    }

    fn apply_inputs(&mut self, inputs: Inputs) {
        for cmd in inputs.commands {
            match cmd {
                Command::SetScale { scale } => {
                    let scale = clamp_scale(scale);
                    if scale != self.scale {
                        self.scale = scale;
                        self.face_dirty = true;
                        self.outputs.push_event(ClockEvent::ScaleChanged { scale });
                    }
                }
            }
        }
        if let Some(reading) = inputs.reading {
            self.apply_reading(reading);
        }
    }

    /// Per-position compare against the committed face; only differing
    /// positions are asked to flip, and of those only idle digits start
    /// an animation (the rest coalesce onto their in-flight commit).
    fn apply_reading(&mut self, reading: DigitReading) {
        for (i, (digit, &target)) in self
            .digits
            .iter_mut()
            .zip(reading.digits())
            .enumerate()
        {
            if target == digit.current() {
                continue;
            }
            let from = digit.current();
            if digit.request_flip(target) {
                self.outputs.push_event(ClockEvent::FlipStarted {
                    slot: DigitSlot(i as u8),
                    from,
                    to: target,
                });
            }
        }
    }

    fn advance(&mut self, dt: f32) {
        for i in 0..DIGIT_SLOTS {
            let slot = DigitSlot(i as u8);
            let ticked = self.digits[i].tick(dt);
            if let Some(tick) = ticked {
                if tick.committed {
                    self.outputs.push_event(ClockEvent::FlipFinished {
                        slot,
                        value: self.digits[i].current(),
                    });
                }
            }
            if ticked.is_some() || self.face_dirty {
                self.push_digit_plan(slot);
            }
        }
        for i in 0..COLON_SLOTS {
            let slot = ColonSlot(i as u8);
            // An even toggle count nets out to the same visible state.
            let toggled = self.colons[i].tick(dt) % 2 == 1;
            if toggled {
                self.outputs.push_event(ClockEvent::BlinkToggled {
                    slot,
                    on: self.colons[i].is_on(),
                });
            }
            if toggled || self.face_dirty {
                self.push_colon_plan(slot);
            }
        }
        self.face_dirty = false;
    }

    fn push_digit_plan(&mut self, slot: DigitSlot) {
        let digit = &self.digits[slot.index()];
        let plan = plan_tile(
            digit.current(),
            digit.next(),
            digit.angle(),
            &self.cfg.metrics,
            self.scale,
        );
        self.outputs.push_change(Change {
            slot: Slot::Digit(slot),
            plan: SlotPlan::Digit(plan),
        });
    }

    fn push_colon_plan(&mut self, slot: ColonSlot) {
        let plan = plan_colon(self.colons[slot.index()].is_on(), &self.cfg.metrics, self.scale);
        self.outputs.push_change(Change {
            slot: Slot::Colon(slot),
            plan: SlotPlan::Colon(plan),
        });
    }

    /// Draw plans for every slot in visual order, for hosts repainting
    /// the whole face (first frame, window damage).
    pub fn frame(&self) -> Vec<Change> {
        FACE_ORDER
            .iter()
            .map(|slot| match *slot {
                Slot::Digit(d) => {
                    let digit = &self.digits[d.index()];
                    Change {
                        slot: *slot,
                        plan: SlotPlan::Digit(plan_tile(
                            digit.current(),
                            digit.next(),
                            digit.angle(),
                            &self.cfg.metrics,
                            self.scale,
                        )),
                    }
                }
                Slot::Colon(c) => Change {
                    slot: *slot,
                    plan: SlotPlan::Colon(plan_colon(
                        self.colons[c.index()].is_on(),
                        &self.cfg.metrics,
                        self.scale,
                    )),
                },
            })
            .collect()
    }

    /// Scaled slot positions and overall face size.
    pub fn layout(&self) -> FaceLayout {
        FaceLayout::compute(&self.cfg.metrics, self.scale)
    }

    /// True while any digit flip is in flight. Hosts must keep the tick
    /// cadence (>= 60 Hz) at least as long as this holds.
    pub fn is_animating(&self) -> bool {
        self.digits.iter().any(|d| d.is_flipping())
    }

    #[inline]
    pub fn digit(&self, slot: DigitSlot) -> &FlipDigit {
        &self.digits[slot.index()]
    }

    #[inline]
    pub fn colon_on(&self, slot: ColonSlot) -> bool {
        self.colons[slot.index()].is_on()
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }
}

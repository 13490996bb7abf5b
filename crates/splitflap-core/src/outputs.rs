//! Output contracts from the engine.
//!
//! `changes` carries fresh draw plans for the slots that moved this tick;
//! a non-empty list is the redraw request. `events` carries discrete
//! semantic signals in emission order: for any one flip, every progress
//! change precedes the single `FlipFinished`.

use serde::{Deserialize, Serialize};

use crate::ids::{ColonSlot, DigitSlot, Slot};
use crate::render::{ColonPlan, TilePlan};

/// Draw plan payload for one slot.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SlotPlan {
    Digit(TilePlan),
    Colon(ColonPlan),
}

/// One repainted slot for this tick.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub slot: Slot,
    pub plan: SlotPlan,
}

/// Discrete semantic signals emitted during stepping.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ClockEvent {
    /// A digit began folding from `from` toward `to`.
    FlipStarted { slot: DigitSlot, from: u8, to: u8 },
    /// A digit committed its pending value. Fires exactly once per flip,
    /// after that flip's last progress change and before any later
    /// request is processed.
    FlipFinished { slot: DigitSlot, value: u8 },
    /// A colon's visible state changed.
    BlinkToggled { slot: ColonSlot, on: bool },
    /// The face scale changed; every slot's geometry is stale and a full
    /// set of plans accompanies this event in `changes`.
    ScaleChanged { scale: f32 },
}

/// Outputs returned by `Engine::update`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<ClockEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: ClockEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }
}

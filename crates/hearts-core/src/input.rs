//! Pointer and hold staging.
//!
//! Event handlers write into these small structs; the engine reads them at
//! the start of the next tick. Nothing here runs simulation work.

use crate::constants::{HUG_ACTIVE_THRESHOLD, HUG_EASE_BASE, SPIRAL_WINDOW_MS};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pub active: bool,
    /// Last known position in device pixels.
    pub position: Vec2,
    pub last_move_ms: f64,
    pub spiral_until_ms: f64,
    burst_requested: bool,
}

impl PointerState {
    /// Record a move. Every move reopens the spiral window.
    pub fn move_to(&mut self, position: Vec2, now_ms: f64) {
        self.position = position;
        self.active = true;
        self.last_move_ms = now_ms;
        self.spiral_until_ms = now_ms + SPIRAL_WINDOW_MS;
    }

    pub fn leave(&mut self) {
        self.active = false;
    }

    pub fn request_burst(&mut self) {
        self.burst_requested = true;
    }

    pub fn burst_pending(&self) -> bool {
        self.burst_requested
    }

    /// Compare-and-clear: returns true for exactly one caller per request.
    pub fn take_burst(&mut self) -> bool {
        std::mem::take(&mut self.burst_requested)
    }

    #[inline]
    pub fn spiral_open(&self, now_ms: f64) -> bool {
        now_ms < self.spiral_until_ms
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct HoldState {
    pub holding: bool,
    pub started_ms: f64,
    /// Eased hug intensity in [0, 1].
    pub intensity: f32,
}

impl HoldState {
    pub fn press(&mut self, now_ms: f64) {
        self.holding = true;
        self.started_ms = now_ms;
    }

    /// Returns whether a hold was actually in progress.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.holding, false)
    }

    /// Frame-rate independent exponential ease toward 1 (held) or 0.
    pub fn ease(&mut self, dt: f32) {
        let target = if self.holding { 1.0 } else { 0.0 };
        let alpha = 1.0 - HUG_EASE_BASE.powf(dt);
        self.intensity = (self.intensity + (target - self.intensity) * alpha).clamp(0.0, 1.0);
    }

    #[inline]
    pub fn hugging(&self) -> bool {
        self.intensity > HUG_ACTIVE_THRESHOLD
    }

    pub fn held_for_ms(&self, now_ms: f64) -> f64 {
        if self.holding {
            (now_ms - self.started_ms).max(0.0)
        } else {
            0.0
        }
    }
}

//! Spawn governance: how many hearts to create per tick.

use crate::constants::*;
use rand::Rng;

/// Adaptive ambient spawn rate plus burst sizing.
///
/// Under frame-rate pressure the rate ramps down toward the floor faster than
/// it ramps back up, so the two ramps never chase each other.
#[derive(Clone, Debug)]
pub struct SpawnGovernor {
    rate: f32,
    base: f32,
    floor: f32,
}

impl SpawnGovernor {
    pub fn new(base: f32, floor: f32) -> Self {
        Self {
            rate: base,
            base,
            floor: floor.min(base),
        }
    }

    /// Current ambient rate in particles per second.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn reset(&mut self) {
        self.rate = self.base;
    }

    /// Estimate fps from `dt` and nudge the rate.
    pub fn adapt(&mut self, dt: f32) {
        let fps = estimate_fps(dt);
        if fps < LOW_FPS_THRESHOLD {
            self.rate = (self.rate - SPAWN_DECAY_PER_SEC * dt).max(self.floor);
        } else {
            self.rate = (self.rate + SPAWN_RECOVER_PER_SEC * dt).min(self.base);
        }
    }

    /// Integer ambient count for this tick; the fractional part becomes a
    /// coin flip so the long-run mean equals `rate * dt`.
    pub fn ambient_count<R: Rng + ?Sized>(&self, dt: f32, rng: &mut R) -> usize {
        stochastic_count(self.rate * dt, rng)
    }
}

#[inline]
pub fn estimate_fps(dt: f32) -> f32 {
    if dt > 0.0 {
        1.0 / dt
    } else {
        FALLBACK_FPS
    }
}

/// `floor(x) + Bernoulli(frac(x))`
pub fn stochastic_count<R: Rng + ?Sized>(expected: f32, rng: &mut R) -> usize {
    if !(expected.is_finite() && expected > 0.0) {
        return 0;
    }
    let whole = expected.floor();
    let extra = if rng.gen::<f32>() < expected - whole {
        1
    } else {
        0
    };
    whole as usize + extra
}

/// Burst strength grows with the hug that preceded it.
#[inline]
pub fn burst_strength(hug: f32) -> f32 {
    (BURST_STRENGTH_MIN + hug * BURST_STRENGTH_PER_HUG)
        .clamp(BURST_STRENGTH_MIN, BURST_STRENGTH_MAX)
}

/// Hearts emitted by one burst: 29 for a plain tap, 45 after a full hug.
#[inline]
pub fn burst_count(hug: f32) -> usize {
    (BURST_BASE_COUNT + BURST_COUNT_PER_STRENGTH * burst_strength(hug)).floor() as usize
}

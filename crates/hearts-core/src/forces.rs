//! Pointer force field.
//!
//! Each particle falls under exactly one regime per tick. Hug wins whenever
//! the eased hold intensity is above threshold, spiral applies inside the
//! one-second window after a move, idle covers the rest. There is no
//! blending between regimes: hug already ramps smoothly and the spiral cutoff
//! is meant to be abrupt.

use crate::constants::*;
use crate::particle::Particle;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ForceRegime {
    Hug,
    Spiral,
    Idle,
}

impl ForceRegime {
    /// Predicate order: hug, then spiral, then idle.
    pub fn select(hug: f32, spiral_open: bool) -> Self {
        if hug > HUG_ACTIVE_THRESHOLD {
            ForceRegime::Hug
        } else if spiral_open {
            ForceRegime::Spiral
        } else {
            ForceRegime::Idle
        }
    }

    /// Influence radius before dpr scaling.
    pub fn radius(self) -> f32 {
        match self {
            ForceRegime::Hug => HUG_RADIUS,
            ForceRegime::Spiral => SPIRAL_RADIUS,
            ForceRegime::Idle => IDLE_RADIUS,
        }
    }
}

/// Everything the evaluator reads for one tick. Built once, shared by all
/// particles.
#[derive(Clone, Copy, Debug)]
pub struct FieldSample {
    pub target: Vec2,
    pub regime: ForceRegime,
    pub hug: f32,
    pub dpr: f32,
}

impl FieldSample {
    pub fn new(target: Vec2, hug: f32, spiral_open: bool, dpr: f32) -> Self {
        Self {
            target,
            regime: ForceRegime::select(hug, spiral_open),
            hug,
            dpr,
        }
    }

    /// Linear falloff: 1 at the pointer, 0 at and beyond the regime radius.
    #[inline]
    pub fn weight(&self, dist: f32) -> f32 {
        (1.0 - dist / (self.regime.radius() * self.dpr)).clamp(0.0, 1.0)
    }

    /// Apply this tick's force to `p.velocity`.
    pub fn apply(&self, p: &mut Particle, dt: f32) {
        let delta = self.target - p.position;
        let dist = delta.length() + DIST_EPSILON;
        let dir = delta / dist;
        let w = self.weight(dist);
        let dpr = self.dpr;

        match self.regime {
            ForceRegime::Hug => {
                let pull = HUG_PULL * dpr * w * self.hug;
                p.velocity += dir * pull * dt;

                // Extra drag so hearts settle on the pointer instead of overshooting.
                p.velocity *= 1.0 - HUG_DAMPING * w * self.hug * dt;

                let max_v =
                    HUG_MAX_SPEED * dpr * (HUG_MAX_SPEED_FLOOR + (1.0 - HUG_MAX_SPEED_FLOOR) * w);
                p.velocity = p.velocity.clamp_length_max(max_v);
            }
            ForceRegime::Spiral => {
                let orbit = SPIRAL_ORBIT * dpr * w;
                let tangent = Vec2::new(-dir.y, dir.x * SPIRAL_ORBIT_VERTICAL);
                p.velocity += tangent * orbit * dt;

                let pull = SPIRAL_PULL * dpr * w;
                p.velocity += Vec2::new(dir.x, dir.y * SPIRAL_PULL_VERTICAL) * pull * dt;
            }
            ForceRegime::Idle => {
                let pull = IDLE_PULL * dpr * w;
                p.velocity += Vec2::new(dir.x, dir.y * IDLE_PULL_VERTICAL) * pull * dt;
            }
        }
    }
}

//! Heart particles and the bounded pool that owns them.

use crate::constants::*;
use crate::state::Viewport;
use glam::Vec2;
use rand::Rng;
use std::collections::VecDeque;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnMode {
    Ambient,
    Burst,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub rotation: f32,
    pub angular_velocity: f32,
    pub wobble: f32,
    pub sway: f32,
    /// Parallax scalar in [0.35, 1].
    pub depth: f32,
    pub alpha: f32,
    /// Index into [`PALETTE`].
    pub fill: usize,
    pub age: f32,
    pub lifetime: f32,
    pub mode: SpawnMode,
}

impl Particle {
    /// Draw a fresh particle from the documented ranges.
    ///
    /// Ambient hearts appear at a random x in a band just above the top edge
    /// unless `at` pins them; bursts always pass their trigger point.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        mode: SpawnMode,
        viewport: &Viewport,
        at: Option<Vec2>,
    ) -> Self {
        let dpr = viewport.dpr;
        let burst = mode == SpawnMode::Burst;
        let depth = range(rng, DEPTH_RANGE);
        let position = at.unwrap_or_else(|| {
            Vec2::new(
                rng.gen_range(0.0..viewport.width.max(1.0)),
                rng.gen_range(-SPAWN_BAND_FRACTION * viewport.height.max(1.0)..0.0),
            )
        });

        let size_range = if burst {
            BURST_SIZE_RANGE
        } else {
            AMBIENT_SIZE_RANGE
        };
        let size = range(rng, size_range) * dpr * depth;

        let fall_scale = if burst { BURST_FALL_SCALE } else { 1.0 };
        let vy = range(rng, FALL_SPEED_RANGE) * dpr * depth * fall_scale;
        let mut vx = range(rng, DRIFT_RANGE) * dpr;
        if burst {
            vx += rng.gen_range(-BURST_RADIAL_SPEED..BURST_RADIAL_SPEED) * dpr;
        }

        let sway = range(rng, SWAY_RATE_RANGE);
        let wobble = rng.gen_range(0.0..TAU);
        let rotation = range(rng, ROTATION_RANGE);
        let angular_velocity = range(rng, ANGULAR_VELOCITY_RANGE);
        let alpha = range(rng, BASE_ALPHA_RANGE) * (0.55 + 0.45 * depth);
        let fill = rng.gen_range(0..PALETTE.len());
        let lifetime = if burst {
            range(rng, BURST_LIFETIME_RANGE)
        } else {
            range(rng, AMBIENT_LIFETIME_RANGE)
        };

        Self {
            position,
            velocity: Vec2::new(vx, vy),
            size,
            rotation,
            angular_velocity,
            wobble,
            sway,
            depth,
            alpha,
            fill,
            age: 0.0,
            lifetime,
            mode,
        }
    }

    /// Normalized age in [0, 1]
    pub fn age_ratio(&self) -> f32 {
        if self.lifetime <= 0.0 {
            1.0
        } else {
            (self.age / self.lifetime).min(1.0)
        }
    }

    /// Past its lifetime or fallen well below the viewport.
    pub fn expired(&self, viewport_height: f32) -> bool {
        self.age > self.lifetime || self.position.y > FLOOR_FRACTION * viewport_height
    }

    pub fn color(&self) -> [f32; 4] {
        PALETTE[self.fill % PALETTE.len()]
    }
}

#[inline]
fn range<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    rng.gen_range(lo..hi)
}

/// Insertion-ordered pool with a hard cap; overflow drops the oldest entries.
pub struct ParticlePool {
    particles: VecDeque<Particle>,
    capacity: usize,
}

impl ParticlePool {
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Append a particle, then evict the oldest surplus. Returns how many
    /// particles were evicted.
    pub fn insert(&mut self, particle: Particle) -> usize {
        self.particles.push_back(particle);
        let surplus = self.particles.len().saturating_sub(self.capacity);
        self.particles.drain(..surplus);
        surplus
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Keep the particles for which `f` returns true, preserving order.
    pub fn retain_mut<F: FnMut(&mut Particle) -> bool>(&mut self, f: F) {
        self.particles.retain_mut(f);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

//! Trail-style rendering against an abstract 2D surface.

use crate::constants::*;
use crate::particle::ParticlePool;
use glam::Vec2;

/// One heart as the surface should draw it. `size` already includes the
/// heartbeat pulse; `alpha` already includes the lifetime fade.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartSprite {
    pub position: Vec2,
    pub rotation: f32,
    pub size: f32,
    pub color: [f32; 4],
    pub alpha: f32,
}

/// A 2D drawing target in device pixels.
pub trait Surface {
    fn size(&self) -> (f32, f32);

    /// Composite white at `alpha` over the whole surface.
    fn veil(&mut self, alpha: f32);

    /// Fully clear to transparent.
    fn clear(&mut self);

    fn draw_heart(&mut self, heart: &HeartSprite);
}

/// Heart outline in unit space, scaled by the sprite size at draw time.
///
/// Two mirrored cubic lobes from the notch at the top to the tip at the
/// bottom: `(start, [c1, c2, end])` for each lobe.
pub mod outline {
    pub const START: [f32; 2] = [0.0, -0.35];
    pub const RIGHT_LOBE: [[f32; 2]; 3] = [[0.5, -0.85], [1.15, -0.15], [0.0, 0.8]];
    pub const LEFT_LOBE: [[f32; 2]; 3] = [[-1.15, -0.15], [-0.5, -0.85], [0.0, -0.35]];

    /// Soft highlight: center, radii, rotation (radians).
    pub const HIGHLIGHT_CENTER: [f32; 2] = [-0.15, -0.22];
    pub const HIGHLIGHT_RADII: [f32; 2] = [0.18, 0.12];
    pub const HIGHLIGHT_ROTATION: f32 = -0.5;
}

/// Two-beat heartbeat envelope in [0, 1]: a quick bump then a smaller echo.
pub fn beat_envelope(t_ms: f64, bpm: f32) -> f32 {
    let period = 60_000.0 / bpm.max(1.0) as f64;
    let x = (t_ms.rem_euclid(period) / period) as f32;
    let bump1 = (-((x - 0.08) / 0.055).powi(2)).exp();
    let bump2 = 0.55 * (-((x - 0.22) / 0.085).powi(2)).exp();
    (bump1 + bump2).clamp(0.0, 1.0)
}

/// Shared pulse multiplier for every heart this frame.
#[inline]
pub fn pulse_scale(beat: f32) -> f32 {
    1.0 + PULSE_SCALE * beat
}

/// Linear fade from full base alpha down to `FADE_FLOOR` of it.
#[inline]
pub fn faded_alpha(base_alpha: f32, age_ratio: f32) -> f32 {
    base_alpha * (FADE_FLOOR + (1.0 - FADE_FLOOR) * (1.0 - age_ratio))
}

pub fn paint_pool(surface: &mut dyn Surface, pool: &ParticlePool, pulse: f32) {
    for p in pool.iter() {
        surface.draw_heart(&HeartSprite {
            position: p.position,
            rotation: p.rotation,
            size: p.size * pulse,
            color: p.color(),
            alpha: faded_alpha(p.alpha, p.age_ratio()),
        });
    }
}

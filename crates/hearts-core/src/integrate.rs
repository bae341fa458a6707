//! Per-particle motion and lifecycle.

use crate::constants::*;
use crate::forces::FieldSample;
use crate::particle::{Particle, SpawnMode};
use crate::state::Viewport;

/// Advance one particle by `dt` seconds and report whether it survives.
///
/// Order: wobble and wind, pointer force, semi-implicit Euler on the updated
/// velocity, damping, horizontal wrap, ageing, expiry.
pub fn step(p: &mut Particle, field: Option<&FieldSample>, viewport: &Viewport, dt: f32) -> bool {
    p.wobble += dt * p.sway;
    let wind = p.wobble.sin() * WIND_AMPLITUDE * viewport.dpr;

    if let Some(field) = field {
        field.apply(p, dt);
    }

    p.position.x += (p.velocity.x + wind) * dt;
    p.position.y += p.velocity.y * dt;
    p.rotation += p.angular_velocity * dt;

    damp(p);
    wrap_horizontal(p, viewport.width);

    p.age += dt;
    !p.expired(viewport.height)
}

/// Exponential drag applied every tick regardless of regime.
#[inline]
pub fn damp(p: &mut Particle) {
    p.velocity.x *= DAMPING_X;
    p.velocity.y *= match p.mode {
        SpawnMode::Burst => DAMPING_Y_BURST,
        SpawnMode::Ambient => DAMPING_Y_AMBIENT,
    };
}

/// Teleport across when leaving `[-0.2w, 1.2w]`.
#[inline]
pub fn wrap_horizontal(p: &mut Particle, width: f32) {
    let margin = WRAP_MARGIN_FRACTION * width;
    if p.position.x < -margin {
        p.position.x = width + margin;
    } else if p.position.x > width + margin {
        p.position.x = -margin;
    }
}

// Host-side tests for the heartbeat envelope, fades and painting.

mod common;

use common::{Op, RecordingSurface};
use hearts_core::constants::*;
use hearts_core::render::{beat_envelope, faded_alpha, paint_pool, pulse_scale};
use hearts_core::{Particle, ParticlePool, SpawnMode, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn filled_pool(n: usize) -> ParticlePool {
    let mut rng = StdRng::seed_from_u64(31);
    let vp = Viewport::new(640.0, 480.0, 1.0);
    let mut pool = ParticlePool::new(n);
    for i in 0..n {
        let mut p = Particle::generate(&mut rng, SpawnMode::Ambient, &vp, None);
        p.age = p.lifetime * (i as f32 / n as f32);
        pool.insert(p);
    }
    pool
}

#[test]
fn beat_envelope_peaks_early_and_repeats() {
    let bpm = 60.0;
    assert_eq!(beat_envelope(80.0, bpm), 1.0);
    assert!(beat_envelope(500.0, bpm) < 0.01);
    assert!((beat_envelope(80.0, bpm) - beat_envelope(1080.0, bpm)).abs() < 1e-4);
    assert!((beat_envelope(220.0, bpm) - beat_envelope(3220.0, bpm)).abs() < 1e-4);

    // Faster heart, shorter period.
    assert!((beat_envelope(40.0, 120.0) - beat_envelope(80.0, 60.0)).abs() < 1e-4);

    for t in 0..2000 {
        let b = beat_envelope(t as f64, bpm);
        assert!((0.0..=1.0).contains(&b));
    }
}

#[test]
fn pulse_scale_stays_small() {
    assert_eq!(pulse_scale(0.0), 1.0);
    assert!((pulse_scale(1.0) - (1.0 + PULSE_SCALE)).abs() < 1e-6);
}

#[test]
fn alpha_fades_linearly_to_the_floor() {
    assert!((faded_alpha(0.8, 0.0) - 0.8).abs() < 1e-6);
    assert!((faded_alpha(1.0, 1.0) - FADE_FLOOR).abs() < 1e-6);
    let mid = faded_alpha(1.0, 0.5);
    assert!((mid - (FADE_FLOOR + 1.0) / 2.0).abs() < 1e-6);
}

#[test]
fn every_heart_shares_the_frame_pulse() {
    let pool = filled_pool(40);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    let pulse = pulse_scale(0.7);
    paint_pool(&mut surface, &pool, pulse);

    let hearts = surface.hearts();
    assert_eq!(hearts.len(), pool.len());
    for (sprite, p) in hearts.iter().zip(pool.iter()) {
        assert!((sprite.size - p.size * pulse).abs() < 1e-4);
        assert_eq!(sprite.position, p.position);
        assert_eq!(sprite.color, p.color());
        assert!(sprite.alpha <= p.alpha);
    }
}

#[test]
fn painting_draws_oldest_first_and_mutates_nothing() {
    let pool = filled_pool(10);
    let before: Vec<_> = pool.iter().map(|p| (p.position, p.velocity, p.age)).collect();

    let mut surface = RecordingSurface::new(640.0, 480.0);
    paint_pool(&mut surface, &pool, 1.0);

    let after: Vec<_> = pool.iter().map(|p| (p.position, p.velocity, p.age)).collect();
    assert_eq!(before, after);
    assert!(surface.ops.iter().all(|op| matches!(op, Op::Heart(_))));

    let positions: Vec<_> = surface.hearts().iter().map(|h| h.position).collect();
    let expected: Vec<_> = pool.iter().map(|p| p.position).collect();
    assert_eq!(positions, expected);
}

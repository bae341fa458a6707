// Host-side tests for particle generation, the bounded pool and per-particle
// lifecycle.

use glam::Vec2;
use hearts_core::constants::*;
use hearts_core::integrate::{self, damp, wrap_horizontal};
use hearts_core::{FieldSample, Particle, ParticlePool, SpawnMode, Viewport};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0, 2.0)
}

fn particle(rng: &mut StdRng, mode: SpawnMode) -> Particle {
    Particle::generate(rng, mode, &viewport(), None)
}

#[test]
fn pool_never_exceeds_capacity() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut pool = ParticlePool::new(MAX_PARTICLES);
    let mut evicted = 0;
    for _ in 0..2000 {
        evicted += pool.insert(particle(&mut rng, SpawnMode::Ambient));
        assert!(pool.len() <= pool.capacity(), "pool grew past its cap");
    }
    assert_eq!(pool.len(), MAX_PARTICLES);
    assert_eq!(evicted, 2000 - MAX_PARTICLES);
}

#[test]
fn overflow_evicts_oldest_first() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut pool = ParticlePool::new(10);
    for i in 0..25 {
        let mut p = particle(&mut rng, SpawnMode::Ambient);
        // Tag insertion order through the size field.
        p.size = i as f32;
        pool.insert(p);
    }
    let order: Vec<f32> = pool.iter().map(|p| p.size).collect();
    let expected: Vec<f32> = (15..25).map(|i| i as f32).collect();
    assert_eq!(order, expected);
}

#[test]
fn ambient_particles_draw_from_documented_ranges() {
    let mut rng = StdRng::seed_from_u64(3);
    let vp = viewport();
    for _ in 0..1000 {
        let p = particle(&mut rng, SpawnMode::Ambient);
        assert!(p.depth >= DEPTH_RANGE.0 && p.depth < DEPTH_RANGE.1);
        assert!(p.position.x >= 0.0 && p.position.x < vp.width);
        assert!(p.position.y >= -SPAWN_BAND_FRACTION * vp.height && p.position.y < 0.0);
        assert!(p.size >= AMBIENT_SIZE_RANGE.0 * vp.dpr * p.depth - 1e-4);
        assert!(p.size <= AMBIENT_SIZE_RANGE.1 * vp.dpr * p.depth + 1e-4);
        assert!(p.velocity.y > 0.0, "ambient hearts fall");
        assert!(p.velocity.x.abs() <= DRIFT_RANGE.1 * vp.dpr);
        assert!(p.lifetime >= AMBIENT_LIFETIME_RANGE.0 && p.lifetime < AMBIENT_LIFETIME_RANGE.1);
        assert!(p.alpha > 0.0 && p.alpha < 1.0);
        assert!(p.fill < PALETTE.len());
        assert_eq!(p.age, 0.0);
    }
}

#[test]
fn burst_particles_start_at_the_trigger_point() {
    let mut rng = StdRng::seed_from_u64(4);
    let vp = viewport();
    let at = Vec2::new(123.0, 456.0);
    for _ in 0..500 {
        let p = Particle::generate(&mut rng, SpawnMode::Burst, &vp, Some(at));
        assert_eq!(p.position, at);
        assert_eq!(p.mode, SpawnMode::Burst);
        assert!(p.lifetime >= BURST_LIFETIME_RANGE.0 && p.lifetime < BURST_LIFETIME_RANGE.1);
        let max_vx = (DRIFT_RANGE.1 + BURST_RADIAL_SPEED) * vp.dpr;
        assert!(p.velocity.x.abs() <= max_vx);
        let max_vy = FALL_SPEED_RANGE.1 * vp.dpr * p.depth * BURST_FALL_SCALE;
        assert!(p.velocity.y <= max_vy + 1e-3);
    }
}

#[test]
fn age_is_monotonic_and_expiry_is_immediate() {
    let mut rng = StdRng::seed_from_u64(5);
    let vp = Viewport::new(800.0, 100_000.0, 1.0);
    let mut p = Particle::generate(&mut rng, SpawnMode::Ambient, &vp, Some(Vec2::new(400.0, 0.0)));
    p.lifetime = 0.1;

    let mut last_age = p.age;
    let mut steps = 0;
    while integrate::step(&mut p, None, &vp, 0.03) {
        assert!(p.age > last_age);
        last_age = p.age;
        steps += 1;
        assert!(steps < 10, "particle outlived its lifetime");
    }
    assert_eq!(steps, 3, "removed on the first tick past its lifetime");
    assert!(p.age > p.lifetime);
}

#[test]
fn particles_below_the_floor_are_removed() {
    let mut rng = StdRng::seed_from_u64(6);
    let vp = Viewport::new(800.0, 600.0, 1.0);
    let at = Vec2::new(400.0, 749.0);
    let mut p = Particle::generate(&mut rng, SpawnMode::Ambient, &vp, Some(at));
    p.velocity = Vec2::new(0.0, 1000.0);
    assert!(!integrate::step(&mut p, None, &vp, 0.01));
}

#[test]
fn damping_shrinks_speed_without_forces() {
    let mut rng = StdRng::seed_from_u64(7);
    let vp = Viewport::new(800.0, 1_000_000.0, 1.0);
    let mut p = Particle::generate(&mut rng, SpawnMode::Burst, &vp, Some(Vec2::new(400.0, 0.0)));
    p.lifetime = 1.0e6;
    p.velocity = Vec2::new(80.0, 50.0);

    let mut speed = p.velocity.length();
    for _ in 0..100 {
        assert!(integrate::step(&mut p, None, &vp, 1.0 / 60.0));
        let next = p.velocity.length();
        assert!(next < speed, "speed must strictly decrease");
        speed = next;
    }
}

#[test]
fn damping_depends_on_spawn_mode() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut ambient = particle(&mut rng, SpawnMode::Ambient);
    let mut burst = particle(&mut rng, SpawnMode::Burst);
    ambient.velocity = Vec2::new(100.0, 100.0);
    burst.velocity = Vec2::new(100.0, 100.0);
    damp(&mut ambient);
    damp(&mut burst);
    assert_eq!(ambient.velocity.x, burst.velocity.x);
    assert!(ambient.velocity.y > burst.velocity.y, "bursts lose vertical speed faster");
}

#[test]
fn horizontal_wrap_teleports_across() {
    let mut rng = StdRng::seed_from_u64(9);
    let width = 1000.0;
    let mut p = particle(&mut rng, SpawnMode::Ambient);

    p.position.x = -201.0;
    wrap_horizontal(&mut p, width);
    assert_eq!(p.position.x, 1200.0);

    p.position.x = 1201.0;
    wrap_horizontal(&mut p, width);
    assert_eq!(p.position.x, -200.0);

    p.position.x = 500.0;
    wrap_horizontal(&mut p, width);
    assert_eq!(p.position.x, 500.0);
}

#[test]
fn step_applies_force_before_moving_and_damps_after() {
    let mut rng = StdRng::seed_from_u64(10);
    let vp = viewport();
    let start = Vec2::new(300.0, 200.0);
    let mut p = Particle::generate(&mut rng, SpawnMode::Ambient, &vp, Some(start));
    p.velocity = Vec2::new(10.0, 40.0);
    p.wobble = 0.3;
    p.sway = 1.2;
    p.lifetime = 100.0;
    let dt = 0.02;

    // Idle pull from a pointer up and to the right, inside the radius.
    let field = FieldSample::new(Vec2::new(400.0, 150.0), 0.0, false, vp.dpr);

    let mut forced = p.clone();
    field.apply(&mut forced, dt);
    let v = forced.velocity;
    assert_ne!(v, p.velocity, "pointer must be inside the idle radius");
    let wind = (0.3_f32 + dt * 1.2).sin() * 12.0 * vp.dpr;

    assert!(integrate::step(&mut p, Some(&field), &vp, dt));

    let expected = Vec2::new(start.x + (v.x + wind) * dt, start.y + v.y * dt);
    assert!(
        (p.position - expected).length() < 1e-4,
        "position {:?}, expected {:?}",
        p.position,
        expected
    );
    assert!((p.wobble - (0.3 + dt * 1.2)).abs() < 1e-6);
    assert!((p.velocity.x - v.x * 0.994).abs() < 1e-4);
    assert!((p.velocity.y - v.y * 0.9985).abs() < 1e-4);
    assert!((p.age - dt).abs() < 1e-7);
}

#[test]
fn step_without_field_still_blows_wind() {
    let mut rng = StdRng::seed_from_u64(12);
    let vp = Viewport::new(800.0, 600.0, 1.0);
    let start = Vec2::new(400.0, 100.0);
    let mut p = Particle::generate(&mut rng, SpawnMode::Burst, &vp, Some(start));
    p.velocity = Vec2::ZERO;
    p.wobble = 0.0;
    p.sway = std::f32::consts::FRAC_PI_2 / 0.05;
    p.lifetime = 100.0;

    assert!(integrate::step(&mut p, None, &vp, 0.05));
    // sin(pi/2) = 1, so the full 12 px/s of wind for 0.05 s.
    assert!((p.position.x - (start.x + 0.6)).abs() < 1e-4);
    assert_eq!(p.position.y, start.y);
}

//! The heart field engine: one state bundle, one mutator.

use crate::config::FieldConfig;
use crate::constants::BURST_JITTER_PX;
use crate::error::Result;
use crate::forces::FieldSample;
use crate::governor::{burst_count, burst_strength, SpawnGovernor};
use crate::input::{HoldState, PointerState};
use crate::integrate;
use crate::particle::{Particle, ParticlePool, SpawnMode};
use crate::render::{beat_envelope, paint_pool, pulse_scale, Surface};
use crate::scheduler::{FrameScheduler, TickToken};
use crate::state::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not running, or the token was issued before the last stop.
    Refused,
    /// Zero-area viewport; timing advanced, nothing spawned or drawn.
    EmptyViewport,
    Painted,
}

pub struct HeartsEngine<R: Rng = StdRng> {
    config: FieldConfig,
    scheduler: FrameScheduler,
    pool: ParticlePool,
    governor: SpawnGovernor,
    pointer: PointerState,
    hold: HoldState,
    viewport: Viewport,
    rng: R,
    needs_clear: bool,
}

impl HeartsEngine<StdRng> {
    pub fn new(config: FieldConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> HeartsEngine<R> {
    pub fn with_rng(config: FieldConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pool: ParticlePool::new(config.max_particles),
            governor: SpawnGovernor::new(config.base_spawn_per_sec, config.min_spawn_per_sec),
            scheduler: FrameScheduler::new(),
            pointer: PointerState::default(),
            hold: HoldState::default(),
            viewport: Viewport::default(),
            config,
            rng,
            needs_clear: true,
        })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn hold(&self) -> &HoldState {
        &self.hold
    }

    pub fn governor(&self) -> &SpawnGovernor {
        &self.governor
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    // ---------------- Session ----------------

    pub fn set_started(&mut self, started: bool) {
        if self.scheduler.set_started(started) {
            self.on_run_state_changed();
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.scheduler.set_visible(visible) {
            self.on_run_state_changed();
        }
    }

    /// Cancel any requested tick. Idempotent.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    fn on_run_state_changed(&mut self) {
        // Sessions never carry particles over: a fresh start and a stop both
        // begin from an empty pool.
        self.pool.clear();
        self.governor.reset();
        self.pointer.take_burst();
        if self.scheduler.is_running() {
            self.needs_clear = true;
            log::info!("[hearts] session started");
        } else {
            log::info!("[hearts] session stopped");
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, dpr: f32) {
        let next = Viewport::new(width, height, dpr);
        if next != self.viewport {
            if next.is_empty() {
                log::debug!("[hearts] zero-area viewport {}x{}", next.width, next.height);
            }
            self.viewport = next;
        }
    }

    // ---------------- Input staging ----------------

    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) {
        self.pointer.move_to(Vec2::new(x, y), now_ms);
    }

    pub fn pointer_down(&mut self, now_ms: f64) {
        self.hold.press(now_ms);
    }

    /// Ends any hold and queues a burst (a tap is a very short hold).
    /// Returns whether a hold was in progress.
    pub fn pointer_up(&mut self) -> bool {
        let was_holding = self.hold.release();
        self.pointer.request_burst();
        was_holding
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    pub fn request_burst(&mut self) {
        self.pointer.request_burst();
    }

    // ---------------- Simulation ----------------

    pub fn request_tick(&self) -> Option<TickToken> {
        self.scheduler.request()
    }

    /// Create one particle and insert it, evicting the oldest on overflow.
    pub fn spawn(&mut self, mode: SpawnMode, at: Option<Vec2>) {
        let particle = Particle::generate(&mut self.rng, mode, &self.viewport, at);
        self.pool.insert(particle);
    }

    /// Emit a burst around `origin` sized by the current hug.
    pub fn burst_at(&mut self, origin: Vec2) -> usize {
        let hug = self.hold.intensity;
        let count = burst_count(hug);
        for _ in 0..count {
            let offset = Vec2::new(
                self.rng.gen_range(-BURST_JITTER_PX..BURST_JITTER_PX),
                self.rng.gen_range(-BURST_JITTER_PX..BURST_JITTER_PX),
            ) * self.viewport.dpr;
            self.spawn(SpawnMode::Burst, Some(origin + offset));
        }
        log::debug!(
            "[hearts] burst of {} at ({:.0},{:.0}) strength={:.2}",
            count,
            origin.x,
            origin.y,
            burst_strength(hug)
        );
        count
    }

    /// Pointer position with an unset axis falling back to the viewport centre.
    fn burst_origin(&self) -> Vec2 {
        let p = self.pointer.position;
        Vec2::new(
            if p.x != 0.0 { p.x } else { self.viewport.width * 0.5 },
            if p.y != 0.0 { p.y } else { self.viewport.height * 0.5 },
        )
    }

    /// Run one tick: ease, govern, spawn, veil, integrate, paint.
    pub fn frame(
        &mut self,
        token: TickToken,
        now_ms: f64,
        surface: &mut dyn Surface,
    ) -> FrameOutcome {
        if !self.scheduler.accepts(token) {
            return FrameOutcome::Refused;
        }
        let dt = self.scheduler.advance(now_ms);

        self.hold.ease(dt);
        self.governor.adapt(dt);

        // A burst requested now belongs to this tick, drawn or not.
        let burst = self.pointer.take_burst();

        if self.viewport.is_empty() {
            log::debug!("[hearts] skipping tick on empty viewport");
            return FrameOutcome::EmptyViewport;
        }

        if burst && self.config.interactive {
            let origin = self.burst_origin();
            self.burst_at(origin);
        }

        let ambient = self.governor.ambient_count(dt, &mut self.rng);
        for _ in 0..ambient {
            self.spawn(SpawnMode::Ambient, None);
        }

        if std::mem::take(&mut self.needs_clear) {
            surface.clear();
        }
        surface.veil(self.config.trail_alpha);

        let field = (self.config.interactive && self.pointer.active).then(|| {
            FieldSample::new(
                self.pointer.position,
                self.hold.intensity,
                self.pointer.spiral_open(now_ms),
                self.viewport.dpr,
            )
        });
        let viewport = self.viewport;
        self.pool
            .retain_mut(|p| integrate::step(p, field.as_ref(), &viewport, dt));

        let pulse = pulse_scale(beat_envelope(now_ms, self.config.bpm));
        paint_pool(surface, &self.pool, pulse);
        FrameOutcome::Painted
    }
}

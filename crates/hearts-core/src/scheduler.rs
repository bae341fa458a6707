//! Frame scheduling: run gating, delta-time clamping and cancellation.

use crate::constants::MAX_DT_SEC;

/// Handed out when a tick is requested. A token from before the latest
/// `stop` is stale and must not run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickToken(u64);

#[derive(Clone, Debug)]
pub struct FrameScheduler {
    started: bool,
    visible: bool,
    last_ms: Option<f64>,
    generation: u64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            started: false,
            visible: true,
            last_ms: None,
            generation: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started && self.visible
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Returns true when this call changed the running state.
    pub fn set_started(&mut self, started: bool) -> bool {
        let was = self.is_running();
        self.started = started;
        self.sync(was)
    }

    pub fn set_visible(&mut self, visible: bool) -> bool {
        let was = self.is_running();
        self.visible = visible;
        self.sync(was)
    }

    fn sync(&mut self, was_running: bool) -> bool {
        let running = self.is_running();
        if was_running && !running {
            self.stop();
        }
        was_running != running
    }

    /// Cancel: forget the last timestamp and invalidate outstanding tokens.
    /// Safe to call any number of times.
    pub fn stop(&mut self) {
        self.last_ms = None;
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn request(&self) -> Option<TickToken> {
        self.is_running().then_some(TickToken(self.generation))
    }

    pub fn accepts(&self, token: TickToken) -> bool {
        self.is_running() && token.0 == self.generation
    }

    /// Clamped seconds since the previous tick; 0 on the first tick after a
    /// (re)start so nothing teleports.
    pub fn advance(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        clamp_dt(dt)
    }
}

#[inline]
pub fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_DT_SEC)
    } else {
        0.0
    }
}

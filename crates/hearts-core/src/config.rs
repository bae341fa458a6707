use crate::constants::*;
use crate::error::{FieldError, Result};

/// Runtime knobs for one heart field.
#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub max_particles: usize,
    pub base_spawn_per_sec: f32,
    pub min_spawn_per_sec: f32,
    pub bpm: f32,
    /// Alpha of the white veil laid over the previous frame.
    pub trail_alpha: f32,
    /// Pointer, hug and spiral forces. Off gives the plain falling variant.
    pub interactive: bool,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            base_spawn_per_sec: BASE_SPAWN_PER_SEC,
            min_spawn_per_sec: MIN_SPAWN_PER_SEC,
            bpm: DEFAULT_BPM,
            trail_alpha: TRAIL_ALPHA_MIN,
            interactive: true,
            seed: None,
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_particles == 0 {
            return Err(FieldError::InvalidConfig(
                "max_particles must be positive".into(),
            ));
        }
        if !(self.min_spawn_per_sec > 0.0 && self.min_spawn_per_sec <= self.base_spawn_per_sec) {
            return Err(FieldError::InvalidConfig(format!(
                "spawn rates must satisfy 0 < min ({}) <= base ({})",
                self.min_spawn_per_sec, self.base_spawn_per_sec
            )));
        }
        if !(self.bpm.is_finite() && self.bpm > 0.0) {
            return Err(FieldError::InvalidConfig(format!(
                "bpm must be positive, got {}",
                self.bpm
            )));
        }
        if !(TRAIL_ALPHA_MIN..=TRAIL_ALPHA_MAX).contains(&self.trail_alpha) {
            return Err(FieldError::InvalidConfig(format!(
                "trail_alpha must be within {TRAIL_ALPHA_MIN}..={TRAIL_ALPHA_MAX}, got {}",
                self.trail_alpha
            )));
        }
        Ok(())
    }
}

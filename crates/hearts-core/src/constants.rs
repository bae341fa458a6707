// Tuning constants for the heart field. Values are empirically tuned; keep
// them literal rather than deriving them from one another.

// Pool and spawn governance
pub const MAX_PARTICLES: usize = 650;
pub const BASE_SPAWN_PER_SEC: f32 = 48.0;
pub const MIN_SPAWN_PER_SEC: f32 = 18.0;
pub const LOW_FPS_THRESHOLD: f32 = 45.0;
pub const SPAWN_DECAY_PER_SEC: f32 = 40.0; // rate lost per second while under threshold
pub const SPAWN_RECOVER_PER_SEC: f32 = 25.0; // rate regained per second otherwise
pub const FALLBACK_FPS: f32 = 60.0; // assumed when dt == 0

// Frame scheduling
pub const MAX_DT_SEC: f32 = 1.0 / 20.0;

// Bursts
pub const BURST_BASE_COUNT: f32 = 18.0;
pub const BURST_COUNT_PER_STRENGTH: f32 = 18.0;
pub const BURST_STRENGTH_MIN: f32 = 0.65;
pub const BURST_STRENGTH_MAX: f32 = 1.6;
pub const BURST_STRENGTH_PER_HUG: f32 = 0.9;
pub const BURST_JITTER_PX: f32 = 8.0;
pub const BURST_RADIAL_SPEED: f32 = 120.0;
pub const BURST_FALL_SCALE: f32 = 0.5;

// Particle generation ranges (px and px/s before dpr/depth scaling)
pub const DEPTH_RANGE: (f32, f32) = (0.35, 1.0);
pub const AMBIENT_SIZE_RANGE: (f32, f32) = (5.0, 16.0);
pub const BURST_SIZE_RANGE: (f32, f32) = (5.0, 18.0);
pub const FALL_SPEED_RANGE: (f32, f32) = (70.0, 200.0);
pub const DRIFT_RANGE: (f32, f32) = (-10.0, 10.0);
pub const AMBIENT_LIFETIME_RANGE: (f32, f32) = (4.0, 7.0);
pub const BURST_LIFETIME_RANGE: (f32, f32) = (1.0, 2.0);
pub const SWAY_RATE_RANGE: (f32, f32) = (0.8, 1.8);
pub const ROTATION_RANGE: (f32, f32) = (-0.6, 0.6);
pub const ANGULAR_VELOCITY_RANGE: (f32, f32) = (-1.4, 1.4);
pub const BASE_ALPHA_RANGE: (f32, f32) = (0.25, 0.95);
pub const SPAWN_BAND_FRACTION: f32 = 0.18; // ambient hearts start this far above the top edge

// Hold easing: intensity closes (1 - HUG_EASE_BASE^dt) of the gap each tick
pub const HUG_EASE_BASE: f32 = 0.001;
pub const HUG_ACTIVE_THRESHOLD: f32 = 0.01;

// Force regimes (px and px/s^2 before dpr scaling)
pub const HUG_RADIUS: f32 = 520.0;
pub const HUG_PULL: f32 = 520.0;
pub const HUG_DAMPING: f32 = 0.55;
pub const HUG_MAX_SPEED: f32 = 520.0;
pub const HUG_MAX_SPEED_FLOOR: f32 = 0.35;

pub const SPIRAL_WINDOW_MS: f64 = 1000.0;
pub const SPIRAL_RADIUS: f32 = 360.0;
pub const SPIRAL_ORBIT: f32 = 260.0;
pub const SPIRAL_ORBIT_VERTICAL: f32 = 0.12;
pub const SPIRAL_PULL: f32 = 70.0;
pub const SPIRAL_PULL_VERTICAL: f32 = 0.18;

pub const IDLE_RADIUS: f32 = 280.0;
pub const IDLE_PULL: f32 = 70.0;
pub const IDLE_PULL_VERTICAL: f32 = 0.16;

pub const DIST_EPSILON: f32 = 0.0001;

// Integration
pub const WIND_AMPLITUDE: f32 = 12.0;
pub const DAMPING_X: f32 = 0.994;
pub const DAMPING_Y_AMBIENT: f32 = 0.9985;
pub const DAMPING_Y_BURST: f32 = 0.994;
pub const WRAP_MARGIN_FRACTION: f32 = 0.2;
pub const FLOOR_FRACTION: f32 = 1.25; // removed once y > FLOOR_FRACTION * height

// Rendering
pub const TRAIL_ALPHA_MIN: f32 = 0.12;
pub const TRAIL_ALPHA_MAX: f32 = 0.18;
pub const DEFAULT_BPM: f32 = 60.0;
pub const PULSE_SCALE: f32 = 0.06;
pub const FADE_FLOOR: f32 = 0.35;
pub const HIGHLIGHT_ALPHA: f32 = 0.22;

/// Fill colors as `[r, g, b, a]` with channels in 0..=255 and alpha in 0..=1.
pub const PALETTE: [[f32; 4]; 5] = [
    [220.0, 20.0, 60.0, 0.95],   // crimson
    [255.0, 64.0, 129.0, 0.85],  // hot pink
    [255.0, 105.0, 180.0, 0.65], // light pink
    [255.0, 0.0, 85.0, 0.75],    // rose
    [255.0, 170.0, 200.0, 0.55], // blush
];

pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod forces;
pub mod governor;
pub mod input;
pub mod integrate;
pub mod particle;
pub mod render;
pub mod scheduler;
pub mod state;

pub use config::FieldConfig;
pub use engine::{FrameOutcome, HeartsEngine};
pub use error::{FieldError, Result};
pub use forces::{FieldSample, ForceRegime};
pub use governor::SpawnGovernor;
pub use input::{HoldState, PointerState};
pub use particle::{Particle, ParticlePool, SpawnMode};
pub use render::{HeartSprite, Surface};
pub use scheduler::{FrameScheduler, TickToken};
pub use state::Viewport;

// Shared helpers for host-side engine tests.

#![allow(dead_code)]
use hearts_core::{FieldConfig, FrameOutcome, HeartSprite, HeartsEngine, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Veil(f32),
    Heart(HeartSprite),
}

/// Surface that records every call instead of drawing.
pub struct RecordingSurface {
    pub width: f32,
    pub height: f32,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn hearts(&self) -> Vec<HeartSprite> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Heart(h) => Some(*h),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn veil(&mut self, alpha: f32) {
        self.ops.push(Op::Veil(alpha));
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn draw_heart(&mut self, heart: &HeartSprite) {
        self.ops.push(Op::Heart(*heart));
    }
}

pub fn make_engine(seed: u64) -> HeartsEngine<StdRng> {
    let config = FieldConfig {
        seed: Some(seed),
        ..FieldConfig::default()
    };
    HeartsEngine::with_rng(config, StdRng::seed_from_u64(seed)).expect("default config is valid")
}

/// Started engine on an 800x600 viewport at dpr 1.
pub fn running_engine(seed: u64) -> HeartsEngine<StdRng> {
    let mut engine = make_engine(seed);
    engine.resize(800.0, 600.0, 1.0);
    engine.set_started(true);
    engine
}

pub fn tick(
    engine: &mut HeartsEngine<StdRng>,
    now_ms: f64,
    surface: &mut RecordingSurface,
) -> FrameOutcome {
    let token = engine.request_tick().expect("engine should be running");
    engine.frame(token, now_ms, surface)
}

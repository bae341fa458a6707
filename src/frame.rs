use crate::canvas::CanvasSurface;
use crate::dom;
use hearts_core::{FrameOutcome, HeartsEngine, TickToken};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic milliseconds since start-up, shared by input handlers and the
/// frame loop so spiral windows and frame times use one timeline.
#[derive(Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub engine: Rc<RefCell<HeartsEngine>>,
    pub canvas: web::HtmlCanvasElement,
    pub surface: CanvasSurface,
    pub clock: Clock,
}

impl FrameContext {
    pub fn frame(&mut self, token: TickToken) -> FrameOutcome {
        let now = self.clock.now_ms();
        let dpr = dom::device_pixel_ratio() as f32;
        let w = self.canvas.width() as f32;
        let h = self.canvas.height() as f32;
        let mut engine = self.engine.borrow_mut();
        engine.resize(w, h, dpr);
        engine.frame(token, now, &mut self.surface)
    }
}

/// requestAnimationFrame driver. At most one frame is pending at a time;
/// `cancel` withdraws it from the browser and invalidates its token.
pub struct FrameLoop {
    ctx: RefCell<FrameContext>,
    raf_id: Cell<Option<i32>>,
    pending: Cell<Option<TickToken>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    pub fn new(ctx: FrameContext) -> Rc<Self> {
        let frame_loop = Rc::new(Self {
            ctx: RefCell::new(ctx),
            raf_id: Cell::new(None),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak = Rc::downgrade(&frame_loop);
        *frame_loop.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(l) = weak.upgrade() {
                l.run();
            }
        }) as Box<dyn FnMut()>));
        frame_loop
    }

    /// Schedule a frame if the engine is running and none is pending.
    pub fn resume(&self) {
        if self.raf_id.get().is_none() {
            self.schedule();
        }
    }

    /// Idempotent.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.pending.set(None);
        self.ctx.borrow().engine.borrow_mut().stop();
    }

    fn schedule(&self) {
        let Some(token) = self.ctx.borrow().engine.borrow().request_tick() else {
            return;
        };
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            return;
        };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => {
                self.raf_id.set(Some(id));
                self.pending.set(Some(token));
            }
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn run(&self) {
        self.raf_id.set(None);
        let Some(token) = self.pending.take() else {
            return;
        };
        let outcome = self.ctx.borrow_mut().frame(token);
        if outcome != FrameOutcome::Refused {
            self.schedule();
        }
    }
}

/// Align the loop with the engine's run state after `started`/`visible` changed.
pub fn sync_run_state(engine: &Rc<RefCell<HeartsEngine>>, frame_loop: &FrameLoop) {
    let running = engine.borrow().is_running();
    if running {
        frame_loop.resume();
    } else {
        frame_loop.cancel();
    }
}

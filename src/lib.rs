#![cfg(target_arch = "wasm32")]
use hearts_core::HeartsEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod settings;

use constants::{CANVAS_ID, OPEN_BUTTON_ID};

struct App {
    engine: Rc<RefCell<HeartsEngine>>,
    frame_loop: Rc<frame::FrameLoop>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

/// Keep the backing store in step with the canvas' CSS box. The window
/// listener catches DPR and viewport changes, the observer layout-only ones.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let (w, h) = dom::sync_canvas_backing_size(&canvas_resize);
        log::debug!("[resize] canvas {}x{}", w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    match web::ResizeObserver::new(resize_closure.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(canvas);
            // Lives as long as the page.
            std::mem::forget(observer);
        }
        Err(e) => log::warn!("[resize] ResizeObserver unavailable: {:?}", e),
    }
    resize_closure.forget();
}

/// Presentation glue calls this when the card opens or closes.
#[wasm_bindgen]
pub fn set_started(started: bool) {
    APP.with(|app| {
        if let Some(app) = app.borrow().as_ref() {
            app.engine.borrow_mut().set_started(started);
            frame::sync_run_state(&app.engine, &app.frame_loop);
        } else {
            log::warn!("[hearts] set_started({}) before init", started);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hearts-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // No surface, no loop.
    let surface = canvas::CanvasSurface::new(&canvas)?;

    wire_canvas_resize(&canvas);

    let config = settings::field_config_from_attrs(|name| canvas.get_attribute(name));
    log::info!(
        "[hearts] config seed={:?} bpm={} interactive={} trail={}",
        config.seed,
        config.bpm,
        config.interactive,
        config.trail_alpha
    );
    let engine = Rc::new(RefCell::new(HeartsEngine::new(config)?));
    engine.borrow_mut().set_visible(!document.hidden());

    let clock = frame::Clock::new();
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        engine: engine.clone(),
        clock,
    });

    let frame_loop = frame::FrameLoop::new(frame::FrameContext {
        engine: engine.clone(),
        canvas: canvas.clone(),
        surface,
        clock,
    });
    events::wire_visibility(&document, engine.clone(), frame_loop.clone());

    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            engine: engine.clone(),
            frame_loop: frame_loop.clone(),
        });
    });

    // Default `started` trigger when the page provides an open button.
    dom::add_click_listener(&document, OPEN_BUTTON_ID, move || set_started(true));

    Ok(())
}

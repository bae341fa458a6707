use crate::dom;
use crate::frame::Clock;
use crate::input;
use crate::overlay;
use hearts_core::HeartsEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub engine: Rc<RefCell<HeartsEngine>>,
    pub clock: Clock,
}

/// Handlers only stage positions, flags and timestamps; the next frame
/// does the work.
pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_pointerout(&w);
}

fn add_window_listener(
    event: &str,
    closure: wasm_bindgen::closure::Closure<dyn FnMut(web::PointerEvent)>,
) {
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        w.engine
            .borrow_mut()
            .pointer_move(pos.x, pos.y, w.clock.now_ms());
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointermove", closure);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Taps have no preceding move, so place the pointer first.
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let now = w.clock.now_ms();
        let mut engine = w.engine.borrow_mut();
        engine.pointer_move(pos.x, pos.y, now);
        engine.pointer_down(now);
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointerdown", closure);
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let (was_holding, running) = {
            let mut engine = w.engine.borrow_mut();
            (engine.pointer_up(), engine.is_running())
        };
        if was_holding && running {
            log::debug!("[pointer] hold released");
            if let Some(doc) = dom::window_document() {
                overlay::flash_hug_toast(&doc);
            }
        }
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointerup", closure);
}

fn wire_pointerout(w: &InputWiring) {
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        // Only leaving the window counts; moving between elements does not.
        if ev.related_target().is_none() {
            w.engine.borrow_mut().pointer_leave();
        }
    }) as Box<dyn FnMut(_)>);
    add_window_listener("pointerout", closure);
}

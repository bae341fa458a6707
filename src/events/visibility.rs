use crate::frame::{self, FrameLoop};
use hearts_core::HeartsEngine;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pause while the page is hidden; resume with a fresh session when shown.
pub fn wire_visibility(
    document: &web::Document,
    engine: Rc<RefCell<HeartsEngine>>,
    frame_loop: Rc<FrameLoop>,
) {
    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        let hidden = doc.hidden();
        engine.borrow_mut().set_visible(!hidden);
        log::info!("[visibility] hidden={}", hidden);
        frame::sync_run_state(&engine, &frame_loop);
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}

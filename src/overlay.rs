use crate::constants::{HIDDEN_CLASS, HUG_TOAST_ID, HUG_TOAST_MS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

/// Show the "hug sent" toast, hiding it again after a short delay.
pub fn flash_hug_toast(document: &web::Document) {
    if document.get_element_by_id(HUG_TOAST_ID).is_none() {
        return;
    }
    show(document, HUG_TOAST_ID);
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let hide_later = Closure::once_into_js(move || hide(&doc, HUG_TOAST_ID));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide_later.unchecked_ref(),
        HUG_TOAST_MS,
    ) {
        log::warn!("[toast] set_timeout failed: {:?}", e);
    }
}

use super::EventQueue;
use crate::core::input::{arrow_for_key, stage_event_for_key, KeyState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, keys: &Rc<RefCell<KeyState>>, queue: &EventQueue) {
    let key = ev.key();
    if let Some(arrow) = arrow_for_key(&key) {
        keys.borrow_mut().press(arrow);
        ev.prevent_default();
        return;
    }
    if let Some(event) = stage_event_for_key(&key) {
        log::debug!("[keys] {} -> {:?}", key, event);
        queue.borrow_mut().push(event);
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, keys: &Rc<RefCell<KeyState>>) {
    if let Some(arrow) = arrow_for_key(&ev.key()) {
        keys.borrow_mut().release(arrow);
    }
}

/// Window-level key handling for the page lifetime: arrow hold state for the
/// manual orbit, Escape to close a panel. Focus loss releases held arrows.
pub fn wire_keyboard(keys: Rc<RefCell<KeyState>>, queue: EventQueue) {
    let Some(window) = web::window() else {
        return;
    };

    let keys_down = keys.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &keys_down, &queue);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let keys_up = keys.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &keys_up);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    let blur = Closure::wrap(Box::new(move || {
        keys.borrow_mut().clear();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}

use super::EventQueue;
use crate::core::{Section, StageEvent};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Top navigation bar and panel close button.
///
/// A section button closes any open panel first, so switching sections from
/// the bar goes through the navigation stage like a label click would.
pub fn wire_navigation(document: &web::Document, queue: &EventQueue) {
    for section in Section::ALL {
        let q = queue.clone();
        dom::add_click_listener(document, &format!("nav-{}", section.slug()), move || {
            let mut q = q.borrow_mut();
            q.push(StageEvent::ClosePanel);
            q.push(StageEvent::SelectSection(section));
        });
    }

    let q = queue.clone();
    dom::add_click_listener(document, "nav-home", move || {
        q.borrow_mut().push(StageEvent::ClosePanel);
    });

    let q = queue.clone();
    dom::add_click_listener(document, "panel-close", move || {
        q.borrow_mut().push(StageEvent::ClosePanel);
    });
}

/// Keep the canvas backing store in step with its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

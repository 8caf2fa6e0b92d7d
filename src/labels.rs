//! Scene text drawn as DOM elements over the canvas.
//!
//! Each mounted [`Label`] owns a `<div>` in `#label-layer` plus its click and
//! hover listeners. Unmounting drops the element and its listeners together.
//! Every frame the labels are projected from their 3D anchors, sized by
//! perspective and faded to the opacity the stage machine reports.

use crate::core::camera::{project_to_screen, CameraPose, Projection};
use crate::core::layout::{css_hex, SceneLayout};
use crate::core::{Label, SceneState};
use crate::dom::{self, EventListener};
use crate::events::EventQueue;
use wasm_bindgen::JsCast;
use web_sys as web;

struct MountedLabel {
    label: Label,
    el: web::HtmlElement,
    _listeners: [EventListener; 3],
}

impl Drop for MountedLabel {
    fn drop(&mut self) {
        self.el.remove();
    }
}

pub struct LabelLayer {
    document: web::Document,
    layer: web::HtmlElement,
    queue: EventQueue,
    mounted: Vec<MountedLabel>,
}

impl LabelLayer {
    pub fn new(document: &web::Document, queue: EventQueue) -> anyhow::Result<Self> {
        let layer = dom::element_by_id::<web::HtmlElement>(document, "label-layer")?;
        Ok(Self {
            document: document.clone(),
            layer,
            queue,
            mounted: Vec::new(),
        })
    }

    /// Mount and unmount elements so they match the stage's mounted labels.
    pub fn sync(&mut self, scene: &SceneState, layout: &SceneLayout) {
        let wanted = scene.mounted_labels();
        self.mounted.retain(|m| {
            let keep = wanted.contains(&m.label);
            if !keep {
                log::debug!("[labels] unmount {}", m.label.text());
            }
            keep
        });
        for label in wanted {
            if self.mounted.iter().any(|m| m.label == label) {
                continue;
            }
            match self.mount(label, layout) {
                Ok(m) => self.mounted.push(m),
                Err(e) => log::error!("[labels] mount {} failed: {:?}", label.text(), e),
            }
        }
    }

    fn mount(&self, label: Label, layout: &SceneLayout) -> anyhow::Result<MountedLabel> {
        let el = self
            .document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_class_name("scene-label");
        el.set_text_content(Some(label.text()));
        dom::set_style(&el, "color", &css_hex(layout.label(label).color));
        dom::set_style(&el, "opacity", "0");
        self.layer
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let target: &web::EventTarget = el.as_ref();
        let queue = self.queue.clone();
        let click = EventListener::new(target, "click", move |ev| {
            ev.stop_propagation();
            queue.borrow_mut().push(label.event());
        });
        let hover_el = el.clone();
        let enter = EventListener::new(target, "pointerenter", move |_| {
            _ = hover_el.class_list().add_1("hover");
        });
        let leave_el = el.clone();
        let leave = EventListener::new(target, "pointerleave", move |_| {
            _ = leave_el.class_list().remove_1("hover");
        });
        log::debug!("[labels] mount {}", label.text());
        Ok(MountedLabel {
            label,
            el,
            _listeners: [click, enter, leave],
        })
    }

    /// Position every mounted label for this frame. `width`/`height` are the
    /// canvas size in CSS pixels.
    pub fn place(
        &self,
        scene: &SceneState,
        layout: &SceneLayout,
        pose: &CameraPose,
        width: f32,
        height: f32,
    ) {
        let projection = Projection::new(width / height.max(1.0));
        for m in &self.mounted {
            let text = layout.label(m.label);
            match project_to_screen(pose, &projection, text.anchor, width, height) {
                Some(p) => {
                    let font_px = text.size * projection.pixels_per_unit(p.depth, height);
                    dom::set_style(&m.el, "display", "block");
                    dom::set_style(
                        &m.el,
                        "transform",
                        &format!("translate({:.1}px, {:.1}px) translate(-50%, -50%)", p.x, p.y),
                    );
                    dom::set_style(&m.el, "font-size", &format!("{:.1}px", font_px));
                    dom::set_style(
                        &m.el,
                        "opacity",
                        &format!("{:.3}", scene.label_opacity(m.label)),
                    );
                }
                None => dom::set_style(&m.el, "display", "none"),
            }
        }
    }
}

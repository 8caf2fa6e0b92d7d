use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::choreographer::rotation_mode_for;
use crate::core::glitch::GlitchTimer;
use crate::core::input::KeyState;
use crate::core::layout::SceneLayout;
use crate::core::particles::ParticleField;
use crate::core::stage::SceneEffects;
use crate::core::{Choreographer, RotationMode, SceneConfig, SceneEffect, SceneState};
use crate::events::EventQueue;
use crate::labels::LabelLayer;
use crate::overlay;
use crate::render::{self, FrameView, GpuState, SceneContent};
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub config: SceneConfig,

    pub scene: SceneState,
    pub choreo: Choreographer,
    pub layout: SceneLayout,
    pub labels: LabelLayer,
    pub particles: ParticleField,
    pub glitch: GlitchTimer,
    pub rng: StdRng,

    pub keys: Rc<RefCell<KeyState>>,
    pub queue: EventQueue,
    pub gpu: Option<GpuState>,

    pub started: Instant,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        let time_sec = (now - self.started).as_secs_f64();

        // Input first, then timers, so a click and its fade start on the same frame
        let events: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for ev in events {
            let fx = self.scene.advance(ev);
            self.apply(&fx);
        }
        let fx = self.scene.update(dt_sec);
        self.apply(&fx);

        self.sync_camera_mode();
        let keys = *self.keys.borrow();
        let choreo = self.choreo.update(dt_sec, &keys);
        if choreo.flight_completed {
            let fx = self.scene.flight_completed();
            self.apply(&fx);
            self.sync_camera_mode();
        }
        let pose = self.choreo.pose();

        self.particles.update(time_sec);
        let glitch = self.glitch.tick(dt_sec, &mut self.rng);

        self.labels.sync(&self.scene, &self.layout);
        self.labels.place(
            &self.scene,
            &self.layout,
            &pose,
            self.canvas.client_width() as f32,
            self.canvas.client_height() as f32,
        );
        overlay::set_prompt(&self.document, self.scene.prompt());
        overlay::set_nav_bar_visible(&self.document, self.scene.nav_bar_visible());

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let view = FrameView {
                pose,
                time_sec: time_sec as f32,
                glitch,
                particles: self.particles.particles(),
            };
            match g.render(&view) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
    }

    /// Point the choreographer at the orbit mode the current stage asks for.
    fn sync_camera_mode(&mut self) {
        let mode = rotation_mode_for(self.scene.stage());
        if self.choreo.mode() == RotationMode::Manual && mode != RotationMode::Manual {
            self.keys.borrow_mut().clear();
        }
        self.choreo.set_mode(mode);
    }

    fn apply(&mut self, fx: &SceneEffects) {
        for effect in fx {
            match *effect {
                SceneEffect::BeginFlight => self.choreo.start_flight(self.config.entry_flight),
                SceneEffect::PanelOpened(section) => overlay::show_panel(&self.document, section),
                SceneEffect::PanelClosed => overlay::hide_panel(&self.document),
                SceneEffect::StageChanged(stage) => log::debug!("[frame] stage now {:?}", stage),
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement, content: &SceneContent<'_>) -> Option<GpuState> {
    match render::GpuState::new(canvas, content).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}; continuing without the 3D canvas", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

//! Animated 3D portfolio scene for the browser.
//!
//! `core` holds the platform-independent scene logic and builds everywhere;
//! the remaining modules are the WebAssembly front end (WebGPU rendering and
//! DOM overlays) and only build for `wasm32`.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod assets;
#[cfg(target_arch = "wasm32")]
mod constants;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod labels;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

#[cfg(target_arch = "wasm32")]
async fn init() -> anyhow::Result<()> {
    use crate::core::input::KeyState;
    use crate::core::layout::SceneLayout;
    use crate::core::particles::ParticleField;
    use crate::core::{glitch::GlitchTimer, placement, terrain, Choreographer, SceneState};
    use instant::Instant;
    use rand::{rngs::StdRng, SeedableRng};
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_sys as web;

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, "app-canvas")?;

    let query = window.location().search().unwrap_or_default();
    let config = crate::core::SceneConfig::from_query(&query);
    log::info!("[config] {:?}", config);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    let queue: events::EventQueue = Rc::new(RefCell::new(Vec::new()));
    let keys = Rc::new(RefCell::new(KeyState::default()));
    events::wire_keyboard(keys.clone(), queue.clone());
    events::wire_navigation(&document, &queue);
    overlay::set_prompt(&document, None);

    let loader_doc = document.clone();
    let loaded = assets::load_all(".", move |p| overlay::update_loader(&loader_doc, p)).await;

    let plane_y = terrain::plane_height(loaded.terrain_bounds.as_ref());
    log::info!("[assets] ground plane at y={:.1}", plane_y);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let placements = placement::generate(&config.placement_params(), plane_y, &mut rng);
    let particles = ParticleField::new(config.particle_count, &mut rng);
    let glitch = GlitchTimer::new(&mut rng, config.glitch);
    let layout = SceneLayout::with_font(plane_y, loaded.font.as_ref());

    let content = render::SceneContent {
        images: render::SceneImages {
            ground_diffuse: loaded.ground_diffuse.as_ref(),
            ground_roughness: loaded.ground_roughness.as_ref(),
            backdrop: loaded.backdrop.as_ref(),
        },
        house: &loaded.house,
        pine: &loaded.pine,
        stylized: &loaded.stylized,
        placements: &placements,
        plane_y,
        particle_capacity: particles.len(),
    };
    let gpu = frame::init_gpu(&canvas, &content).await;

    let labels = labels::LabelLayer::new(&document, queue.clone())?;
    overlay::hide_loader(&document);

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document: document.clone(),
        canvas,
        config,
        scene: SceneState::new(),
        choreo: Choreographer::for_scene(plane_y),
        layout,
        labels,
        particles,
        glitch,
        rng,
        keys,
        queue,
        gpu,
        started: now,
        last_instant: now,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

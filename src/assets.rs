//! Browser-side asset fetching.
//!
//! All requests are issued up front and awaited in manifest order, so the
//! downloads overlap while progress is still reported one asset at a time.
//! Failures are logged and replaced by fallbacks; loading never aborts.

use crate::core::assets::{asset_url, AssetError, AssetId, AssetKind, LoadProgress};
use crate::core::font::Typeface;
use crate::core::mesh::{load_glb, MeshData};
use crate::core::terrain::Aabb;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Everything the scene needs from the network, with fallbacks applied.
pub struct LoadedAssets {
    pub terrain_bounds: Option<Aabb>,
    pub house: MeshData,
    pub pine: MeshData,
    pub stylized: MeshData,
    pub backdrop: Option<web::ImageBitmap>,
    pub ground_diffuse: Option<web::ImageBitmap>,
    pub ground_roughness: Option<web::ImageBitmap>,
    pub font: Option<Typeface>,
    pub progress: LoadProgress,
}

impl LoadedAssets {
    fn empty() -> Self {
        Self {
            terrain_bounds: None,
            house: MeshData::unit_box(),
            pine: MeshData::unit_box(),
            stylized: MeshData::unit_box(),
            backdrop: None,
            ground_diffuse: None,
            ground_roughness: None,
            font: None,
            progress: LoadProgress::new(AssetId::ALL.len()),
        }
    }
}

enum Payload {
    Bytes(Vec<u8>),
    Image(web::ImageBitmap),
}

fn fetch_error(path: &str, e: wasm_bindgen::JsValue) -> AssetError {
    AssetError::Fetch {
        path: path.to_string(),
        reason: format!("{:?}", e),
    }
}

async fn settle(
    window: &web::Window,
    id: AssetId,
    request: js_sys::Promise,
) -> Result<Payload, AssetError> {
    let path = id.path();
    let resp: web::Response = JsFuture::from(request)
        .await
        .map_err(|e| fetch_error(path, e))?
        .dyn_into()
        .map_err(|e| fetch_error(path, e))?;
    if !resp.ok() {
        return Err(AssetError::Status {
            path: path.to_string(),
            status: resp.status(),
        });
    }
    match id.kind() {
        AssetKind::Image => {
            let blob: web::Blob = JsFuture::from(resp.blob().map_err(|e| fetch_error(path, e))?)
                .await
                .map_err(|e| fetch_error(path, e))?
                .dyn_into()
                .map_err(|e| fetch_error(path, e))?;
            let bitmap = window
                .create_image_bitmap_with_blob(&blob)
                .map_err(|e| fetch_error(path, e))?;
            let bitmap: web::ImageBitmap = JsFuture::from(bitmap)
                .await
                .map_err(|e| AssetError::Decode {
                    path: path.to_string(),
                    reason: format!("{:?}", e),
                })?
                .dyn_into()
                .map_err(|e| fetch_error(path, e))?;
            Ok(Payload::Image(bitmap))
        }
        AssetKind::Model | AssetKind::Font => {
            let buf = JsFuture::from(resp.array_buffer().map_err(|e| fetch_error(path, e))?)
                .await
                .map_err(|e| fetch_error(path, e))?;
            Ok(Payload::Bytes(js_sys::Uint8Array::new(&buf).to_vec()))
        }
    }
}

fn store(out: &mut LoadedAssets, id: AssetId, payload: Payload) -> Result<(), AssetError> {
    let path = id.path();
    match (id, payload) {
        (AssetId::Terrain, Payload::Bytes(b)) => {
            out.terrain_bounds = Some(load_glb(path, &b)?.bounds);
        }
        (AssetId::House, Payload::Bytes(b)) => out.house = load_glb(path, &b)?,
        (AssetId::PineTree, Payload::Bytes(b)) => out.pine = load_glb(path, &b)?,
        (AssetId::StylizedTree, Payload::Bytes(b)) => out.stylized = load_glb(path, &b)?,
        (AssetId::Font, Payload::Bytes(b)) => out.font = Some(Typeface::from_json(path, &b)?),
        (AssetId::Backdrop, Payload::Image(img)) => out.backdrop = Some(img),
        (AssetId::GroundDiffuse, Payload::Image(img)) => out.ground_diffuse = Some(img),
        (AssetId::GroundRoughness, Payload::Image(img)) => out.ground_roughness = Some(img),
        _ => {
            return Err(AssetError::Decode {
                path: path.to_string(),
                reason: "unexpected payload kind".into(),
            })
        }
    }
    Ok(())
}

/// Fetch every manifest entry relative to `base`, calling `on_progress`
/// after each one settles.
pub async fn load_all(base: &str, mut on_progress: impl FnMut(&LoadProgress)) -> LoadedAssets {
    let mut out = LoadedAssets::empty();
    on_progress(&out.progress);
    let Some(window) = web::window() else {
        log::error!("[assets] no window; using fallbacks");
        return out;
    };

    let requests: Vec<(AssetId, js_sys::Promise)> = AssetId::ALL
        .iter()
        .map(|id| (*id, window.fetch_with_str(&asset_url(base, *id))))
        .collect();

    for (id, request) in requests {
        let result = match settle(&window, id, request).await {
            Ok(payload) => store(&mut out, id, payload),
            Err(e) => Err(e),
        };
        match result {
            Ok(()) => {
                log::info!("[assets] loaded {}", id.path());
                out.progress.record(true);
            }
            Err(e) => {
                log::error!("[assets] {}", e);
                out.progress.record(false);
            }
        }
        on_progress(&out.progress);
    }
    log::info!(
        "[assets] done: {} loaded, {} failed",
        out.progress.loaded,
        out.progress.failed
    );
    out
}

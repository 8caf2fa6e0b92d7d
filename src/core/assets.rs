//! Static asset manifest and load bookkeeping.

/// Errors surfaced while fetching or decoding scene assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },
    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },
    #[error("{path} contains no triangle meshes")]
    MissingMesh { path: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetId {
    Terrain,
    House,
    PineTree,
    StylizedTree,
    Backdrop,
    GroundDiffuse,
    GroundRoughness,
    Font,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Model,
    Image,
    Font,
}

impl AssetId {
    pub const ALL: [AssetId; 8] = [
        AssetId::Terrain,
        AssetId::House,
        AssetId::PineTree,
        AssetId::StylizedTree,
        AssetId::Backdrop,
        AssetId::GroundDiffuse,
        AssetId::GroundRoughness,
        AssetId::Font,
    ];

    pub fn path(self) -> &'static str {
        match self {
            AssetId::Terrain => "models/riff_hills.glb",
            AssetId::House => "models/fantasy_house.glb",
            AssetId::PineTree => "models/pine_tree.glb",
            AssetId::StylizedTree => "models/stylized_tree.glb",
            AssetId::Backdrop => "hdri/forest_sunrise.jpg",
            AssetId::GroundDiffuse => "textures/aerial_rocks_04_diff_4k.jpg",
            AssetId::GroundRoughness => "textures/aerial_rocks_04_rough_4k.jpg",
            AssetId::Font => "fonts/gentilis_bold.typeface.json",
        }
    }

    pub fn kind(self) -> AssetKind {
        match self {
            AssetId::Terrain | AssetId::House | AssetId::PineTree | AssetId::StylizedTree => {
                AssetKind::Model
            }
            AssetId::Backdrop | AssetId::GroundDiffuse | AssetId::GroundRoughness => AssetKind::Image,
            AssetId::Font => AssetKind::Font,
        }
    }
}

/// Resolve an asset path against the page's base URL (no trailing slash needed).
pub fn asset_url(base: &str, id: AssetId) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        format!("/{}", id.path())
    } else {
        format!("{}/{}", base, id.path())
    }
}

/// Running count of settled asset loads, shown by the loading overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadProgress {
    pub total: usize,
    pub loaded: usize,
    pub failed: usize,
}

impl LoadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, ok: bool) {
        if ok {
            self.loaded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }

    pub fn is_done(&self) -> bool {
        self.settled() >= self.total
    }

    /// Fraction of assets settled, 1.0 for an empty manifest.
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            (self.settled() as f32 / self.total as f32).min(1.0)
        }
    }

    pub fn label(&self) -> String {
        format!("Loading {}%", (self.fraction() * 100.0).round() as u32)
    }
}

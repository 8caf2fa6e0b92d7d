use super::constants::*;
use super::font::Typeface;
use super::stage::{Label, Section};
use glam::Vec3;

/// Where and how a label is drawn. `anchor` is the center of the text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelSpec {
    pub anchor: Vec3,
    /// Cap height in world units.
    pub size: f32,
    pub color: [f32; 3],
}

/// Local X centers for a row of words separated by equal gaps, centred on 0.
pub fn row_centers<const N: usize>(widths: [f32; N], gap: f32) -> [f32; N] {
    let total: f32 = widths.iter().sum::<f32>() + gap * N.saturating_sub(1) as f32;
    let mut x = -total / 2.0;
    let mut out = [0.0; N];
    for (i, w) in widths.iter().enumerate() {
        out[i] = x + w / 2.0;
        x += w + gap;
    }
    out
}

/// Anchors for all scene text, derived from the ground plane height.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    pub plane_y: f32,
    enter: LabelSpec,
    portfolio: LabelSpec,
    nav: [LabelSpec; 3],
}

impl SceneLayout {
    /// `nav_widths` are the WORK, ABOUT, CONTACT widths at `NAV_SIZE`.
    pub fn new(plane_y: f32, nav_widths: [f32; 3]) -> Self {
        let white = [1.0, 1.0, 1.0];
        // the row is rotated half a turn to face the camera, mirroring X
        let centers = row_centers(nav_widths, NAV_GAP);
        let colors = [WORK_COLOR, ABOUT_COLOR, CONTACT_COLOR];
        let nav = std::array::from_fn(|i| LabelSpec {
            anchor: Vec3::new(SCENE_CENTER_X - centers[i], plane_y + NAV_HEIGHT, NAV_Z),
            size: NAV_SIZE,
            color: colors[i],
        });
        Self {
            plane_y,
            enter: LabelSpec {
                anchor: Vec3::new(SCENE_CENTER_X, plane_y + ENTER_HEIGHT, ENTER_Z),
                size: ENTER_SIZE,
                color: white,
            },
            portfolio: LabelSpec {
                anchor: Vec3::new(SCENE_CENTER_X, plane_y + PORTFOLIO_HEIGHT, PORTFOLIO_Z),
                size: PORTFOLIO_SIZE,
                color: white,
            },
            nav,
        }
    }

    /// Layout using measured word widths when a typeface is available.
    pub fn with_font(plane_y: f32, font: Option<&Typeface>) -> Self {
        let widths = match font {
            Some(face) => Section::ALL.map(|s| face.text_width(Label::Nav(s).text(), NAV_SIZE)),
            None => [NAV_WIDTH_WORK, NAV_WIDTH_ABOUT, NAV_WIDTH_CONTACT],
        };
        Self::new(plane_y, widths)
    }

    pub fn label(&self, label: Label) -> LabelSpec {
        match label {
            Label::Enter => self.enter,
            Label::Portfolio => self.portfolio,
            Label::Nav(Section::Work) => self.nav[0],
            Label::Nav(Section::About) => self.nav[1],
            Label::Nav(Section::Contact) => self.nav[2],
        }
    }
}

/// CSS hex string for an sRGB color.
pub fn css_hex(color: [f32; 3]) -> String {
    let c = color.map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2])
}

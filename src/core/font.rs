//! Word metrics from a typeface description file (the JSON format used by
//! three.js `FontLoader`). Only horizontal advances are read.

use super::assets::AssetError;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Clone, Debug, Deserialize)]
pub struct Glyph {
    /// Horizontal advance in font units.
    pub ha: f32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Typeface {
    pub glyphs: HashMap<String, Glyph>,
    /// Font units per em.
    pub resolution: f32,
}

impl Typeface {
    pub fn from_json(path: &str, bytes: &[u8]) -> Result<Self, AssetError> {
        let face: Typeface = serde_json::from_slice(bytes).map_err(|e| AssetError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        if face.resolution <= 0.0 {
            return Err(AssetError::Decode {
                path: path.to_string(),
                reason: format!("invalid resolution {}", face.resolution),
            });
        }
        Ok(face)
    }

    /// Width of `text` set at `size` world units. Missing glyphs fall back to `?`,
    /// then to half an em.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        let scale = size / self.resolution;
        let mut buf = [0u8; 4];
        text.chars()
            .map(|c| {
                let key: &str = c.encode_utf8(&mut buf);
                self.glyphs
                    .get(key)
                    .or_else(|| self.glyphs.get("?"))
                    .map(|g| g.ha)
                    .unwrap_or(self.resolution * 0.5)
            })
            .sum::<f32>()
            * scale
    }
}

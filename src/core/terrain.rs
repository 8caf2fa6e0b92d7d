use super::constants::PLANE_HEIGHT_FRACTION;
use glam::Vec3;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::EMPTY
    }
}

impl Aabb {
    /// An inverted box that any point or box will grow.
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let mut b = Self::EMPTY;
        for p in points {
            b.grow(p);
        }
        b
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn grow(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Height `fraction` of the way from the bottom to the top of the box.
    pub fn height_at(&self, fraction: f32) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.min.y + (self.max.y - self.min.y) * fraction
    }
}

/// Ground plane height derived from the terrain model bounds; 0 without a model.
pub fn plane_height(terrain_bounds: Option<&Aabb>) -> f32 {
    terrain_bounds
        .map(|b| b.height_at(PLANE_HEIGHT_FRACTION))
        .unwrap_or(0.0)
}
